//! 弹窗更新逻辑

use tabula_core::CoreError;

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::state::{DeleteTarget, Modal};
use crate::model::{App, ListsPane};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::Input(ch) => {
            match app.modal.active.as_mut() {
                Some(Modal::RenameRecord { name, error, .. }) => {
                    name.push(ch);
                    *error = None;
                }
                Some(Modal::ValueInput { text, error, .. }) => {
                    text.push(ch);
                    *error = None;
                }
                _ => {}
            }
        }

        ModalMessage::Backspace => {
            match app.modal.active.as_mut() {
                Some(Modal::RenameRecord { name, error, .. }) => {
                    name.pop();
                    *error = None;
                }
                Some(Modal::ValueInput { text, error, .. }) => {
                    text.pop();
                    *error = None;
                }
                _ => {}
            }
        }

        ModalMessage::ToggleDeleteFocus => {
            if let Some(Modal::ConfirmDelete { focus, .. }) = app.modal.active.as_mut() {
                *focus = 1 - *focus;
            }
        }

        ModalMessage::Confirm => {
            handle_confirm(app);
        }
    }
}

/// 提交当前弹窗。
///
/// 先把弹窗从状态里取出来；校验失败时带着错误信息放回去，
/// 让用户改完重试。
fn handle_confirm(app: &mut App) {
    let Some(modal) = app.modal.active.take() else {
        return;
    };

    match modal {
        Modal::RenameRecord { id, name, .. } => confirm_rename(app, id, name),
        Modal::ValueInput { index, text, .. } => confirm_value(app, index, text),
        Modal::ConfirmDelete { target, focus, .. } => {
            // 焦点在“取消”上时，Enter 等同关闭
            if focus == 1 {
                confirm_delete(app, target);
            }
        }
        // 帮助 / 错误弹窗：Enter 即关闭
        Modal::Help | Modal::Error { .. } => {}
    }
}

/// 重命名记录；改名后列表重新排序，选中跟随这条记录
fn confirm_rename(app: &mut App, id: String, name: String) {
    match app.records.store.rename(&id, &name) {
        Ok(()) => {
            app.records.refresh();
            app.records.select_id(&id);
            app.set_status(t().status_bar.record_renamed);
        }
        Err(CoreError::Validation(_)) => {
            app.modal.active = Some(Modal::RenameRecord {
                id,
                name,
                error: Some(t().modal.name_required.to_string()),
            });
        }
        Err(err) => {
            app.modal.show_error(t().common.error, &err.to_string());
        }
    }
}

/// 新增或编辑当前标签页的一个值；
/// 会话的每次变更都会立即同步回记录
fn confirm_value(app: &mut App, index: Option<usize>, text: String) {
    let outcome = match app.detail.active_tab_mut() {
        Some(tab) => match index {
            None => tab
                .session
                .add(&mut app.records.store, &text)
                .map(|new_index| tab.selected = new_index),
            Some(i) => tab.session.edit(&mut app.records.store, i, &text),
        },
        None => return,
    };

    match outcome {
        Ok(()) => {
            let status = if index.is_some() {
                t().status_bar.value_updated
            } else {
                t().status_bar.value_added
            };
            app.set_status(status);
        }
        Err(CoreError::Validation(_)) => {
            app.modal.active = Some(Modal::ValueInput {
                index,
                text,
                error: Some(t().modal.value_required.to_string()),
            });
        }
        Err(err) => {
            app.modal.show_error(t().common.error, &err.to_string());
        }
    }
}

/// 执行删除（记录或值）
fn confirm_delete(app: &mut App, target: DeleteTarget) {
    match target {
        DeleteTarget::Record { id } => match app.records.store.remove(&id) {
            Ok(_) => {
                // 删除记录时连带关闭其标签页
                app.detail.close_for(&id);
                if app.detail.is_empty() && app.lists_pane.is_detail() {
                    app.lists_pane = ListsPane::Master;
                }
                app.records.refresh();
                app.set_status(t().status_bar.record_deleted);
            }
            Err(err) => {
                app.modal.show_error(t().common.error, &err.to_string());
            }
        },

        DeleteTarget::Value { index } => {
            let outcome = match app.detail.active_tab_mut() {
                Some(tab) => {
                    let result = tab.session.remove(&mut app.records.store, index);
                    tab.clamp_selection();
                    result
                }
                None => return,
            };
            match outcome {
                Ok(_) => app.set_status(t().status_bar.value_deleted),
                Err(err) => {
                    app.modal.show_error(t().common.error, &err.to_string());
                }
            }
        }
    }
}
