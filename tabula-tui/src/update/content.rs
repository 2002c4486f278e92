//! 内容面板更新逻辑

use std::time::Instant;

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::state::DeleteTarget;
use crate::model::{App, ListsPane, Page};
use crate::util::cell_height;
use crate::view;

/// 处理内容面板消息（按当前页面分发）
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Lists => update_lists(app, msg),
        Page::Grid => update_grid(app, msg),
        Page::Settings => update_settings(app, msg),
        Page::Home => {}
    }
}

/// 列表页：按窗格分发
fn update_lists(app: &mut App, msg: ContentMessage) {
    match app.lists_pane {
        ListsPane::Master => update_master(app, msg),
        ListsPane::Detail => update_detail(app, msg),
    }
}

/// 主列表窗格（名称列表 + 过滤输入框）
fn update_master(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.records.select_previous(),
        ContentMessage::SelectNext => app.records.select_next(),
        ContentMessage::SelectFirst => app.records.select_first(),
        ContentMessage::SelectLast => app.records.select_last(),

        // 打开选中记录的详情标签页（已打开则只激活）
        ContentMessage::Confirm => {
            let Some(record) = app.records.selected_record() else {
                return;
            };
            app.detail.open(record);
            app.lists_pane = ListsPane::Detail;
        }

        // 新增空白记录，随即弹出重命名弹窗让用户取名
        ContentMessage::Add => {
            let id = app.records.add_record();
            let name = app
                .records
                .store
                .get(&id)
                .map(|record| record.name.clone())
                .unwrap_or_default();
            app.modal.show_rename(&id, &name);
            app.set_status(t().status_bar.record_added);
        }

        ContentMessage::Edit => {
            let Some(record) = app.records.selected_record() else {
                return;
            };
            let (id, name) = (record.id.clone(), record.name.clone());
            app.modal.show_rename(&id, &name);
        }

        ContentMessage::Delete => {
            let Some(record) = app.records.selected_record() else {
                return;
            };
            let (id, name) = (record.id.clone(), record.name.clone());
            app.modal
                .show_confirm_delete(DeleteTarget::Record { id }, &name);
        }

        ContentMessage::FocusDetail => {
            if !app.detail.is_empty() {
                app.lists_pane = ListsPane::Detail;
            }
        }

        ContentMessage::FilterChar(ch) => {
            app.records.push_filter_char(ch, Instant::now());
        }
        ContentMessage::FilterBackspace => {
            app.records.pop_filter_char(Instant::now());
        }
        ContentMessage::FilterClear => {
            app.records.clear_filter();
        }

        _ => {}
    }
}

/// 详情窗格（当前标签页的值列表）
fn update_detail(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => {
            if let Some(tab) = app.detail.active_tab_mut() {
                tab.select_previous();
            }
        }
        ContentMessage::SelectNext => {
            if let Some(tab) = app.detail.active_tab_mut() {
                tab.select_next();
            }
        }
        ContentMessage::SelectFirst => {
            if let Some(tab) = app.detail.active_tab_mut() {
                tab.select_first();
            }
        }
        ContentMessage::SelectLast => {
            if let Some(tab) = app.detail.active_tab_mut() {
                tab.select_last();
            }
        }

        ContentMessage::Add => {
            if app.detail.active_tab().is_some() {
                app.modal.show_value_add();
            }
        }

        // Enter 与 Alt+e 都是编辑当前选中的值
        ContentMessage::Edit | ContentMessage::Confirm => {
            let Some(tab) = app.detail.active_tab() else {
                return;
            };
            let Some(item) = tab.session.items().get(tab.selected) else {
                return;
            };
            let (index, text) = (tab.selected, item.text.clone());
            app.modal.show_value_edit(index, &text);
        }

        ContentMessage::Delete => {
            let Some(tab) = app.detail.active_tab() else {
                return;
            };
            let Some(item) = tab.session.items().get(tab.selected) else {
                return;
            };
            let (index, text) = (tab.selected, item.text.clone());
            app.modal
                .show_confirm_delete(DeleteTarget::Value { index }, &text);
        }

        // 手动把会话值写回记录（每次增删改已即时同步，
        // 这里是给用户的显式确认动作）
        ContentMessage::SyncValues => {
            let result = app
                .detail
                .active_tab()
                .map(|tab| tab.session.sync_into(&mut app.records.store));
            match result {
                Some(Ok(())) => app.set_status(t().lists.synced),
                Some(Err(err)) => {
                    app.modal.show_error(t().common.error, &err.to_string());
                }
                None => {}
            }
        }

        ContentMessage::NextTab => app.detail.next_tab(),
        ContentMessage::PrevTab => app.detail.prev_tab(),

        ContentMessage::CloseTab => {
            app.detail.close_active();
            if app.detail.is_empty() {
                app.lists_pane = ListsPane::Master;
            }
        }

        ContentMessage::FocusMaster => {
            app.lists_pane = ListsPane::Master;
        }

        _ => {}
    }
}

/// 网格页
fn update_grid(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.grid.select_previous(),
        ContentMessage::SelectNext => app.grid.select_next(),
        ContentMessage::SelectFirst => app.grid.selected = 0,
        ContentMessage::SelectLast => {
            if !app.grid.rows.is_empty() {
                app.grid.selected = app.grid.rows.len() - 1;
            }
        }

        // 进入单元格编辑：先量出只读单元格当前占的高度，
        // 作为编辑器的最小增长高度
        ContentMessage::Confirm => {
            let Some(row) = app.grid.selected_row() else {
                return;
            };
            let width = view::pages::grid::value_column_width(app.terminal_size);
            let measured = cell_height(&row.value, width);
            let index = app.grid.selected;
            app.grid.begin_edit(index, measured);
            app.set_status(t().grid.editing_hint);
        }

        ContentMessage::EditorInput(key) => {
            if let Some(editor) = app.grid.editor.as_mut() {
                editor.input(key);
            }
        }

        ContentMessage::CommitEdit => {
            if app.grid.commit_edit() {
                app.set_status(t().grid.saved);
            } else {
                app.set_status(t().grid.empty_rejected);
            }
        }

        ContentMessage::CancelEdit => {
            app.grid.cancel_edit();
            app.set_status(t().grid.cancelled);
        }

        _ => {}
    }
}

/// 设置页
fn update_settings(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),

        ContentMessage::TogglePrev => toggle_setting(app, false),
        ContentMessage::ToggleNext => toggle_setting(app, true),

        _ => {}
    }
}

/// 切换当前选中设置项的值（语言 / 主题），并立即生效
fn toggle_setting(app: &mut App, forward: bool) {
    match app.settings.selected {
        0 => {
            let lang = if forward {
                app.settings.language.next()
            } else {
                app.settings.language.prev()
            };
            app.settings.language = lang;
            crate::i18n::set_language(lang);
        }
        1 => {
            let theme = if forward {
                app.settings.theme.next()
            } else {
                app.settings.theme.prev()
            };
            app.settings.theme = theme;
            crate::view::theme::set_theme_index(theme.index());
        }
        _ => {}
    }
}
