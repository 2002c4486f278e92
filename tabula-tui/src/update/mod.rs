//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，
//! 是唯一可以修改 Model 的地方。
//!
//! 复杂的子消息委托给子模块处理（navigation、content、modal）。
//! 除了消息驱动的 [`update`]，这里还有两个由主循环直接调用的钩子：
//!
//!   - [`tick`]         每轮循环调用，推进与时间相关的状态（过滤防抖）
//!   - [`after_render`] 每帧渲染之后调用，应用网格编辑器暂存的增长高度
//!     （编辑器的最小高度取自进入编辑前测得的只读单元格，
//!     控件要等首次渲染后才算挂载完成）

mod content;
mod modal;
mod navigation;

use std::time::Instant;

use crate::message::AppMessage;
use crate::model::{App, ListsPane, NavItemId, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            // 逐层返回：弹窗 → 详情窗格 → 过滤条件 → 导航面板
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.current_page == Page::Lists && app.lists_pane.is_detail() {
                app.lists_pane = ListsPane::Master;
            } else if app.current_page == Page::Lists
                && !app.records.filter.input.is_empty()
            {
                app.records.clear_filter();
            } else if app.focus.is_content() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Resize(width, height) => {
            app.terminal_size = (width, height);
        }

        AppMessage::Noop => {}
    }
}

/// 每轮主循环的时钟步进：
/// 过滤输入停顿超过防抖窗口后才真正应用
pub fn tick(app: &mut App) {
    app.records.tick_filter(Instant::now());
}

/// 一帧渲染完成之后调用：
/// 网格编辑器首次渲染后应用暂存的最小增长高度
pub fn after_render(app: &mut App) {
    app.grid.editor_mounted();
}

/// 根据导航项 ID 获取对应的页面
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Home => Page::Home,
        NavItemId::Lists => Page::Lists,
        NavItemId::Grid => Page::Grid,
        NavItemId::Settings => Page::Settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, ModalMessage};
    use crate::model::state::Modal;
    use crate::model::FocusPanel;

    fn lists_app() -> App {
        let mut app = App::new().unwrap();
        app.current_page = Page::Lists;
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn opening_a_record_creates_one_tab_and_moves_to_the_detail_pane() {
        let mut app = lists_app();

        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert_eq!(app.detail.tabs.len(), 1);
        assert!(app.lists_pane.is_detail());

        // 同一条记录再打开一次：不产生新标签页
        update(&mut app, AppMessage::Content(ContentMessage::FocusMaster));
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert_eq!(app.detail.tabs.len(), 1);
    }

    #[test]
    fn add_record_opens_the_rename_modal_prefilled() {
        let mut app = lists_app();
        let before = app.records.store.len();

        update(&mut app, AppMessage::Content(ContentMessage::Add));

        assert_eq!(app.records.store.len(), before + 1);
        match app.modal.active {
            Some(Modal::RenameRecord { ref name, .. }) => {
                assert_eq!(name, tabula_core::types::DEFAULT_RECORD_NAME);
            }
            ref other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn rename_keeps_the_open_tab_bound_to_the_record() {
        let mut app = lists_app();

        // 选中排在第一位的 David 并打开标签页
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        let record_id = app.records.selected_id().unwrap().to_string();
        update(&mut app, AppMessage::Content(ContentMessage::FocusMaster));

        // 重命名为 Zoe：列表重新排序，标签页仍然绑定同一条记录
        update(&mut app, AppMessage::Content(ContentMessage::Edit));
        for _ in 0.."David".len() {
            update(&mut app, AppMessage::Modal(ModalMessage::Backspace));
        }
        for ch in "Zoe".chars() {
            update(&mut app, AppMessage::Modal(ModalMessage::Input(ch)));
        }
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert!(app.modal.active.is_none());
        assert_eq!(app.records.store.get(&record_id).unwrap().name, "Zoe");
        assert_eq!(app.records.store.position(&record_id), Some(2));
        assert_eq!(app.detail.position_of(&record_id), Some(0));
    }

    #[test]
    fn blank_rename_is_rejected_and_the_modal_stays_open() {
        let mut app = lists_app();
        update(&mut app, AppMessage::Content(ContentMessage::Edit));

        for _ in 0.."David".len() {
            update(&mut app, AppMessage::Modal(ModalMessage::Backspace));
        }
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        match app.modal.active {
            Some(Modal::RenameRecord { ref error, .. }) => assert!(error.is_some()),
            ref other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn deleting_a_record_closes_its_tab() {
        let mut app = lists_app();
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert_eq!(app.detail.tabs.len(), 1);

        update(&mut app, AppMessage::Content(ContentMessage::FocusMaster));
        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleDeleteFocus));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert_eq!(app.records.store.len(), 2);
        assert!(app.detail.is_empty());
        assert!(app.lists_pane.is_master());
    }

    #[test]
    fn confirm_delete_defaults_to_cancel() {
        let mut app = lists_app();
        update(&mut app, AppMessage::Content(ContentMessage::Delete));

        // 直接回车：焦点默认在取消上，什么都不删
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert!(app.modal.active.is_none());
        assert_eq!(app.records.store.len(), 3);
    }

    #[test]
    fn adding_a_value_through_the_modal_syncs_the_record() {
        let mut app = lists_app();
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        let record_id = app.records.selected_id().unwrap().to_string();

        update(&mut app, AppMessage::Content(ContentMessage::Add));
        for ch in "zz".chars() {
            update(&mut app, AppMessage::Modal(ModalMessage::Input(ch)));
        }
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        let record = app.records.store.get(&record_id).unwrap();
        assert_eq!(record.values, vec!["rick", "ky", "na", "zz"]);
        // 新行被选中
        assert_eq!(app.detail.active_tab().unwrap().selected, 3);
    }

    #[test]
    fn grid_edit_defers_growth_until_after_the_first_render() {
        let mut app = App::new().unwrap();
        app.current_page = Page::Grid;
        app.focus = FocusPanel::Content;
        update(&mut app, AppMessage::Resize(100, 30));

        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert!(app.grid.is_editing());
        assert!(app.grid.pending_grow.is_some());

        after_render(&mut app);
        assert!(app.grid.pending_grow.is_none());
        // 种子数据第一行有两行文本
        assert!(app.grid.editor.as_ref().unwrap().grow_min >= 2);
    }

    #[test]
    fn grid_commit_writes_back_and_leaves_edit_mode() {
        let mut app = App::new().unwrap();
        app.current_page = Page::Grid;
        app.focus = FocusPanel::Content;
        update(&mut app, AppMessage::Resize(100, 30));

        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        after_render(&mut app);
        update(&mut app, AppMessage::Content(ContentMessage::CommitEdit));

        assert!(!app.grid.is_editing());
        assert_eq!(app.grid.rows[0].value, "Initial text\nwith line breaks");
    }

    #[test]
    fn go_back_unwinds_modal_then_pane_then_filter() {
        let mut app = lists_app();
        update(
            &mut app,
            AppMessage::Content(ContentMessage::FilterChar('d')),
        );
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        update(&mut app, AppMessage::Content(ContentMessage::Add));

        update(&mut app, AppMessage::GoBack);
        assert!(app.modal.active.is_none());
        assert!(app.lists_pane.is_detail());

        update(&mut app, AppMessage::GoBack);
        assert!(app.lists_pane.is_master());

        update(&mut app, AppMessage::GoBack);
        assert!(app.records.filter.input.is_empty());
    }
}
