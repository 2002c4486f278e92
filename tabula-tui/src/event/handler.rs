//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, ListsPane, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 网格测量依赖真实终端宽度，尺寸变化要进 Model
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 判断字符输入：无修饰或仅 Shift（大写字母）
fn is_plain_input(key: &KeyEvent) -> bool {
    key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 网格编辑器激活时，除了保存/取消，按键全部交给编辑器
    if app.current_page == Page::Grid && app.grid.is_editing() {
        return handle_editor_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    // '?' 也能打开帮助，但只在导航面板焦点下生效，
    // 避免吞掉列表页过滤输入框的字符
    if app.focus.is_navigation()
        && key.modifiers.is_empty()
        && key.code == KeyCode::Char('?')
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match &app.current_page {
        Page::Lists => match app.lists_pane {
            ListsPane::Master => handle_master_keys(key),
            ListsPane::Detail => handle_detail_keys(key),
        },
        Page::Grid => handle_grid_keys(key),
        Page::Settings => handle_settings_keys(key),
        Page::Home => AppMessage::Noop,
    }
}

/// 处理列表页主列表窗格的按键
///
/// 注意：这个窗格带过滤输入框，可打印字符要进过滤框，
/// 所以上下移动只认方向键，不认 j/k。
fn handle_master_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_RENAME.matches(&key) || DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::CLEAR_FILTER.matches(&key) {
        return AppMessage::Content(ContentMessage::FilterClear);
    }

    match key.code {
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),

        // Enter: 在详情窗格打开选中记录的标签页
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),

        // →: 焦点移到详情窗格
        KeyCode::Right => AppMessage::Content(ContentMessage::FocusDetail),

        // 过滤输入
        KeyCode::Backspace => AppMessage::Content(ContentMessage::FilterBackspace),
        KeyCode::Char(ch) if is_plain_input(&key) => {
            AppMessage::Content(ContentMessage::FilterChar(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理列表页详情窗格的按键
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_SYNC.matches(&key) {
        return AppMessage::Content(ContentMessage::SyncValues);
    }
    if DefaultKeymap::CLOSE_TAB.matches(&key) {
        return AppMessage::Content(ContentMessage::CloseTab);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),

        // Enter: 编辑选中的值
        KeyCode::Enter => AppMessage::Content(ContentMessage::Edit),

        // ←: 焦点回到主列表窗格
        KeyCode::Left => AppMessage::Content(ContentMessage::FocusMaster),

        // [ ]: 切换标签页
        KeyCode::Char('[') => AppMessage::Content(ContentMessage::PrevTab),
        KeyCode::Char(']') => AppMessage::Content(ContentMessage::NextTab),

        _ => AppMessage::Noop,
    }
}

/// 处理网格页的按键（未进入编辑时）
fn handle_grid_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),

        // Enter: 进入单元格编辑
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 处理网格编辑器激活时的按键
fn handle_editor_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::COMMIT_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::CommitEdit);
    }
    if key.modifiers.is_empty() && key.code == KeyCode::Esc {
        return AppMessage::Content(ContentMessage::CancelEdit);
    }

    // 其余按键（包括 Enter 换行）全部交给编辑器
    AppMessage::Content(ContentMessage::EditorInput(key))
}

/// 处理设置页的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),

        // ← →: 切换当前设置项的值
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Enter => AppMessage::Content(ContentMessage::ToggleNext),

        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    use crate::model::state::Modal;

    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::RenameRecord { .. } | Modal::ValueInput { .. } => handle_input_modal_keys(key),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help | Modal::Error { .. } => {
            // 帮助和错误弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理单行文本输入弹窗的按键（重命名 / 值输入）
fn handle_input_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Enter: 确认提交
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),

        // 字符输入
        KeyCode::Char(ch) if is_plain_input(&key) => AppMessage::Modal(ModalMessage::Input(ch)),

        _ => AppMessage::Noop,
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }

        // Enter: 确认
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;

    fn lists_app() -> App {
        let mut app = App::new().unwrap();
        app.current_page = Page::Lists;
        app.focus = FocusPanel::Content;
        app
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_characters_feed_the_filter_input() {
        let app = lists_app();
        let msg = handle_key_event(press(KeyCode::Char('d'), KeyModifiers::NONE), &app);
        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::FilterChar('d'))
        ));
    }

    #[test]
    fn ctrl_u_clears_the_filter_in_the_master_pane() {
        let app = lists_app();
        let msg = handle_key_event(press(KeyCode::Char('u'), KeyModifiers::CONTROL), &app);
        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::FilterClear)
        ));
    }

    #[test]
    fn backspace_edits_the_filter_not_the_list() {
        let app = lists_app();
        let msg = handle_key_event(press(KeyCode::Backspace, KeyModifiers::NONE), &app);
        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::FilterBackspace)
        ));
    }
}
