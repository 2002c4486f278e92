//! 应用主状态结构

use tabula_core::{seed, CoreResult, RecordStore};

use super::state::{DetailState, GridState, ModalState, RecordsState, SettingsState};
use super::{FocusPanel, ListsPane, NavigationState, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 列表页内部的窗格焦点（主列表 / 详情标签页）
    pub lists_pane: ListsPane,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 终端尺寸（宽, 高），网格测量需要真实宽度
    pub terminal_size: (u16, u16),

    // === 各页面状态 ===
    /// 主列表页面状态
    pub records: RecordsState,
    /// 详情标签页状态
    pub detail: DetailState,
    /// 网格页面状态
    pub grid: GridState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建应用初始状态（加载内置演示数据）
    pub fn new() -> CoreResult<Self> {
        let store = RecordStore::from_records(seed::demo_records()?);
        Ok(Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            lists_pane: ListsPane::Master,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            terminal_size: (0, 0),
            records: RecordsState::new(store),
            detail: DetailState::new(),
            grid: GridState::new(seed::demo_grid_rows()?),
            settings: SettingsState::new(),
            modal: ModalState::new(),
        })
    }

    /// 设置状态栏消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态栏消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
