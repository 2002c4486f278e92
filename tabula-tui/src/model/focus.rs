//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航面板
    #[default]
    Navigation,
    /// 右侧内容面板
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    /// 是否是导航面板
    pub fn is_navigation(&self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    /// 是否是内容面板
    pub fn is_content(&self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}

/// 列表页内容区内部的窗格焦点：左侧主列表 / 右侧标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListsPane {
    /// 名称主列表（含过滤输入框）
    #[default]
    Master,
    /// 值编辑标签页
    Detail,
}

impl ListsPane {
    pub fn is_master(&self) -> bool {
        matches!(self, ListsPane::Master)
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, ListsPane::Detail)
    }
}
