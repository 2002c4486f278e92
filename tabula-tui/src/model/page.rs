//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 主从列表编辑器
    Lists,
    /// 自动增长编辑器网格
    Grid,
    /// 设置
    Settings,
}

impl Page {
    /// 获取页面标题（英文兜底，实际展示走 i18n）
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Lists => "Lists",
            Page::Grid => "Grid",
            Page::Settings => "Settings",
        }
    }
}
