//! 导航面板消息类型

/// 导航面板相关消息
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// 上移
    SelectPrevious,

    /// 下移
    SelectNext,

    /// 跳到第一项
    SelectFirst,

    /// 跳到最后一项
    SelectLast,

    /// 确认选择（切换页面）
    Confirm,
}
