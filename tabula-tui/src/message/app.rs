//! 应用主消息枚举

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（导航 ↔ 内容）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回（关闭弹窗 / 回到主列表窗格 / 清空过滤）
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 终端尺寸变化（网格测量需要真实宽度）
    Resize(u16, u16),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
