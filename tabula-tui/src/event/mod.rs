//! Event 层：事件处理
//!
//! 负责将键盘/终端输入事件转换为 Message。
//! `poll_event` 由主循环调用以等待事件；`handle_event` 把
//! 事件翻译成 `AppMessage`，由 Update 层消费。
//!
//! 分发顺序：
//!     1. 有弹窗打开时，优先交给弹窗处理
//!     2. 网格编辑器激活时，按键直接喂给编辑器
//!     3. 全局快捷键（退出、帮助、焦点切换、返回）
//!     4. 按焦点面板与当前页面分发

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
