//! Message 层：事件消息定义
//!
//! Event 层把形形色色的终端事件翻译成这里的消息，
//! Update 层根据消息修改 Model。所有的用户操作和状态变更
//! 都通过 Message 表达，Event 与 Update 之间不直接耦合。

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
