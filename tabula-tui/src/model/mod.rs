//! Model 层：应用状态定义
//!
//! Model 层是应用状态的“唯一真相来源”。
//! 这一层只包含纯数据结构和状态操作方法，不做任何渲染或事件解析；
//! 所有状态变更都由 Update 层触发。
//!
//! 模块划分：
//!     - `app`        主应用状态（`App`）
//!     - `focus`      焦点状态（导航面板 / 内容面板，列表页内的左右窗格）
//!     - `navigation` 导航栏状态
//!     - `page`       页面路由枚举
//!     - `state/`     各页面的业务数据状态

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::{FocusPanel, ListsPane};
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{
    DeleteTarget, DetailState, DetailTab, FilterState, GridState, Modal, ModalState, RecordsState,
    SettingsState,
};
