//! View 层：UI 渲染
//!
//! View 层只读取 Model，不做任何修改。
//! 布局与页面尺寸相关的纯函数也放在这里，
//! Update 层做网格测量时复用同一套布局计算。

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
