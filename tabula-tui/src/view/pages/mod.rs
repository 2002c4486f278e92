//! 各页面视图

pub mod grid;
pub mod home;
pub mod lists;
pub mod settings;
