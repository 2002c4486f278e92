//! Util 层：基础设施和工具函数
//!
//! 提供与业务逻辑无关的基础设施代码：
//! 终端的初始化与恢复，以及单元格高度测量。

mod measure;
mod terminal;

pub use measure::cell_height;
pub use terminal::{init_terminal, restore_terminal, Term};
