//! 核心类型定义

mod grid;
mod record;
mod value_item;

pub use grid::GridRow;
pub use record::{Record, DEFAULT_RECORD_NAME};
pub use value_item::ValueItem;
