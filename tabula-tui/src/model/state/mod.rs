//! 各页面的业务数据状态

mod detail;
mod grid;
mod modal;
mod records;
mod settings;

pub use detail::{DetailState, DetailTab};
pub use grid::{CellEditor, GridState};
pub use modal::{DeleteTarget, Modal, ModalState};
pub use records::{FilterState, RecordsState, FILTER_DEBOUNCE};
pub use settings::SettingsState;
