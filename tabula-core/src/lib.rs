//! Tabula Core Library
//!
//! Provides the data model and synchronization logic for the Tabula
//! editors, including:
//! - The master record list (sorted, filterable)
//! - Detail value-item sessions with explicit write-back sync
//! - Markup-safe display encoding for multi-line grid cells
//!
//! This library is UI-independent: the TUI front end drives it through
//! plain synchronous calls, and everything lives in memory for the
//! lifetime of the process.

pub mod detail;
pub mod error;
pub mod markup;
pub mod seed;
pub mod store;
pub mod types;

// Re-export common types
pub use detail::DetailSession;
pub use error::{CoreError, CoreResult};
pub use store::RecordStore;
pub use types::{GridRow, Record, ValueItem};
