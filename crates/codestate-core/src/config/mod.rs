//! Configuration domain module.
//!
//! Models the host-owned configuration document, the one-shot OS snapshot
//! used to gate execution-target choices, and the UI theme.

mod model;
mod os_info;
mod theme;

// Re-export public API
pub use model::{Config, LoggerConfig};
pub use os_info::{ExecutionTarget, OsInfo};
pub use theme::Theme;
