//! Standalone low-stock audit.
//!
//! Reads the persisted product table and appends a timestamped report to a
//! log. Runs as its own process with no shared in-memory state: coordination
//! with the system that owns the table happens only through the persisted
//! schema contract (table `productos`, columns `nombre` and `stock`), so the
//! report is eventually consistent with whatever was last saved.

pub mod error;
pub mod log;
pub mod report;
pub mod store;

pub use error::AuditError;
pub use log::append_report;
pub use report::{DEFAULT_THRESHOLD, render_report, resolve_threshold};
pub use store::{LOW_STOCK_QUERY, LowStockRow, fetch_low_stock};
