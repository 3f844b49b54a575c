//! Persistence adapters for the inventory.
//!
//! Two artifacts live here: the JSON snapshot of the whole product
//! collection, and the per-transaction receipt files. Both are plain files;
//! the snapshot is replaced atomically so a concurrent reader never sees a
//! half-written document.

pub mod error;
pub mod snapshot;
pub mod ticket;

pub use error::StorageError;
pub use snapshot::SnapshotStore;
pub use ticket::TicketWriter;
