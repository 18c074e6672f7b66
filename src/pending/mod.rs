//! Pending-transaction tracking and reconciliation
//!
//! - `tracker.rs` - in-memory index of in-flight outbound transactions
//! - `monitor.rs` - interval-driven status polling against the chain API

mod monitor;
mod tracker;

pub use monitor::{PendingMonitor, ReconcileEvent};
pub use tracker::{PendingTransaction, PendingTransactions};
