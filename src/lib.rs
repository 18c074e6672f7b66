//! wallet-core: asset and state management for a mobile crypto wallet
//!
//! The in-memory model behind the wallet screens: the active wallet and its
//! asset registry, balance reconciliation against an abstract chain API, and
//! tracking of outbound transactions awaiting confirmation.
//!
//! # Architecture
//!
//! - **CurrentWallet**: the single open-wallet store (lifecycle, lookups,
//!   balance refresh, snapshot subscriptions)
//! - **PendingTransactions / PendingMonitor**: in-flight transfer index and
//!   the interval loop that reconciles it against chain state
//! - **WalletManager**: the context object wired at startup, delegating to
//!   the store, the tracker, and the collaborator traits
//!
//! The UI, key storage, and concrete chain clients live outside this crate;
//! they connect through `ChainApi` and `WalletStorage`.

pub mod chain;
pub mod config;
pub mod error;
pub mod manager;
pub mod pending;
pub mod storage;
pub mod wallet;

pub use chain::{ChainApi, ChainInfo, ChainTransaction, FeeEstimate, TxStatus};
pub use config::WalletConfig;
pub use error::WalletError;
pub use manager::WalletManager;
pub use pending::{PendingMonitor, PendingTransaction, PendingTransactions, ReconcileEvent};
pub use storage::{FileStore, StoredWallet, WalletStorage};
pub use wallet::{AssetKey, CurrentWallet, WalletAsset, WalletSnapshot};
