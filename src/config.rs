/// Wallet core configuration from environment variables
///
/// Controls the pending-transaction poll cadence and where the file-backed
/// wallet store keeps its documents.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct WalletConfig {
    /// Interval between pending-transaction status polls
    pub poll_interval: Duration,
    /// Base directory for the file-backed wallet store
    pub store_dir: PathBuf,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `PENDING_POLL_INTERVAL_SECS`: seconds between status polls (default 10)
    /// - `WALLET_STORE_DIR`: wallet document directory (default "./wallets")
    pub fn from_env() -> Self {
        let poll_secs = env::var("PENDING_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);
        log::info!("Pending transaction poll interval: {}s", poll_secs);

        let store_dir = env::var("WALLET_STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                log::info!("Wallet store directory: ./wallets (default)");
                PathBuf::from("./wallets")
            });

        Self {
            poll_interval: Duration::from_secs(poll_secs),
            store_dir,
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10),
            store_dir: PathBuf::from("./wallets"),
        }
    }
}
