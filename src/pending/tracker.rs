use crate::wallet::asset::{AssetKey, WalletAsset};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// A submitted-but-unconfirmed outbound transfer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTransaction {
    pub tx_id: String,
    pub chain: String,
    pub symbol: String,
    pub submitted_at: DateTime<Utc>,
}

/// In-memory index of in-flight outbound transactions, keyed by asset.
///
/// Entries reference assets by (chain, symbol) only; the tracker never holds
/// an asset itself. One asset may have any number of pending transactions.
pub struct PendingTransactions {
    txs: Mutex<HashMap<AssetKey, Vec<PendingTransaction>>>,
}

impl PendingTransactions {
    pub fn new() -> Self {
        Self {
            txs: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<AssetKey, Vec<PendingTransaction>>> {
        self.txs.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a pending transaction for an asset
    pub fn add(&self, asset: &WalletAsset, tx_id: &str) {
        let entry = PendingTransaction {
            tx_id: tx_id.to_string(),
            chain: asset.chain.clone(),
            symbol: asset.symbol.clone(),
            submitted_at: Utc::now(),
        };
        log::debug!("Tracking pending tx {} for {}", tx_id, asset.key());
        self.lock().entry(asset.key()).or_default().push(entry);
    }

    /// All pending transactions for the asset's (chain, symbol) key,
    /// oldest first
    pub fn pending_for_asset(&self, asset: &WalletAsset) -> Vec<PendingTransaction> {
        self.lock().get(&asset.key()).cloned().unwrap_or_default()
    }

    /// Drop one entry by transaction id
    pub fn remove(&self, asset: &WalletAsset, tx_id: &str) {
        let mut txs = self.lock();
        if let Some(entries) = txs.get_mut(&asset.key()) {
            entries.retain(|tx| tx.tx_id != tx_id);
            if entries.is_empty() {
                txs.remove(&asset.key());
            }
        }
    }

    /// Total pending entries across all assets
    pub fn len(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PendingTransactions {
    fn default() -> Self {
        Self::new()
    }
}
