use crate::chain::{ChainApi, ChainTransaction, TxStatus};
use crate::pending::tracker::{PendingTransaction, PendingTransactions};
use crate::wallet::asset::WalletAsset;
use crate::wallet::state::CurrentWallet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Emitted when a watched pending transaction reaches a terminal status
#[derive(Debug)]
pub enum ReconcileEvent {
    TxSettled {
        tx: PendingTransaction,
        status: TxStatus,
        /// Refreshed history for the asset, fetched after settlement
        history: Vec<ChainTransaction>,
    },
}

/// Periodic reconciliation of one asset's pending transactions.
///
/// Polls the chain API for the status of every pending entry of the watched
/// asset, immediately on spawn and then on each interval tick. A terminal
/// status removes the entry, refreshes the asset's balance in the store,
/// re-fetches history, and emits a `ReconcileEvent`. Poll errors are logged
/// and retried on the next tick.
///
/// The monitor owns a background task; dropping it (or calling `stop`)
/// aborts the task, so a torn-down view cannot leave a live timer behind.
pub struct PendingMonitor {
    handle: JoinHandle<()>,
}

impl PendingMonitor {
    pub fn spawn(
        store: Arc<CurrentWallet>,
        pending: Arc<PendingTransactions>,
        chain: Arc<dyn ChainApi>,
        asset: WalletAsset,
        interval: Duration,
    ) -> (Self, mpsc::Receiver<ReconcileEvent>) {
        let (event_tx, event_rx) = mpsc::channel(16);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                reconcile(&store, &pending, chain.as_ref(), &asset, &event_tx).await;
            }
        });

        (Self { handle }, event_rx)
    }

    /// Abort the polling task
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for PendingMonitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn reconcile(
    store: &CurrentWallet,
    pending: &PendingTransactions,
    chain: &dyn ChainApi,
    asset: &WalletAsset,
    events: &mpsc::Sender<ReconcileEvent>,
) {
    for tx in pending.pending_for_asset(asset) {
        match chain.get_transaction_status(asset, &tx.tx_id).await {
            Ok(status) if status.is_terminal() => {
                log::info!("Pending tx {} settled: {:?}", tx.tx_id, status);
                pending.remove(asset, &tx.tx_id);

                match chain.get_balance(asset).await {
                    Ok(balance) => store.set_balance(&asset.key(), balance),
                    Err(e) => {
                        log::warn!("Post-settlement balance fetch failed for {}: {}", asset.key(), e)
                    }
                }

                let history = match chain.get_transactions(asset).await {
                    Ok(history) => history,
                    Err(e) => {
                        log::warn!("Post-settlement history fetch failed for {}: {}", asset.key(), e);
                        Vec::new()
                    }
                };

                let _ = events
                    .send(ReconcileEvent::TxSettled { tx, status, history })
                    .await;
            }
            Ok(_) => {
                // still pending; check again next tick
            }
            Err(e) => {
                log::warn!(
                    "Status poll failed for tx {} ({}), retrying next tick: {}",
                    tx.tx_id,
                    asset.key(),
                    e
                );
            }
        }
    }
}
