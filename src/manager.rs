use crate::chain::{ChainApi, ChainTransaction};
use crate::config::WalletConfig;
use crate::error::WalletError;
/// Wallet Manager - Orchestration Layer
///
/// The single context object wired at startup. Owns the open-wallet store,
/// the pending-transaction tracker, and handles to the two collaborators,
/// and delegates operations to them.
use crate::pending::{PendingMonitor, PendingTransactions, ReconcileEvent};
use crate::storage::{StoredWallet, WalletStorage};
use crate::wallet::asset::AssetKey;
use crate::wallet::send_ops::send_asset;
use crate::wallet::state::CurrentWallet;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct WalletManager {
    pub config: WalletConfig,
    store: Arc<CurrentWallet>,
    pending: Arc<PendingTransactions>,
    chain: Arc<dyn ChainApi>,
    storage: Arc<dyn WalletStorage>,
}

impl WalletManager {
    pub fn new(chain: Arc<dyn ChainApi>, storage: Arc<dyn WalletStorage>) -> Self {
        Self::new_with_config(WalletConfig::from_env(), chain, storage)
    }

    /// Create a manager with explicit configuration (for testing)
    pub fn new_with_config(
        config: WalletConfig,
        chain: Arc<dyn ChainApi>,
        storage: Arc<dyn WalletStorage>,
    ) -> Self {
        Self {
            config,
            store: Arc::new(CurrentWallet::new()),
            pending: Arc::new(PendingTransactions::new()),
            chain,
            storage,
        }
    }

    pub fn store(&self) -> &Arc<CurrentWallet> {
        &self.store
    }

    pub fn pending(&self) -> &Arc<PendingTransactions> {
        &self.pending
    }

    // ------------------------------------------------------------------
    // Wallet lifecycle
    // ------------------------------------------------------------------

    /// Load a stored wallet by name and open it
    pub async fn open_wallet(&self, name: &str) -> Result<(), WalletError> {
        let wallet = self.storage.load_wallet(name).await?;
        self.store.open(wallet);
        Ok(())
    }

    /// Open an already-loaded wallet document
    pub fn open(&self, wallet: StoredWallet) {
        self.store.open(wallet);
    }

    pub fn close_wallet(&self) {
        self.store.close();
    }

    /// Persist the open wallet document
    pub async fn save_wallet(&self) -> Result<(), WalletError> {
        let wallet = self.store.get_wallet().ok_or(WalletError::WalletClosed)?;
        self.storage.save_wallet(&wallet).await
    }

    /// Delete the open wallet's persisted document (best-effort)
    pub async fn delete_wallet(&self) {
        self.store.remove_wallet(self.storage.as_ref()).await;
    }

    pub async fn list_wallets(&self) -> Result<Vec<String>, WalletError> {
        self.storage.list_wallets().await
    }

    // ------------------------------------------------------------------
    // Balances & transfers
    // ------------------------------------------------------------------

    pub async fn refresh_balances(&self) {
        self.store.refresh_balances(self.chain.as_ref()).await;
    }

    pub async fn send(
        &self,
        key: &AssetKey,
        to_address: &str,
        amount: f64,
    ) -> Result<ChainTransaction, WalletError> {
        send_asset(
            &self.store,
            &self.pending,
            self.chain.as_ref(),
            key,
            to_address,
            amount,
        )
        .await
    }

    /// Block-explorer URL for a registered asset
    pub fn explorer_url(&self, key: &AssetKey) -> Result<String, WalletError> {
        let asset = self
            .store
            .get_asset(key)
            .ok_or_else(|| WalletError::AssetNotFound {
                symbol: key.symbol.clone(),
                chain: key.chain.clone(),
            })?;
        Ok(self.chain.transactions_url(&asset))
    }

    /// Start reconciling the pending transactions of one asset.
    ///
    /// The returned monitor polls at the configured interval until dropped.
    pub fn watch_asset(
        &self,
        key: &AssetKey,
    ) -> Result<(PendingMonitor, mpsc::Receiver<ReconcileEvent>), WalletError> {
        let asset = self
            .store
            .get_asset(key)
            .ok_or_else(|| WalletError::AssetNotFound {
                symbol: key.symbol.clone(),
                chain: key.chain.clone(),
            })?;

        Ok(PendingMonitor::spawn(
            Arc::clone(&self.store),
            Arc::clone(&self.pending),
            Arc::clone(&self.chain),
            asset,
            self.config.poll_interval,
        ))
    }
}
