use crate::chain::{ChainApi, ChainInfo};
use crate::error::WalletError;
use crate::storage::{StoredWallet, WalletStorage};
use crate::wallet::asset::{AssetKey, WalletAsset};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::watch;

/// Immutable view of the store, published to subscribers on every commit
#[derive(Clone, Debug)]
pub struct WalletSnapshot {
    pub name: String,
    pub assets: Vec<WalletAsset>,
    pub loading_balance: bool,
    pub is_open: bool,
}

impl WalletSnapshot {
    fn closed() -> Self {
        Self {
            name: String::new(),
            assets: Vec::new(),
            loading_balance: false,
            is_open: false,
        }
    }
}

struct Inner {
    /// The open wallet document; `None` is the closed terminal state.
    /// `assets` below is mirrored into `wallet.assets` on every mutation.
    wallet: Option<StoredWallet>,
    name: String,
    assets: Vec<WalletAsset>,
    /// Keys with a balance fetch currently in flight
    refreshing: HashSet<AssetKey>,
    /// Refresh calls not yet settled; backs `loading_balance`
    active_refreshes: u32,
}

/// The single open-wallet store.
///
/// Two states: Closed (initial, `wallet` absent, registry empty) and Open.
/// `open` replaces the content atomically; `close` is idempotent. Lookups in
/// the Closed state return not-found, mutations are no-ops. One instance is
/// wired at startup and handed to whoever needs it; all mutation goes
/// through these methods.
pub struct CurrentWallet {
    inner: Mutex<Inner>,
    snapshot_tx: watch::Sender<WalletSnapshot>,
}

impl CurrentWallet {
    pub fn new() -> Self {
        let (snapshot_tx, _) = watch::channel(WalletSnapshot::closed());
        Self {
            inner: Mutex::new(Inner {
                wallet: None,
                name: String::new(),
                assets: Vec::new(),
                refreshing: HashSet::new(),
                active_refreshes: 0,
            }),
            snapshot_tx,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock leaves state observable but intact;
        // keep serving rather than poisoning every later call.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self, inner: &Inner) {
        self.snapshot_tx.send_replace(WalletSnapshot {
            name: inner.name.clone(),
            assets: inner.assets.clone(),
            loading_balance: inner.active_refreshes > 0,
            is_open: inner.wallet.is_some(),
        });
    }

    /// Mirror the registry into the stored document
    fn sync_document(inner: &mut Inner) {
        if let Some(wallet) = inner.wallet.as_mut() {
            wallet.assets = inner.assets.clone();
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Open a wallet, replacing any previously open one
    pub fn open(&self, wallet: StoredWallet) {
        let mut inner = self.lock();
        inner.name = wallet.wallet_name.clone();
        inner.assets = wallet.assets.clone();
        inner.wallet = Some(wallet);
        log::info!(
            "Opened wallet '{}' with {} assets",
            inner.name,
            inner.assets.len()
        );
        self.publish(&inner);
    }

    /// Reset to the closed state. Idempotent.
    pub fn close(&self) {
        let mut inner = self.lock();
        if inner.wallet.is_some() {
            log::info!("Closing wallet '{}'", inner.name);
        }
        inner.wallet = None;
        inner.name.clear();
        inner.assets.clear();
        self.publish(&inner);
    }

    // ------------------------------------------------------------------
    // Registry access
    // ------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.lock().wallet.is_some()
    }

    pub fn name(&self) -> String {
        self.lock().name.clone()
    }

    pub fn assets(&self) -> Vec<WalletAsset> {
        self.lock().assets.clone()
    }

    pub fn loading_balance(&self) -> bool {
        self.lock().active_refreshes > 0
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Observe every committed mutation as an immutable snapshot
    pub fn subscribe(&self) -> watch::Receiver<WalletSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// The open wallet document, or `None` when closed
    pub fn get_wallet(&self) -> Option<StoredWallet> {
        self.lock().wallet.clone()
    }

    /// Serialized form of the open wallet document
    pub fn wallet_json(&self) -> Result<Option<String>, WalletError> {
        let inner = self.lock();
        match inner.wallet.as_ref() {
            Some(wallet) => Ok(Some(wallet.to_json()?)),
            None => Ok(None),
        }
    }

    /// First asset with the given registry id, optionally narrowed by chain.
    ///
    /// Without `chain` the result is registry-order dependent when the same
    /// cid exists on several chains; use `get_assets_by_id` to see them all.
    pub fn get_asset_by_id(&self, cid: &str, chain: Option<&str>) -> Option<WalletAsset> {
        self.lock()
            .assets
            .iter()
            .find(|a| a.cid == cid && chain.map_or(true, |c| a.chain == c))
            .cloned()
    }

    /// Every asset registered under the given registry id
    pub fn get_assets_by_id(&self, cid: &str) -> Vec<WalletAsset> {
        self.lock()
            .assets
            .iter()
            .filter(|a| a.cid == cid)
            .cloned()
            .collect()
    }

    /// The asset matching the given (chain, symbol) key
    pub fn get_asset(&self, key: &AssetKey) -> Option<WalletAsset> {
        self.lock()
            .assets
            .iter()
            .find(|a| a.matches_key(key))
            .cloned()
    }

    /// First asset on the given chain
    pub fn get_asset_by_chain(&self, chain: &str) -> Option<WalletAsset> {
        self.lock().assets.iter().find(|a| a.chain == chain).cloned()
    }

    /// Address of the first asset on the given chain, or "" if none
    pub fn get_wallet_address_by_chain(&self, chain: &str) -> String {
        match self.get_asset_by_chain(chain) {
            Some(asset) => asset.address,
            None => {
                log::debug!("No asset on chain '{}', returning empty address", chain);
                String::new()
            }
        }
    }

    /// Whether any registered asset lives on the given network's chain
    pub fn has_asset(&self, network: &ChainInfo) -> bool {
        self.lock().assets.iter().any(|a| a.chain == network.id)
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Replace the asset list wholesale.
    ///
    /// The caller keeps the list internally consistent; duplicate
    /// (chain, symbol) pairs are not rejected here.
    pub fn set_assets(&self, assets: Vec<WalletAsset>) {
        let mut inner = self.lock();
        if inner.wallet.is_none() {
            log::debug!("set_assets ignored: no open wallet");
            return;
        }
        inner.assets = assets;
        Self::sync_document(&mut inner);
        self.publish(&inner);
    }

    /// Zero every asset's balance, leaving all other fields untouched
    pub fn reset_balance(&self) {
        let mut inner = self.lock();
        if inner.wallet.is_none() {
            return;
        }
        for asset in &mut inner.assets {
            asset.balance = 0.0;
        }
        Self::sync_document(&mut inner);
        self.publish(&inner);
    }

    /// Overwrite the balance of the asset matching (symbol, chain).
    ///
    /// An unknown key means the caller holds a stale reference; that is a
    /// recoverable condition, logged and ignored.
    pub fn set_balance(&self, key: &AssetKey, balance: f64) {
        let mut inner = self.lock();
        match inner.assets.iter_mut().find(|a| a.matches_key(key)) {
            Some(asset) => {
                asset.balance = balance;
                log::debug!("Balance for {} set to {}", key, balance);
            }
            None => {
                log::warn!("Ignoring balance update for unknown asset {}", key);
                return;
            }
        }
        Self::sync_document(&mut inner);
        self.publish(&inner);
    }

    // ------------------------------------------------------------------
    // Reconciliation
    // ------------------------------------------------------------------

    /// Refresh every asset's balance from the chain API.
    ///
    /// Assets are queried one at a time; a failed lookup is logged and the
    /// loop moves on. Assets that already have a fetch in flight (an
    /// overlapping refresh) are skipped. `loading_balance` stays true until
    /// every outstanding refresh call has settled.
    pub async fn refresh_balances(&self, chain: &dyn ChainApi) {
        let targets: Vec<WalletAsset> = {
            let mut inner = self.lock();
            if inner.wallet.is_none() {
                log::debug!("refresh_balances ignored: no open wallet");
                return;
            }
            inner.active_refreshes += 1;
            let targets: Vec<WalletAsset> = inner
                .assets
                .iter()
                .filter(|a| !inner.refreshing.contains(&a.key()))
                .cloned()
                .collect();
            for asset in &targets {
                inner.refreshing.insert(asset.key());
            }
            self.publish(&inner);
            targets
        };

        for asset in targets {
            let key = asset.key();
            match chain.get_balance(&asset).await {
                Ok(balance) => self.set_balance(&key, balance),
                Err(e) => log::warn!("Balance refresh failed for {}: {}", key, e),
            }
            self.lock().refreshing.remove(&key);
        }

        let mut inner = self.lock();
        inner.active_refreshes = inner.active_refreshes.saturating_sub(1);
        self.publish(&inner);
    }

    /// Delete the persisted wallet document for the open wallet.
    ///
    /// Best-effort: failures are logged and swallowed.
    pub async fn remove_wallet(&self, storage: &dyn WalletStorage) {
        let name = self.name();
        if name.is_empty() {
            log::debug!("remove_wallet ignored: no open wallet");
            return;
        }
        if let Err(e) = storage.remove(&name).await {
            log::warn!("Failed to delete stored wallet '{}': {}", name, e);
        }
    }
}

impl Default for CurrentWallet {
    fn default() -> Self {
        Self::new()
    }
}
