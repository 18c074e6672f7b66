#![allow(dead_code)]

/// Common test utilities for wallet-core integration tests
///
/// Shared infrastructure:
/// - Scriptable mock chain API (balances, failures, status sequences)
/// - In-memory wallet storage
/// - Test environment builder wiring a manager with both mocks
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use wallet_core::{
    AssetKey, ChainApi, ChainTransaction, FeeEstimate, StoredWallet, TxStatus, WalletAsset,
    WalletConfig, WalletError, WalletManager, WalletStorage,
};

pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(true)
        .try_init();
}

// ----------------------------------------------------------------------
// Mock chain API
// ----------------------------------------------------------------------

#[derive(Default)]
pub struct MockChainApi {
    balances: Mutex<HashMap<AssetKey, f64>>,
    failing_balances: Mutex<HashSet<AssetKey>>,
    /// Scripted status responses per tx id, consumed front to back;
    /// an exhausted script keeps answering Pending
    statuses: Mutex<HashMap<String, VecDeque<Result<TxStatus, String>>>>,
    history: Mutex<HashMap<AssetKey, Vec<ChainTransaction>>>,
    decline_sends: AtomicBool,
    balance_delay_ms: AtomicUsize,
    balance_calls: AtomicUsize,
    status_calls: AtomicUsize,
    sent_txs: AtomicUsize,
}

impl MockChainApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(&self, key: AssetKey, balance: f64) {
        self.balances.lock().unwrap().insert(key, balance);
    }

    pub fn fail_balance(&self, key: AssetKey) {
        self.failing_balances.lock().unwrap().insert(key);
    }

    pub fn push_status(&self, tx_id: &str, response: Result<TxStatus, &str>) {
        self.statuses
            .lock()
            .unwrap()
            .entry(tx_id.to_string())
            .or_default()
            .push_back(response.map_err(|e| e.to_string()));
    }

    pub fn set_history(&self, key: AssetKey, txs: Vec<ChainTransaction>) {
        self.history.lock().unwrap().insert(key, txs);
    }

    pub fn decline_sends(&self) {
        self.decline_sends.store(true, Ordering::SeqCst);
    }

    /// Make every get_balance call take this long (for overlap tests)
    pub fn set_balance_delay(&self, delay: Duration) {
        self.balance_delay_ms
            .store(delay.as_millis() as usize, Ordering::SeqCst);
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ChainApi for MockChainApi {
    async fn get_balance(&self, asset: &WalletAsset) -> Result<f64, WalletError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.balance_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }

        let key = asset.key();
        if self.failing_balances.lock().unwrap().contains(&key) {
            return Err(WalletError::Chain(format!("balance lookup down for {}", key)));
        }
        Ok(self.balances.lock().unwrap().get(&key).copied().unwrap_or(0.0))
    }

    async fn get_transactions(
        &self,
        asset: &WalletAsset,
    ) -> Result<Vec<ChainTransaction>, WalletError> {
        Ok(self
            .history
            .lock()
            .unwrap()
            .get(&asset.key())
            .cloned()
            .unwrap_or_default())
    }

    async fn get_transaction_status(
        &self,
        _asset: &WalletAsset,
        tx_id: &str,
    ) -> Result<TxStatus, WalletError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .statuses
            .lock()
            .unwrap()
            .get_mut(tx_id)
            .and_then(|script| script.pop_front());
        match next {
            Some(Ok(status)) => Ok(status),
            Some(Err(e)) => Err(WalletError::Chain(e)),
            None => Ok(TxStatus::Pending),
        }
    }

    async fn get_fees(
        &self,
        _asset: &WalletAsset,
        _to_address: &str,
        _amount: f64,
    ) -> Result<FeeEstimate, WalletError> {
        Ok(FeeEstimate {
            regular: 0.0001,
            priority: 0.0005,
        })
    }

    async fn make_send_transaction(
        &self,
        _asset: &WalletAsset,
        _to_address: &str,
        amount: f64,
        _fee: f64,
    ) -> Result<Option<ChainTransaction>, WalletError> {
        if self.decline_sends.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let n = self.sent_txs.fetch_add(1, Ordering::SeqCst);
        Ok(Some(ChainTransaction {
            tx_id: format!("tx-{}", n),
            hash: format!("hash-{}", n),
            date: None,
            out: true,
            amount,
        }))
    }

    fn transactions_url(&self, asset: &WalletAsset) -> String {
        format!("https://explorer.test/{}/{}", asset.chain, asset.address)
    }
}

// ----------------------------------------------------------------------
// In-memory wallet storage
// ----------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryStore {
    wallets: Mutex<HashMap<String, StoredWallet>>,
    fail_remove: AtomicBool,
    removed: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_removals(&self) {
        self.fail_remove.store(true, Ordering::SeqCst);
    }

    pub fn removed_names(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl WalletStorage for MemoryStore {
    async fn save_wallet(&self, wallet: &StoredWallet) -> Result<(), WalletError> {
        self.wallets
            .lock()
            .unwrap()
            .insert(wallet.wallet_name.clone(), wallet.clone());
        Ok(())
    }

    async fn load_wallet(&self, name: &str) -> Result<StoredWallet, WalletError> {
        self.wallets
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| WalletError::Storage(format!("no wallet named {}", name)))
    }

    async fn list_wallets(&self) -> Result<Vec<String>, WalletError> {
        Ok(self.wallets.lock().unwrap().keys().cloned().collect())
    }

    async fn remove(&self, name: &str) -> Result<(), WalletError> {
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(WalletError::Storage("store unavailable".to_string()));
        }
        self.removed.lock().unwrap().push(name.to_string());
        self.wallets.lock().unwrap().remove(name);
        Ok(())
    }
}

// ----------------------------------------------------------------------
// Fixtures
// ----------------------------------------------------------------------

pub fn asset(chain: &str, symbol: &str) -> WalletAsset {
    serde_json::from_value(serde_json::json!({
        "name": symbol,
        "chain": chain,
        "publicKey": format!("pub-{}", symbol),
        "privateKey": format!("priv-{}", symbol),
        "address": format!("addr-{}-{}", chain, symbol),
        "symbol": symbol,
        "type": "native",
    }))
    .expect("valid asset fixture")
}

pub fn asset_with_cid(chain: &str, symbol: &str, cid: &str) -> WalletAsset {
    let mut a = asset(chain, symbol);
    a.cid = cid.to_string();
    a
}

pub fn sample_wallet(name: &str, assets: Vec<WalletAsset>) -> StoredWallet {
    let mut doc = serde_json::json!({
        "walletName": name,
        "mnemonic": "test test test",
    });
    doc["assets"] = serde_json::to_value(&assets).expect("serializable assets");
    serde_json::from_value(doc).expect("valid wallet fixture")
}

/// Manager wired with both mocks and a fast poll interval
pub struct TestEnvironment {
    pub manager: WalletManager,
    pub chain: Arc<MockChainApi>,
    pub storage: Arc<MemoryStore>,
}

impl TestEnvironment {
    pub fn new() -> Self {
        init_logging();

        let chain = Arc::new(MockChainApi::new());
        let storage = Arc::new(MemoryStore::new());
        let config = WalletConfig {
            poll_interval: Duration::from_millis(25),
            ..Default::default()
        };
        let manager = WalletManager::new_with_config(
            config,
            Arc::clone(&chain) as Arc<dyn ChainApi>,
            Arc::clone(&storage) as Arc<dyn WalletStorage>,
        );

        Self {
            manager,
            chain,
            storage,
        }
    }
}
