use crate::error::WalletError;
use crate::storage::store::WalletStorage;
use crate::storage::stored_wallet::StoredWallet;
use std::fs;
use std::path::PathBuf;

/// File-backed wallet store: one `<name>.json` document per wallet
#[derive(Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the default base directory ("./wallets")
    pub fn new() -> Self {
        Self {
            base_path: PathBuf::from("./wallets"),
        }
    }

    /// Create a store with a custom base directory (for testing)
    pub fn new_with_base_dir(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_path
    }

    fn wallet_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", name))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WalletStorage for FileStore {
    async fn save_wallet(&self, wallet: &StoredWallet) -> Result<(), WalletError> {
        fs::create_dir_all(&self.base_path)?;
        let path = self.wallet_path(&wallet.wallet_name);
        let json = serde_json::to_string_pretty(wallet)?;
        fs::write(path, json)?;
        Ok(())
    }

    async fn load_wallet(&self, name: &str) -> Result<StoredWallet, WalletError> {
        let path = self.wallet_path(name);
        if !path.exists() {
            return Err(WalletError::Storage(format!(
                "Wallet document not found: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        StoredWallet::load_from_json(&contents)
    }

    async fn list_wallets(&self) -> Result<Vec<String>, WalletError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut wallets = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    wallets.push(stem.to_string());
                }
            }
        }
        Ok(wallets)
    }

    async fn remove(&self, name: &str) -> Result<(), WalletError> {
        let path = self.wallet_path(name);
        if !path.exists() {
            return Err(WalletError::Storage(format!(
                "Wallet document not found: {}",
                path.display()
            )));
        }

        log::warn!("Deleting wallet document: {:?}", path);
        fs::remove_file(path)?;
        Ok(())
    }
}
