use crate::error::WalletError;
use crate::storage::stored_wallet::StoredWallet;

/// Wallet persistence collaborator
///
/// The core treats persistence as an opaque store of wallet documents keyed
/// by wallet name. Key derivation and encryption live behind this seam.
#[async_trait::async_trait]
pub trait WalletStorage: Send + Sync {
    async fn save_wallet(&self, wallet: &StoredWallet) -> Result<(), WalletError>;

    async fn load_wallet(&self, name: &str) -> Result<StoredWallet, WalletError>;

    async fn list_wallets(&self) -> Result<Vec<String>, WalletError>;

    async fn remove(&self, name: &str) -> Result<(), WalletError>;
}
