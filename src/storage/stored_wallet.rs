use crate::error::WalletError;
use crate::wallet::asset::WalletAsset;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The persisted wallet document.
///
/// The core reads `walletName` and `assets`; everything else in the document
/// (mnemonic, seed, derivation data owned by the secure wallet store) is
/// carried opaquely so existing stored wallets round-trip byte-compatibly.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWallet {
    pub wallet_name: String,
    #[serde(default)]
    pub assets: Vec<WalletAsset>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoredWallet {
    /// Parse a wallet document from its serialized JSON form.
    ///
    /// Malformed JSON is a hard error: it means the stored wallet is
    /// corrupted and must surface to the caller.
    pub fn load_from_json(json: &str) -> Result<Self, WalletError> {
        let wallet = serde_json::from_str(json)?;
        Ok(wallet)
    }

    /// Serialize the document back to its at-rest JSON form
    pub fn to_json(&self) -> Result<String, WalletError> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}

impl std::fmt::Debug for StoredWallet {
    // Key material lives in `extra`; show only the shape.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredWallet")
            .field("wallet_name", &self.wallet_name)
            .field("assets", &self.assets)
            .field("extra_keys", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}
