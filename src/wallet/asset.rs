use serde::{Deserialize, Serialize};
use std::fmt;

fn default_decimals() -> u32 {
    8
}

/// One unit of a wallet's holdings: a specific token on a specific chain.
///
/// Within one wallet's registry, (`chain`, `symbol`) identifies an asset for
/// balance updates and (`cid`, `chain`) for registry lookups. Serializes
/// with camelCase keys to stay compatible with existing stored wallets.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAsset {
    pub name: String,
    pub chain: String,
    pub public_key: String,
    /// Key material. Stays inside the wallet context; redacted from Debug.
    pub private_key: String,
    pub address: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(default)]
    pub cid: String,
    #[serde(default)]
    pub contract: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

impl WalletAsset {
    /// The (chain, symbol) lookup key for balance updates
    pub fn key(&self) -> AssetKey {
        AssetKey {
            chain: self.chain.clone(),
            symbol: self.symbol.clone(),
        }
    }

    pub fn matches_key(&self, key: &AssetKey) -> bool {
        self.symbol == key.symbol && self.chain == key.chain
    }
}

impl fmt::Debug for WalletAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletAsset")
            .field("name", &self.name)
            .field("chain", &self.chain)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("address", &self.address)
            .field("symbol", &self.symbol)
            .field("asset_type", &self.asset_type)
            .field("cid", &self.cid)
            .field("contract", &self.contract)
            .field("balance", &self.balance)
            .field("value", &self.value)
            .field("rate", &self.rate)
            .field("version", &self.version)
            .field("image", &self.image)
            .field("decimals", &self.decimals)
            .finish()
    }
}

/// Balance-update lookup key: one per (chain, symbol) pair
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetKey {
    pub chain: String,
    pub symbol: String,
}

impl AssetKey {
    pub fn new(chain: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chain, self.symbol)
    }
}
