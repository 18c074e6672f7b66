use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confirmation status of a submitted transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    /// Submitted, not yet confirmed or rejected
    Pending,
    /// Confirmed on chain
    Success,
    /// Rejected or dropped by the chain
    Failed,
}

impl TxStatus {
    /// Whether this status ends the transaction's pending lifecycle
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

/// One entry of an asset's transaction history, as reported by the chain API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainTransaction {
    pub tx_id: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// True for outbound transfers
    #[serde(default)]
    pub out: bool,
    #[serde(default)]
    pub amount: f64,
}

/// Fee estimate for a prospective transfer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub regular: f64,
    pub priority: f64,
}

/// Descriptor of a chain/network as listed in the token registry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainInfo {
    /// Chain identifier, matches `WalletAsset::chain`
    pub id: String,
    /// Human-readable network name
    pub name: String,
}
