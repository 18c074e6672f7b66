use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Malformed wallet document: {0}")]
    MalformedWallet(#[from] serde_json::Error),

    #[error("No wallet is open")]
    WalletClosed,

    #[error("No asset {symbol} on chain {chain}")]
    AssetNotFound { symbol: String, chain: String },

    #[error("Chain API error: {0}")]
    Chain(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Send rejected: {0}")]
    SendRejected(String),
}

impl From<std::io::Error> for WalletError {
    fn from(e: std::io::Error) -> Self {
        WalletError::Storage(e.to_string())
    }
}
