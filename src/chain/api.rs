use crate::chain::types::{ChainTransaction, FeeEstimate, TxStatus};
use crate::error::WalletError;
use crate::wallet::asset::WalletAsset;

/// Chain API collaborator
///
/// Everything the core needs from the outside world about an asset's chain:
/// balance, history, status of a submitted transaction, fee estimates, and
/// transaction submission. Implementations wrap whatever node or indexer
/// backs a given chain; every call may fail independently.
#[async_trait::async_trait]
pub trait ChainApi: Send + Sync {
    /// Current balance of the asset's address, in asset units
    async fn get_balance(&self, asset: &WalletAsset) -> Result<f64, WalletError>;

    /// Transaction history for the asset's address
    async fn get_transactions(
        &self,
        asset: &WalletAsset,
    ) -> Result<Vec<ChainTransaction>, WalletError>;

    /// Confirmation status of a transaction by id
    async fn get_transaction_status(
        &self,
        asset: &WalletAsset,
        tx_id: &str,
    ) -> Result<TxStatus, WalletError>;

    /// Fee estimate for sending `amount` to `to_address`
    async fn get_fees(
        &self,
        asset: &WalletAsset,
        to_address: &str,
        amount: f64,
    ) -> Result<FeeEstimate, WalletError>;

    /// Build, sign, and submit a transfer at the given fee rate
    ///
    /// Returns `None` when the chain backend declines the transaction
    /// without a hard error (e.g. dust output, mempool policy).
    async fn make_send_transaction(
        &self,
        asset: &WalletAsset,
        to_address: &str,
        amount: f64,
        fee: f64,
    ) -> Result<Option<ChainTransaction>, WalletError>;

    /// Block-explorer URL for the asset's address
    fn transactions_url(&self, asset: &WalletAsset) -> String;
}
