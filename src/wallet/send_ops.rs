/// Send operations
///
/// Fee lookup, transaction submission, and pending registration for an
/// outbound transfer.
use crate::chain::{ChainApi, ChainTransaction};
use crate::error::WalletError;
use crate::pending::PendingTransactions;
use crate::wallet::asset::AssetKey;
use crate::wallet::state::CurrentWallet;

/// Send `amount` of the asset identified by `key` to `to_address`.
///
/// Fees are estimated first and the transfer goes out at the regular tier.
/// A successful send is registered with the pending tracker so the
/// reconciliation loop picks it up. Failures propagate to the caller; a
/// declined transaction (no hard error from the chain) maps to
/// `WalletError::SendRejected`.
pub async fn send_asset(
    store: &CurrentWallet,
    pending: &PendingTransactions,
    chain: &dyn ChainApi,
    key: &AssetKey,
    to_address: &str,
    amount: f64,
) -> Result<ChainTransaction, WalletError> {
    if !store.is_open() {
        return Err(WalletError::WalletClosed);
    }

    let asset = store
        .get_asset(key)
        .ok_or_else(|| WalletError::AssetNotFound {
            symbol: key.symbol.clone(),
            chain: key.chain.clone(),
        })?;

    let fees = chain.get_fees(&asset, to_address, amount).await?;
    log::debug!(
        "Fee estimate for {} -> {}: regular {}, priority {}",
        key,
        to_address,
        fees.regular,
        fees.priority
    );

    let tx = chain
        .make_send_transaction(&asset, to_address, amount, fees.regular)
        .await?
        .ok_or_else(|| {
            WalletError::SendRejected(format!("chain declined transfer of {} {}", amount, key))
        })?;

    pending.add(&asset, &tx.tx_id);
    log::info!("Sent {} {} as tx {}", amount, key, tx.tx_id);

    Ok(tx)
}
