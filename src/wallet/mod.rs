/// Wallet Core Module
///
/// The open-wallet store and its asset registry:
///
/// - `asset.rs` - asset model and lookup keys
/// - `state.rs` - the `CurrentWallet` store (lifecycle, lookups, refresh)
/// - `send_ops.rs` - outbound transfer orchestration

pub mod asset;
pub mod send_ops;
pub mod state;

pub use asset::{AssetKey, WalletAsset};
pub use state::{CurrentWallet, WalletSnapshot};
