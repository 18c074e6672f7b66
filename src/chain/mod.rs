//! Chain API collaborator seam
//!
//! - `api.rs` - the `ChainApi` trait the core calls for balances, history,
//!   status, fees, and sends
//! - `types.rs` - wire types shared with implementations

mod api;
mod types;

pub use api::ChainApi;
pub use types::{ChainInfo, ChainTransaction, FeeEstimate, TxStatus};
