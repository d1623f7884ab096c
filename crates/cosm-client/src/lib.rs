//! # cosm-client
//!
//! Composes the signing core with the network collaborators it needs:
//! account and sequence lookup, chain id lookup and broadcast. Those are
//! traits in [`provider`]; this crate performs no I/O of its own.
//!
//! # Example
//!
//! ```no_run
//! use cosm_client::{ClientConfig, GasPrice};
//!
//! let config = ClientConfig {
//!     gas_price: "0.025ucosm".to_string(),
//!     ..Default::default()
//! };
//! let price: GasPrice = config.gas_price.parse().unwrap();
//! assert_eq!(price.denom(), "ucosm");
//! ```

pub mod config;
pub mod gas;
pub mod provider;
pub mod signing_client;

mod error;

#[cfg(test)]
mod tests;

pub use config::ClientConfig;
pub use error::ClientError;
pub use gas::{build_fee_table, FeeTable, GasLimits, GasPrice};
pub use provider::{
    AccountQuery, BroadcastFailure, BroadcastPayload, BroadcastTxResult, Broadcaster,
    ChainIdSource, SequenceResponse,
};
pub use signing_client::SigningClient;
