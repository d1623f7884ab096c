//! # cosm-lcd
//!
//! REST (LCD) client for Cosmos SDK nodes: account lookup, chain id
//! lookup and broadcast of amino and protobuf transactions.
//!
//! [`LcdClient`] implements the collaborator traits of `cosm-client`, so it
//! can be handed straight to a [`SigningClient`](cosm_client::SigningClient).
//!
//! # Example
//!
//! ```no_run
//! use cosm_lcd::{BroadcastMode, LcdClient, LcdConfig};
//!
//! let client = LcdClient::new(LcdConfig {
//!     base_url: "http://localhost:1317".to_string(),
//!     broadcast_mode: BroadcastMode::Sync,
//!     ..Default::default()
//! })
//! .unwrap();
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::LcdClient;
pub use error::LcdError;
pub use types::{BaseAccount, BroadcastMode, LcdConfig, TxResponse};
