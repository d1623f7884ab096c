#![deny(missing_docs)]

//! Cosmos SDK client - Complete SDK.
//!
//! Re-exports all client components for convenient single-crate usage.

pub use cosm_primitives as primitives;
pub use cosm_proto as proto;
pub use cosm_signing as signing;
pub use cosm_wallet as wallet;
pub use cosm_client as client;
pub use cosm_lcd as lcd;
