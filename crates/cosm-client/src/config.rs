//! Signing client configuration.

use serde::Deserialize;

use crate::error::ClientError;
use crate::gas::{build_fee_table, FeeTable, GasLimits, GasPrice};

/// Default price per unit of gas.
pub const DEFAULT_GAS_PRICE: &str = "0.025ucosm";

/// Configuration for a [`SigningClient`](crate::SigningClient).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Gas price such as `0.025ucosm`.
    pub gas_price: String,
    /// Overrides for the built-in gas limits.
    pub gas_limits: GasLimits,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            gas_price: DEFAULT_GAS_PRICE.to_string(),
            gas_limits: GasLimits::default(),
        }
    }
}

impl ClientConfig {
    pub fn gas_price(&self) -> Result<GasPrice, ClientError> {
        self.gas_price.parse()
    }

    /// Fees for the built-in operations at the configured price.
    pub fn fee_table(&self) -> Result<FeeTable, ClientError> {
        build_fee_table(&self.gas_price()?, &self.gas_limits)
    }
}
