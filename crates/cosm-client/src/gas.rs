//! Gas prices and fee tables.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use cosm_signing::amino::{Coin, StdFee};

use crate::error::ClientError;

/// Fractional digits carried by a gas price.
pub const GAS_PRICE_DECIMALS: u32 = 18;

const ONE: u128 = 10u128.pow(GAS_PRICE_DECIMALS);

/// Default gas limit of a token transfer.
pub const DEFAULT_SEND_GAS: u64 = 80_000;

const GAS_PRICE_PATTERN: &str = r"^([0-9]+(?:\.[0-9]+)?)([a-zA-Z][a-zA-Z0-9/:._-]{2,127})$";

fn gas_price_regex() -> Result<&'static Regex, ClientError> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(GAS_PRICE_PATTERN))
        .as_ref()
        .map_err(|e| ClientError::Config(e.to_string()))
}

/// Price paid per unit of gas, e.g. `0.025ucosm`.
///
/// The amount is kept as an integer count of 10^-18 units so fee
/// computation is exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GasPrice {
    atomics: u128,
    denom: String,
}

impl GasPrice {
    pub fn denom(&self) -> &str {
        &self.denom
    }

    /// The amount scaled by 10^18.
    pub fn atomics(&self) -> u128 {
        self.atomics
    }

    /// Fee for `gas_limit` units of gas, rounded up to a whole denom unit.
    ///
    /// # Returns
    /// The fee, or `ClientError::Config` if the amount overflows.
    pub fn fee(&self, gas_limit: u64) -> Result<StdFee, ClientError> {
        let scaled = self
            .atomics
            .checked_mul(u128::from(gas_limit))
            .ok_or_else(|| ClientError::Config(format!("fee for {} gas overflows", gas_limit)))?;
        let amount = scaled / ONE + u128::from(scaled % ONE != 0);
        Ok(StdFee {
            amount: vec![Coin::new(amount.to_string(), self.denom.clone())],
            gas: gas_limit.to_string(),
        })
    }
}

impl FromStr for GasPrice {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = gas_price_regex()?
            .captures(s)
            .ok_or_else(|| ClientError::Config(format!("invalid gas price: {:?}", s)))?;
        let amount = &caps[1];
        let denom = caps[2].to_string();

        let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
        if fraction.len() > GAS_PRICE_DECIMALS as usize {
            return Err(ClientError::Config(format!(
                "gas price {} has more than {} fractional digits",
                amount, GAS_PRICE_DECIMALS
            )));
        }
        let overflow = || ClientError::Config(format!("gas price {} is too large", amount));
        let whole: u128 = whole.parse().map_err(|_| overflow())?;
        let fraction_atomics: u128 = if fraction.is_empty() {
            0
        } else {
            let digits: u128 = fraction.parse().map_err(|_| overflow())?;
            digits * 10u128.pow(GAS_PRICE_DECIMALS - fraction.len() as u32)
        };
        let atomics = whole
            .checked_mul(ONE)
            .and_then(|w| w.checked_add(fraction_atomics))
            .ok_or_else(overflow)?;
        Ok(GasPrice { atomics, denom })
    }
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.atomics / ONE;
        let fraction = self.atomics % ONE;
        if fraction == 0 {
            return write!(f, "{}{}", whole, self.denom);
        }
        let digits = format!("{:018}", fraction);
        write!(f, "{}.{}{}", whole, digits.trim_end_matches('0'), self.denom)
    }
}

/// Gas limits of the client's built-in operations.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GasLimits {
    pub send: u64,
}

impl Default for GasLimits {
    fn default() -> Self {
        GasLimits {
            send: DEFAULT_SEND_GAS,
        }
    }
}

/// Precomputed fees of the client's built-in operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeTable {
    pub send: StdFee,
}

/// Price every limit in `limits` at `gas_price`.
pub fn build_fee_table(gas_price: &GasPrice, limits: &GasLimits) -> Result<FeeTable, ClientError> {
    Ok(FeeTable {
        send: gas_price.fee(limits.send)?,
    })
}
