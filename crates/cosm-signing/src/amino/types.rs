//! Legacy amino JSON types.
//!
//! Numbers that may exceed 53 bits (account numbers, sequences, gas, coin
//! amounts) are carried as decimal strings.

use serde::{Deserialize, Serialize};

use cosm_proto::cosmos::base::v1beta1 as proto;

/// Amino type tag of a secp256k1 public key.
pub const PUBKEY_SECP256K1_TYPE: &str = "tendermint/PubKeySecp256k1";

/// A token amount in amino JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Coin {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

impl From<&proto::Coin> for Coin {
    fn from(c: &proto::Coin) -> Self {
        Coin {
            denom: c.denom.clone(),
            amount: c.amount.clone(),
        }
    }
}

impl From<&Coin> for proto::Coin {
    fn from(c: &Coin) -> Self {
        proto::Coin {
            denom: c.denom.clone(),
            amount: c.amount.clone(),
        }
    }
}

/// A fee: coins plus the gas limit as a decimal string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

/// A message in amino JSON form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AminoMsg {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub value: serde_json::Value,
}

/// The document signed in SIGN_MODE_LEGACY_AMINO_JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StdSignDoc {
    pub account_number: String,
    pub chain_id: String,
    pub fee: StdFee,
    pub memo: String,
    pub msgs: Vec<AminoMsg>,
    pub sequence: String,
}

/// An amino-encoded public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AminoPubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    /// Base64 of the compressed key.
    pub value: String,
}

/// A signature together with the public key that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    pub pub_key: AminoPubKey,
    /// Base64 of the 64-byte `r || s` signature.
    pub signature: String,
}

/// A legacy amino transaction, as posted to `/txs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StdTx {
    pub msg: Vec<AminoMsg>,
    pub fee: StdFee,
    pub signatures: Vec<StdSignature>,
    pub memo: String,
}
