//! Conversion between protobuf messages and their amino JSON form.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cosm_proto::cosmos::bank::v1beta1::{Input, MsgMultiSend, MsgSend, Output};
use cosm_proto::cosmos::distribution::v1beta1::MsgWithdrawDelegatorReward;
use cosm_proto::cosmos::staking::v1beta1::{MsgBeginRedelegate, MsgDelegate, MsgUndelegate};
use cosm_proto::{ProtoMessage, TypedMessage};

use super::types::{AminoMsg, Coin};
use crate::TxError;

type ToAminoFn = fn(&dyn ProtoMessage) -> Result<Value, TxError>;
type FromAminoFn = fn(&Value) -> Result<Box<dyn ProtoMessage>, TxError>;

/// How one protobuf message type maps to amino JSON.
#[derive(Clone)]
pub struct AminoConverter {
    /// Amino type tag, e.g. `cosmos-sdk/MsgSend`.
    pub amino_type: String,
    pub to_amino: ToAminoFn,
    pub from_amino: FromAminoFn,
}

impl AminoConverter {
    /// Converter for a proto message `M` whose amino shape is `A`.
    pub fn new<M, A>(amino_type: &str) -> Self
    where
        M: TypedMessage,
        A: Serialize + DeserializeOwned + for<'a> TryFrom<&'a M, Error = TxError> + TryInto<M, Error = TxError>,
    {
        AminoConverter {
            amino_type: amino_type.to_string(),
            to_amino: to_amino_via::<M, A>,
            from_amino: from_amino_via::<M, A>,
        }
    }
}

fn to_amino_via<M, A>(value: &dyn ProtoMessage) -> Result<Value, TxError>
where
    M: TypedMessage,
    A: Serialize + for<'a> TryFrom<&'a M, Error = TxError>,
{
    let msg = value.downcast_ref::<M>().ok_or_else(|| {
        TxError::AminoJson(format!(
            "expected {}, got {}",
            std::any::type_name::<M>(),
            value.type_name()
        ))
    })?;
    Ok(serde_json::to_value(A::try_from(msg)?)?)
}

fn from_amino_via<M, A>(value: &Value) -> Result<Box<dyn ProtoMessage>, TxError>
where
    M: TypedMessage,
    A: DeserializeOwned + TryInto<M, Error = TxError>,
{
    let amino: A = serde_json::from_value(value.clone())?;
    let msg: M = amino.try_into()?;
    Ok(Box::new(msg))
}

/// Registry of amino converters keyed by protobuf type URL.
#[derive(Clone, Default)]
pub struct AminoTypes {
    by_type_url: BTreeMap<String, AminoConverter>,
}

impl AminoTypes {
    pub fn new() -> Self {
        AminoTypes::default()
    }

    /// Converters for the built-in bank, staking and distribution messages.
    pub fn with_defaults() -> Self {
        let mut types = AminoTypes::new();
        types.add(MsgSend::TYPE_URL, AminoConverter::new::<MsgSend, AminoMsgSend>("cosmos-sdk/MsgSend"));
        types.add(
            MsgMultiSend::TYPE_URL,
            AminoConverter::new::<MsgMultiSend, AminoMsgMultiSend>("cosmos-sdk/MsgMultiSend"),
        );
        types.add(
            MsgDelegate::TYPE_URL,
            AminoConverter::new::<MsgDelegate, AminoMsgDelegate>("cosmos-sdk/MsgDelegate"),
        );
        types.add(
            MsgUndelegate::TYPE_URL,
            AminoConverter::new::<MsgUndelegate, AminoMsgUndelegate>("cosmos-sdk/MsgUndelegate"),
        );
        types.add(
            MsgBeginRedelegate::TYPE_URL,
            AminoConverter::new::<MsgBeginRedelegate, AminoMsgBeginRedelegate>(
                "cosmos-sdk/MsgBeginRedelegate",
            ),
        );
        types.add(
            MsgWithdrawDelegatorReward::TYPE_URL,
            AminoConverter::new::<MsgWithdrawDelegatorReward, AminoMsgWithdrawDelegatorReward>(
                "cosmos-sdk/MsgWithdrawDelegationReward",
            ),
        );
        types
    }

    /// Add or replace the converter for `type_url`.
    pub fn add(&mut self, type_url: &str, converter: AminoConverter) {
        self.by_type_url.insert(type_url.to_string(), converter);
    }

    /// Convert a protobuf message to amino JSON.
    ///
    /// # Returns
    /// The amino message, or `TxError::UnsupportedAminoType` if no converter
    /// is registered for `type_url`.
    pub fn to_amino(&self, type_url: &str, value: &dyn ProtoMessage) -> Result<AminoMsg, TxError> {
        let converter = self
            .by_type_url
            .get(type_url)
            .ok_or_else(|| TxError::UnsupportedAminoType(type_url.to_string()))?;
        Ok(AminoMsg {
            msg_type: converter.amino_type.clone(),
            value: (converter.to_amino)(value)?,
        })
    }

    /// Convert an amino message back to protobuf.
    ///
    /// # Returns
    /// The type URL and typed value, or `TxError::UnsupportedAminoType` if the
    /// amino type is unknown.
    pub fn from_amino(&self, msg: &AminoMsg) -> Result<(String, Box<dyn ProtoMessage>), TxError> {
        let (type_url, converter) = self
            .by_type_url
            .iter()
            .find(|(_, c)| c.amino_type == msg.msg_type)
            .ok_or_else(|| TxError::UnsupportedAminoType(msg.msg_type.clone()))?;
        Ok((type_url.clone(), (converter.from_amino)(&msg.value)?))
    }
}

// -----------------------------------------------------------------------
// Amino shapes of the built-in messages
// -----------------------------------------------------------------------

pub(super) fn coins_to_amino(coins: &[cosm_proto::cosmos::base::v1beta1::Coin]) -> Vec<Coin> {
    coins.iter().map(Coin::from).collect()
}

pub(super) fn coins_from_amino(coins: &[Coin]) -> Vec<cosm_proto::cosmos::base::v1beta1::Coin> {
    coins.iter().map(Into::into).collect()
}

fn required_coin(
    coin: &Option<cosm_proto::cosmos::base::v1beta1::Coin>,
    msg: &str,
) -> Result<Coin, TxError> {
    coin.as_ref()
        .map(Coin::from)
        .ok_or_else(|| TxError::Validation(format!("{} is missing its amount", msg)))
}

#[derive(Serialize, Deserialize)]
struct AminoMsgSend {
    from_address: String,
    to_address: String,
    amount: Vec<Coin>,
}

impl TryFrom<&MsgSend> for AminoMsgSend {
    type Error = TxError;
    fn try_from(m: &MsgSend) -> Result<Self, TxError> {
        Ok(AminoMsgSend {
            from_address: m.from_address.clone(),
            to_address: m.to_address.clone(),
            amount: coins_to_amino(&m.amount),
        })
    }
}

impl TryFrom<AminoMsgSend> for MsgSend {
    type Error = TxError;
    fn try_from(a: AminoMsgSend) -> Result<Self, TxError> {
        Ok(MsgSend {
            from_address: a.from_address,
            to_address: a.to_address,
            amount: coins_from_amino(&a.amount),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AminoIo {
    address: String,
    coins: Vec<Coin>,
}

#[derive(Serialize, Deserialize)]
struct AminoMsgMultiSend {
    inputs: Vec<AminoIo>,
    outputs: Vec<AminoIo>,
}

impl TryFrom<&MsgMultiSend> for AminoMsgMultiSend {
    type Error = TxError;
    fn try_from(m: &MsgMultiSend) -> Result<Self, TxError> {
        Ok(AminoMsgMultiSend {
            inputs: m
                .inputs
                .iter()
                .map(|i| AminoIo { address: i.address.clone(), coins: coins_to_amino(&i.coins) })
                .collect(),
            outputs: m
                .outputs
                .iter()
                .map(|o| AminoIo { address: o.address.clone(), coins: coins_to_amino(&o.coins) })
                .collect(),
        })
    }
}

impl TryFrom<AminoMsgMultiSend> for MsgMultiSend {
    type Error = TxError;
    fn try_from(a: AminoMsgMultiSend) -> Result<Self, TxError> {
        Ok(MsgMultiSend {
            inputs: a
                .inputs
                .into_iter()
                .map(|i| Input { coins: coins_from_amino(&i.coins), address: i.address })
                .collect(),
            outputs: a
                .outputs
                .into_iter()
                .map(|o| Output { coins: coins_from_amino(&o.coins), address: o.address })
                .collect(),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AminoMsgDelegate {
    delegator_address: String,
    validator_address: String,
    amount: Coin,
}

impl TryFrom<&MsgDelegate> for AminoMsgDelegate {
    type Error = TxError;
    fn try_from(m: &MsgDelegate) -> Result<Self, TxError> {
        Ok(AminoMsgDelegate {
            delegator_address: m.delegator_address.clone(),
            validator_address: m.validator_address.clone(),
            amount: required_coin(&m.amount, "MsgDelegate")?,
        })
    }
}

impl TryFrom<AminoMsgDelegate> for MsgDelegate {
    type Error = TxError;
    fn try_from(a: AminoMsgDelegate) -> Result<Self, TxError> {
        Ok(MsgDelegate {
            delegator_address: a.delegator_address,
            validator_address: a.validator_address,
            amount: Some((&a.amount).into()),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AminoMsgUndelegate {
    delegator_address: String,
    validator_address: String,
    amount: Coin,
}

impl TryFrom<&MsgUndelegate> for AminoMsgUndelegate {
    type Error = TxError;
    fn try_from(m: &MsgUndelegate) -> Result<Self, TxError> {
        Ok(AminoMsgUndelegate {
            delegator_address: m.delegator_address.clone(),
            validator_address: m.validator_address.clone(),
            amount: required_coin(&m.amount, "MsgUndelegate")?,
        })
    }
}

impl TryFrom<AminoMsgUndelegate> for MsgUndelegate {
    type Error = TxError;
    fn try_from(a: AminoMsgUndelegate) -> Result<Self, TxError> {
        Ok(MsgUndelegate {
            delegator_address: a.delegator_address,
            validator_address: a.validator_address,
            amount: Some((&a.amount).into()),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AminoMsgBeginRedelegate {
    delegator_address: String,
    validator_src_address: String,
    validator_dst_address: String,
    amount: Coin,
}

impl TryFrom<&MsgBeginRedelegate> for AminoMsgBeginRedelegate {
    type Error = TxError;
    fn try_from(m: &MsgBeginRedelegate) -> Result<Self, TxError> {
        Ok(AminoMsgBeginRedelegate {
            delegator_address: m.delegator_address.clone(),
            validator_src_address: m.validator_src_address.clone(),
            validator_dst_address: m.validator_dst_address.clone(),
            amount: required_coin(&m.amount, "MsgBeginRedelegate")?,
        })
    }
}

impl TryFrom<AminoMsgBeginRedelegate> for MsgBeginRedelegate {
    type Error = TxError;
    fn try_from(a: AminoMsgBeginRedelegate) -> Result<Self, TxError> {
        Ok(MsgBeginRedelegate {
            delegator_address: a.delegator_address,
            validator_src_address: a.validator_src_address,
            validator_dst_address: a.validator_dst_address,
            amount: Some((&a.amount).into()),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AminoMsgWithdrawDelegatorReward {
    delegator_address: String,
    validator_address: String,
}

impl TryFrom<&MsgWithdrawDelegatorReward> for AminoMsgWithdrawDelegatorReward {
    type Error = TxError;
    fn try_from(m: &MsgWithdrawDelegatorReward) -> Result<Self, TxError> {
        Ok(AminoMsgWithdrawDelegatorReward {
            delegator_address: m.delegator_address.clone(),
            validator_address: m.validator_address.clone(),
        })
    }
}

impl TryFrom<AminoMsgWithdrawDelegatorReward> for MsgWithdrawDelegatorReward {
    type Error = TxError;
    fn try_from(a: AminoMsgWithdrawDelegatorReward) -> Result<Self, TxError> {
        Ok(MsgWithdrawDelegatorReward {
            delegator_address: a.delegator_address,
            validator_address: a.validator_address,
        })
    }
}
