//! Amino converters for the CosmWasm `wasm.v1` messages.
//!
//! Contract messages travel as JSON bytes in protobuf and as embedded JSON
//! objects in amino. Wasm bytecode is base64 in amino.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cosm_proto::cosmwasm::wasm::v1::{
    AccessConfig, AccessType, MsgClearAdmin, MsgExecuteContract, MsgInstantiateContract,
    MsgMigrateContract, MsgStoreCode, MsgUpdateAdmin,
};
use cosm_proto::TypedMessage;

use super::converters::{coins_from_amino, coins_to_amino, AminoConverter, AminoTypes};
use super::types::Coin;
use crate::TxError;

/// Add converters for every `cosmwasm.wasm.v1` message to `types`.
pub fn register(types: &mut AminoTypes) {
    types.add(
        MsgStoreCode::TYPE_URL,
        AminoConverter::new::<MsgStoreCode, AminoMsgStoreCode>("wasm/MsgStoreCode"),
    );
    types.add(
        MsgInstantiateContract::TYPE_URL,
        AminoConverter::new::<MsgInstantiateContract, AminoMsgInstantiateContract>(
            "wasm/MsgInstantiateContract",
        ),
    );
    types.add(
        MsgExecuteContract::TYPE_URL,
        AminoConverter::new::<MsgExecuteContract, AminoMsgExecuteContract>(
            "wasm/MsgExecuteContract",
        ),
    );
    types.add(
        MsgMigrateContract::TYPE_URL,
        AminoConverter::new::<MsgMigrateContract, AminoMsgMigrateContract>(
            "wasm/MsgMigrateContract",
        ),
    );
    types.add(
        MsgUpdateAdmin::TYPE_URL,
        AminoConverter::new::<MsgUpdateAdmin, AminoMsgUpdateAdmin>("wasm/MsgUpdateAdmin"),
    );
    types.add(
        MsgClearAdmin::TYPE_URL,
        AminoConverter::new::<MsgClearAdmin, AminoMsgClearAdmin>("wasm/MsgClearAdmin"),
    );
}

fn msg_to_json(bytes: &[u8]) -> Result<Value, TxError> {
    serde_json::from_slice(bytes)
        .map_err(|e| TxError::AminoJson(format!("contract message is not JSON: {}", e)))
}

fn parse_code_id(code_id: &str) -> Result<u64, TxError> {
    code_id
        .parse()
        .map_err(|_| TxError::Validation(format!("invalid code id {:?}", code_id)))
}

// -----------------------------------------------------------------------
// Store code
// -----------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
struct AminoAccessConfig {
    permission: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    addresses: Vec<String>,
}

impl TryFrom<&AccessConfig> for AminoAccessConfig {
    type Error = TxError;
    fn try_from(c: &AccessConfig) -> Result<Self, TxError> {
        let permission = match AccessType::try_from(c.permission) {
            Ok(AccessType::Nobody) => "Nobody",
            Ok(AccessType::Everybody) => "Everybody",
            Ok(AccessType::AnyOfAddresses) => "AnyOfAddresses",
            _ => {
                return Err(TxError::Validation(format!(
                    "unsupported access type {}",
                    c.permission
                )))
            }
        };
        Ok(AminoAccessConfig {
            permission: permission.to_string(),
            addresses: c.addresses.clone(),
        })
    }
}

impl TryFrom<AminoAccessConfig> for AccessConfig {
    type Error = TxError;
    fn try_from(a: AminoAccessConfig) -> Result<Self, TxError> {
        let permission = match a.permission.as_str() {
            "Nobody" => AccessType::Nobody,
            "Everybody" => AccessType::Everybody,
            "AnyOfAddresses" => AccessType::AnyOfAddresses,
            other => {
                return Err(TxError::Validation(format!("unsupported access type {:?}", other)))
            }
        };
        Ok(AccessConfig {
            permission: permission as i32,
            addresses: a.addresses,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AminoMsgStoreCode {
    sender: String,
    wasm_byte_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instantiate_permission: Option<AminoAccessConfig>,
}

impl TryFrom<&MsgStoreCode> for AminoMsgStoreCode {
    type Error = TxError;
    fn try_from(m: &MsgStoreCode) -> Result<Self, TxError> {
        Ok(AminoMsgStoreCode {
            sender: m.sender.clone(),
            wasm_byte_code: BASE64.encode(&m.wasm_byte_code),
            instantiate_permission: m
                .instantiate_permission
                .as_ref()
                .map(AminoAccessConfig::try_from)
                .transpose()?,
        })
    }
}

impl TryFrom<AminoMsgStoreCode> for MsgStoreCode {
    type Error = TxError;
    fn try_from(a: AminoMsgStoreCode) -> Result<Self, TxError> {
        Ok(MsgStoreCode {
            sender: a.sender,
            wasm_byte_code: BASE64
                .decode(&a.wasm_byte_code)
                .map_err(|e| TxError::Validation(format!("invalid base64 bytecode: {}", e)))?,
            instantiate_permission: a
                .instantiate_permission
                .map(AccessConfig::try_from)
                .transpose()?,
        })
    }
}

// -----------------------------------------------------------------------
// Contract lifecycle
// -----------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
struct AminoMsgInstantiateContract {
    sender: String,
    code_id: String,
    label: String,
    msg: Value,
    funds: Vec<Coin>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    admin: String,
}

impl TryFrom<&MsgInstantiateContract> for AminoMsgInstantiateContract {
    type Error = TxError;
    fn try_from(m: &MsgInstantiateContract) -> Result<Self, TxError> {
        Ok(AminoMsgInstantiateContract {
            sender: m.sender.clone(),
            code_id: m.code_id.to_string(),
            label: m.label.clone(),
            msg: msg_to_json(&m.msg)?,
            funds: coins_to_amino(&m.funds),
            admin: m.admin.clone(),
        })
    }
}

impl TryFrom<AminoMsgInstantiateContract> for MsgInstantiateContract {
    type Error = TxError;
    fn try_from(a: AminoMsgInstantiateContract) -> Result<Self, TxError> {
        Ok(MsgInstantiateContract {
            sender: a.sender,
            admin: a.admin,
            code_id: parse_code_id(&a.code_id)?,
            label: a.label,
            msg: serde_json::to_vec(&a.msg)?,
            funds: coins_from_amino(&a.funds),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AminoMsgExecuteContract {
    sender: String,
    contract: String,
    msg: Value,
    funds: Vec<Coin>,
}

impl TryFrom<&MsgExecuteContract> for AminoMsgExecuteContract {
    type Error = TxError;
    fn try_from(m: &MsgExecuteContract) -> Result<Self, TxError> {
        Ok(AminoMsgExecuteContract {
            sender: m.sender.clone(),
            contract: m.contract.clone(),
            msg: msg_to_json(&m.msg)?,
            funds: coins_to_amino(&m.funds),
        })
    }
}

impl TryFrom<AminoMsgExecuteContract> for MsgExecuteContract {
    type Error = TxError;
    fn try_from(a: AminoMsgExecuteContract) -> Result<Self, TxError> {
        Ok(MsgExecuteContract {
            sender: a.sender,
            contract: a.contract,
            msg: serde_json::to_vec(&a.msg)?,
            funds: coins_from_amino(&a.funds),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AminoMsgMigrateContract {
    sender: String,
    contract: String,
    code_id: String,
    msg: Value,
}

impl TryFrom<&MsgMigrateContract> for AminoMsgMigrateContract {
    type Error = TxError;
    fn try_from(m: &MsgMigrateContract) -> Result<Self, TxError> {
        Ok(AminoMsgMigrateContract {
            sender: m.sender.clone(),
            contract: m.contract.clone(),
            code_id: m.code_id.to_string(),
            msg: msg_to_json(&m.msg)?,
        })
    }
}

impl TryFrom<AminoMsgMigrateContract> for MsgMigrateContract {
    type Error = TxError;
    fn try_from(a: AminoMsgMigrateContract) -> Result<Self, TxError> {
        Ok(MsgMigrateContract {
            sender: a.sender,
            contract: a.contract,
            code_id: parse_code_id(&a.code_id)?,
            msg: serde_json::to_vec(&a.msg)?,
        })
    }
}

// -----------------------------------------------------------------------
// Admin
// -----------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
struct AminoMsgUpdateAdmin {
    sender: String,
    new_admin: String,
    contract: String,
}

impl TryFrom<&MsgUpdateAdmin> for AminoMsgUpdateAdmin {
    type Error = TxError;
    fn try_from(m: &MsgUpdateAdmin) -> Result<Self, TxError> {
        Ok(AminoMsgUpdateAdmin {
            sender: m.sender.clone(),
            new_admin: m.new_admin.clone(),
            contract: m.contract.clone(),
        })
    }
}

impl TryFrom<AminoMsgUpdateAdmin> for MsgUpdateAdmin {
    type Error = TxError;
    fn try_from(a: AminoMsgUpdateAdmin) -> Result<Self, TxError> {
        Ok(MsgUpdateAdmin {
            sender: a.sender,
            new_admin: a.new_admin,
            contract: a.contract,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AminoMsgClearAdmin {
    sender: String,
    contract: String,
}

impl TryFrom<&MsgClearAdmin> for AminoMsgClearAdmin {
    type Error = TxError;
    fn try_from(m: &MsgClearAdmin) -> Result<Self, TxError> {
        Ok(AminoMsgClearAdmin {
            sender: m.sender.clone(),
            contract: m.contract.clone(),
        })
    }
}

impl TryFrom<AminoMsgClearAdmin> for MsgClearAdmin {
    type Error = TxError;
    fn try_from(a: AminoMsgClearAdmin) -> Result<Self, TxError> {
        Ok(MsgClearAdmin {
            sender: a.sender,
            contract: a.contract,
        })
    }
}
