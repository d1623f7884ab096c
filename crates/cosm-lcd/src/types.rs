//! LCD data types: configuration, broadcast modes and REST payloads.

use serde::{Deserialize, Deserializer, Serialize};

use cosm_signing::amino::StdTx;

/// When broadcast returns relative to transaction processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastMode {
    /// Return after the transaction is included in a block.
    #[default]
    Block,
    /// Return after the mempool check.
    Sync,
    /// Return immediately.
    Async,
}

impl BroadcastMode {
    /// Mode name used by the protobuf `/cosmos/tx/v1beta1/txs` endpoint.
    pub fn as_proto_mode(&self) -> &'static str {
        match self {
            Self::Block => "BROADCAST_MODE_BLOCK",
            Self::Sync => "BROADCAST_MODE_SYNC",
            Self::Async => "BROADCAST_MODE_ASYNC",
        }
    }
}

/// Configuration for an [`LcdClient`](crate::LcdClient).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LcdConfig {
    /// Base URL of the REST server (e.g. `http://localhost:1317`).
    pub base_url: String,
    /// Broadcast mode for both endpoints.
    pub broadcast_mode: BroadcastMode,
    /// Request timeout in milliseconds; `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1317".to_string(),
            broadcast_mode: BroadcastMode::Block,
            timeout_ms: Some(30_000),
        }
    }
}

fn u64_from_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Ok(0);
    }
    s.parse().map_err(serde::de::Error::custom)
}

fn opt_u64_from_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    let s = Option::<String>::deserialize(deserializer)?;
    match s.as_deref() {
        None | Some("") | Some("0") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

// -----------------------------------------------------------------------
// GET /auth/accounts/{address}
// -----------------------------------------------------------------------

/// Account state as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BaseAccount {
    /// Empty when the account does not exist on chain.
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "u64_from_string")]
    pub account_number: u64,
    #[serde(default, deserialize_with = "u64_from_string")]
    pub sequence: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountResult {
    pub value: BaseAccount,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountResponse {
    pub result: AccountResult,
}

// -----------------------------------------------------------------------
// GET /node_info
// -----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct NodeInfo {
    pub network: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NodeInfoResponse {
    pub node_info: NodeInfo,
}

// -----------------------------------------------------------------------
// Broadcast
// -----------------------------------------------------------------------

/// Body of `POST /txs`.
#[derive(Debug, Serialize)]
pub(crate) struct PostTxsRequest<'a> {
    pub tx: &'a StdTx,
    pub mode: BroadcastMode,
}

/// Body of `POST /cosmos/tx/v1beta1/txs`.
#[derive(Debug, Serialize)]
pub(crate) struct BroadcastTxRequest {
    pub tx_bytes: String,
    pub mode: &'static str,
}

/// Outcome of a broadcast as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TxResponse {
    pub txhash: String,
    #[serde(default, deserialize_with = "opt_u64_from_string")]
    pub height: Option<u64>,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub raw_log: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BroadcastTxResponse {
    pub tx_response: TxResponse,
}
