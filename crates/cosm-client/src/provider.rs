//! Collaborators the signing client depends on.
//!
//! Account lookup, chain id lookup and broadcast are network calls the
//! client never performs itself. Any transport can implement these traits;
//! `cosm-lcd` provides a REST implementation.

use std::fmt;
use std::future::Future;

use cosm_signing::amino::StdTx;

use crate::error::ClientError;

/// Account number and next sequence of an on-chain account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceResponse {
    pub account_number: u64,
    pub sequence: u64,
}

/// A signed transaction, in the encoding its broadcast endpoint expects.
#[derive(Clone, Debug, PartialEq)]
pub enum BroadcastPayload {
    /// Serialized `TxRaw`, submitted unchanged.
    Protobuf(Vec<u8>),
    /// Legacy amino JSON transaction.
    Amino(StdTx),
}

/// What the node reported for an accepted transaction.
///
/// The client passes this through without interpreting it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BroadcastTxResult {
    /// Hex transaction hash.
    pub transaction_hash: String,
    /// Block height, when the node waited for inclusion.
    pub height: Option<u64>,
    /// Raw log output of the node.
    pub raw_log: Option<String>,
}

/// A transaction the node refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BroadcastFailure {
    /// Machine-readable error code from the node.
    pub code: u32,
    /// Human-readable description of the failure.
    pub description: String,
}

impl fmt::Display for BroadcastFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl std::error::Error for BroadcastFailure {}

/// Looks up account numbers and sequences.
pub trait AccountQuery: Send + Sync {
    /// # Returns
    /// The account's number and next sequence, or `ClientError::Query` if
    /// the account does not exist.
    fn get_sequence(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<SequenceResponse, ClientError>> + Send;
}

/// Reports the network identifier embedded in sign docs.
pub trait ChainIdSource: Send + Sync {
    fn get_chain_id(&self) -> impl Future<Output = Result<String, ClientError>> + Send;
}

/// Submits signed transactions.
pub trait Broadcaster: Send + Sync {
    /// Broadcast a transaction.
    ///
    /// # Returns
    /// `Ok(BroadcastTxResult)` on acceptance, or `ClientError::Broadcast`
    /// carrying the node's failure.
    fn broadcast(
        &self,
        payload: BroadcastPayload,
    ) -> impl Future<Output = Result<BroadcastTxResult, ClientError>> + Send;
}
