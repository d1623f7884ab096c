use crate::provider::BroadcastFailure;

/// Error types for the signing client and its providers.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The node rejected or failed to accept the transaction.
    #[error("broadcast failed ({}): {}", .0.code, .0.description)]
    Broadcast(BroadcastFailure),

    /// An account or chain query could not be answered.
    #[error("query failed: {0}")]
    Query(String),

    /// The provider could not reach the node.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Invalid client configuration (gas price, fee table).
    #[error("configuration error: {0}")]
    Config(String),

    #[error("proto error: {0}")]
    Proto(#[from] cosm_proto::ProtoError),

    #[error("transaction error: {0}")]
    Tx(#[from] cosm_signing::TxError),

    #[error("wallet error: {0}")]
    Wallet(#[from] cosm_wallet::WalletError),
}

impl From<BroadcastFailure> for ClientError {
    fn from(failure: BroadcastFailure) -> Self {
        ClientError::Broadcast(failure)
    }
}
