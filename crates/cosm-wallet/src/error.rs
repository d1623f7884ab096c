use std::time::Duration;

/// Error types for signer operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The requested signer address is not one of this signer's accounts.
    #[error("address {0} is not controlled by this signer")]
    AddressNotControlled(String),

    /// The signing agent cannot be reached.
    #[error("signer unavailable: {0}")]
    Unavailable(String),

    /// The user or agent declined the request.
    #[error("signing request rejected: {0}")]
    Rejected(String),

    #[error("signing request cancelled")]
    Cancelled,

    #[error("signing request timed out after {0:?}")]
    TimedOut(Duration),

    /// The signer returned a document other than the one it was asked to sign.
    #[error("signed document does not match the requested document")]
    SignedDocMismatch,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("primitives error: {0}")]
    Primitives(#[from] cosm_primitives::PrimitivesError),

    #[error("transaction error: {0}")]
    Tx(#[from] cosm_signing::TxError),
}
