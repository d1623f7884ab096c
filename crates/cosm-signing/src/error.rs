/// Error types for sign-doc construction and transaction assembly.
#[derive(Debug, thiserror::Error)]
pub enum TxError {
    /// Structurally invalid inputs (missing chain id, empty signer set,
    /// signature count not matching signer infos).
    #[error("validation error: {0}")]
    Validation(String),

    /// Amino JSON could not be built or canonicalized.
    #[error("amino JSON error: {0}")]
    AminoJson(String),

    /// No amino converter is known for the message.
    #[error("unsupported amino type: {0}")]
    UnsupportedAminoType(String),

    /// An underlying codec or registry error (forwarded from `cosm-proto`).
    #[error("proto error: {0}")]
    Proto(#[from] cosm_proto::ProtoError),

    /// An underlying primitives error (forwarded from `cosm-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] cosm_primitives::PrimitivesError),
}

impl From<cosm_proto::DecodeError> for TxError {
    fn from(e: cosm_proto::DecodeError) -> Self {
        TxError::Proto(cosm_proto::ProtoError::Decode(e))
    }
}

impl From<serde_json::Error> for TxError {
    fn from(e: serde_json::Error) -> Self {
        TxError::AminoJson(e.to_string())
    }
}
