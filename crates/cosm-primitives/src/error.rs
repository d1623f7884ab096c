/// Unified error type for all primitives operations.
///
/// Covers errors from EC operations, mnemonic handling, HD derivation and
/// address encoding.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("invalid HD path: {0}")]
    InvalidHdPath(String),

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}

impl From<k256::ecdsa::Error> for PrimitivesError {
    fn from(e: k256::ecdsa::Error) -> Self {
        PrimitivesError::InvalidPublicKey(e.to_string())
    }
}

impl From<bech32::Error> for PrimitivesError {
    fn from(e: bech32::Error) -> Self {
        PrimitivesError::InvalidAddress(e.to_string())
    }
}
