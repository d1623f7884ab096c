/// Cosmos SDK client - sign docs and transaction assembly.
///
/// Builds the bytes a signer commits to in SIGN_MODE_DIRECT (protobuf
/// `SignDoc`) and SIGN_MODE_LEGACY_AMINO_JSON (canonical `StdSignDoc`
/// JSON), and assembles signed `TxRaw` transactions for broadcast.

pub mod amino;
pub mod assembler;
pub mod direct;

mod error;
pub use assembler::{make_tx_raw, SignedTransaction};
pub use error::TxError;
