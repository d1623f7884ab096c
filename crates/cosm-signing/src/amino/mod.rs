//! SIGN_MODE_LEGACY_AMINO_JSON support.

pub mod converters;
pub mod json;
pub mod sign_doc;
pub mod types;
pub mod wasm;

pub use converters::{AminoConverter, AminoTypes};
pub use json::sorted_json;
pub use sign_doc::{
    decode_signature, encode_secp256k1_pubkey, encode_secp256k1_signature, make_sign_doc,
    make_std_tx, serialize_sign_doc,
};
pub use types::{AminoMsg, AminoPubKey, Coin, StdFee, StdSignDoc, StdSignature, StdTx, PUBKEY_SECP256K1_TYPE};
