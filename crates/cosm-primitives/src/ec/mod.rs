/// Elliptic curve cryptography on secp256k1.
///
/// Provides private keys, compressed public keys, and the fixed 64-byte
/// `r || s` ECDSA signatures used by Cosmos SDK transactions.

pub mod private_key;
pub mod public_key;
pub mod signature;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signature::Signature;
