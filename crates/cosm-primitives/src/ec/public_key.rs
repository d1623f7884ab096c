//! secp256k1 public key.
//!
//! SEC1 parsing, compressed serialization, address derivation and
//! signature verification.

use k256::ecdsa::VerifyingKey;
use std::fmt;

use crate::address;
use crate::ec::signature::Signature;
use crate::hash::{hash160, sha256};
use crate::PrimitivesError;

/// Length of a compressed SEC1 key: parity prefix plus x-coordinate.
pub const COMPRESSED_LEN: usize = 33;

/// A secp256k1 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse a compressed (33-byte) or uncompressed (65-byte) SEC1 point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "pubkey bytes are empty".to_string(),
            ));
        }
        Ok(PublicKey {
            inner: VerifyingKey::from_sec1_bytes(bytes)?,
        })
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        Self::from_bytes(&hex::decode(hex_str)?)
    }

    /// Compressed SEC1 encoding, as embedded in `cosmos.crypto.secp256k1.PubKey`.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(self.inner.to_encoded_point(true).as_bytes());
        out
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// HASH160 of the compressed key: the 20 address bytes.
    pub fn raw_address(&self) -> [u8; 20] {
        hash160(&self.to_compressed())
    }

    /// Bech32 account address under `prefix` (e.g. `cosmos`).
    pub fn to_address(&self, prefix: &str) -> Result<String, PrimitivesError> {
        address::to_bech32(prefix, &self.raw_address())
    }

    /// Verify `sig` over SHA-256 of `message`, the counterpart of
    /// [`PrivateKey::sign`](crate::ec::PrivateKey::sign).
    pub fn verify(&self, message: &[u8], sig: &Signature) -> bool {
        sig.verify_prehash(&sha256(message), self)
    }

    pub(crate) fn from_k256_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
