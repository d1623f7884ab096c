//! ECDSA signature in the fixed 64-byte `r || s` encoding.
//!
//! Cosmos SDK nodes expect secp256k1 signatures as the 32-byte big-endian R
//! followed by the 32-byte big-endian S, with S in the lower half of the
//! curve order. DER is never used on the wire.

use k256::ecdsa;
use k256::ecdsa::signature::hazmat::PrehashVerifier;

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// Length of a fixed-encoding signature.
pub const SIGNATURE_LEN: usize = 64;

/// A secp256k1 ECDSA signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    inner: ecdsa::Signature,
}

impl Signature {
    /// Parse a fixed 64-byte `r || s` signature.
    ///
    /// # Returns
    /// `Ok(Signature)`, or `PrimitivesError::InvalidSignature` if the length
    /// is wrong or either component is zero or not below the curve order.
    pub fn from_fixed(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(PrimitivesError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            )));
        }
        let inner = ecdsa::Signature::from_slice(bytes)
            .map_err(|_| PrimitivesError::InvalidSignature("scalar out of range".to_string()))?;
        Ok(Signature { inner })
    }

    /// Serialize as the fixed 64-byte `r || s` encoding.
    pub fn to_fixed(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Whether S lies in the lower half of the curve order.
    pub fn is_low_s(&self) -> bool {
        self.inner.normalize_s().is_none()
    }

    /// Sign a 32-byte digest with a deterministic RFC 6979 nonce.
    ///
    /// The result is always low-S normalized.
    pub fn sign_prehash(hash: &[u8; 32], priv_key: &PrivateKey) -> Result<Self, PrimitivesError> {
        let (sig, _) = priv_key
            .signing_key()
            .sign_prehash_recoverable(hash)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;
        let inner = sig.normalize_s().unwrap_or(sig);
        Ok(Signature { inner })
    }

    /// Verify against a 32-byte digest. High-S signatures never verify.
    pub fn verify_prehash(&self, hash: &[u8; 32], pub_key: &PublicKey) -> bool {
        self.is_low_s()
            && pub_key
                .verifying_key()
                .verify_prehash(hash, &self.inner)
                .is_ok()
    }
}
