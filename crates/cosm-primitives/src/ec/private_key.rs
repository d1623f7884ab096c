//! secp256k1 private key.
//!
//! Wraps a k256 signing key with hex import, BIP-32 scalar tweaking and
//! signing over SHA-256 of arbitrary sign bytes.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};
use rand::rngs::OsRng;

use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::hash::sha256;
use crate::PrimitivesError;

const KEY_LEN: usize = 32;

/// A secp256k1 signing key. The scalar is wiped when the key is dropped.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a random key from the OS RNG.
    pub fn new() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Parse a 32-byte big-endian scalar.
    ///
    /// # Returns
    /// The key, or an error if the length is wrong or the scalar is zero or
    /// not below the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != KEY_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: KEY_LEN,
                got: bytes.len(),
            });
        }
        SigningKey::from_slice(bytes)
            .map(|inner| PrivateKey { inner })
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))
    }

    /// Parse a 64-character hex scalar.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        Self::from_bytes(&hex::decode(hex_str)?)
    }

    pub fn to_bytes(&self) -> [u8; KEY_LEN] {
        self.inner.to_bytes().into()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_k256_verifying_key(self.inner.verifying_key())
    }

    /// Sign `message` (the raw sign bytes) over its SHA-256 digest.
    ///
    /// Nonces are deterministic (RFC 6979) and the result is low-S, which is
    /// what nodes verify for both direct and amino sign docs.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, PrimitivesError> {
        Signature::sign_prehash(&sha256(message), self)
    }

    /// `(self + tweak) mod n`, the BIP-32 private child step.
    ///
    /// # Arguments
    /// * `tweak` - Big-endian left half of the child HMAC.
    ///
    /// # Returns
    /// `PrimitivesError::KeyDerivation` if `tweak >= n` or the sum is zero.
    pub fn tweak_add(&self, tweak: &[u8; 32]) -> Result<PrivateKey, PrimitivesError> {
        let tweak = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(*tweak)))
            .ok_or_else(|| {
                PrimitivesError::KeyDerivation("tweak is not below the curve order".to_string())
            })?;
        let sum = *self.inner.as_nonzero_scalar().as_ref() + tweak;
        PrivateKey::from_bytes(&sum.to_repr())
            .map_err(|_| PrimitivesError::KeyDerivation("derived key is zero".to_string()))
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

impl Default for PrivateKey {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for PrivateKey {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Private key of the first account of the well-known test faucet mnemonic.
    const FAUCET_PRIV_HEX: &str = "e16ee698b4a4ee03566d7dd9bb6f0e8a2dda802527ba56205f5767c0049fa0b9";

    #[test]
    fn test_priv_key_roundtrip() {
        let pk = PrivateKey::new();
        let deserialized = PrivateKey::from_bytes(&pk.to_bytes()).unwrap();
        assert_eq!(pk, deserialized);

        let from_hex = PrivateKey::from_hex(&pk.to_hex()).unwrap();
        assert_eq!(pk, from_hex);
    }

    #[test]
    fn test_priv_key_pub_key() {
        let pk = PrivateKey::from_hex(FAUCET_PRIV_HEX).unwrap();
        assert_eq!(
            pk.pub_key().to_hex(),
            "034f04181eeba35391b858633a765c4a0c189697b40d216354d50890d350c70290"
        );
    }

    #[test]
    fn test_priv_key_invalid_inputs() {
        assert!(PrivateKey::from_hex("").is_err());
        assert!(PrivateKey::from_hex("zz").is_err());
        assert!(matches!(
            PrivateKey::from_bytes(&[1u8; 31]),
            Err(PrimitivesError::InvalidKeyLength { expected: 32, got: 31 })
        ));
        // zero scalar
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_sign_and_verify() {
        let pk = PrivateKey::from_hex(FAUCET_PRIV_HEX).unwrap();
        let sig = pk.sign(b"sign bytes").unwrap();
        assert!(pk.pub_key().verify(b"sign bytes", &sig));
        assert!(!pk.pub_key().verify(b"other bytes", &sig));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let pk = PrivateKey::from_hex(FAUCET_PRIV_HEX).unwrap();
        let a = pk.sign(b"deterministic").unwrap();
        let b = pk.sign(b"deterministic").unwrap();
        assert_eq!(a.to_fixed(), b.to_fixed());
    }

    #[test]
    fn test_tweak_add_zero_is_identity() {
        let pk = PrivateKey::from_hex(FAUCET_PRIV_HEX).unwrap();
        let tweaked = pk.tweak_add(&[0u8; 32]).unwrap();
        assert_eq!(pk, tweaked);
    }

    #[test]
    fn test_tweak_add_rejects_out_of_range() {
        let pk = PrivateKey::from_hex(FAUCET_PRIV_HEX).unwrap();
        assert!(matches!(
            pk.tweak_add(&[0xff; 32]),
            Err(PrimitivesError::KeyDerivation(_))
        ));
    }
}
