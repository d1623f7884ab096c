//! Hash function primitives.
//!
//! Provides SHA-256, RIPEMD-160, the combined RIPEMD-160(SHA-256) digest used
//! to derive account addresses from secp256k1 public keys, and the HMAC
//! used by HD key derivation.

use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

/// SHA-256 of `data`; the digest signed for both direct and amino sign docs.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// RIPEMD-160 of `data`.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// RIPEMD-160(SHA-256(data)).
///
/// Applied to a compressed secp256k1 public key this yields the raw 20-byte
/// account address.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// HMAC-SHA512 tag of `data` under `key`.
///
/// # Arguments
/// * `key` - Chain code or the BIP-32 seed key.
/// * `data` - Serialized parent key and child index, or the seed.
pub fn sha512_hmac(key: &[u8], data: &[u8]) -> [u8; 64] {
    let mut mac = <Hmac<Sha512> as Mac>::new_from_slice(key)
        .expect("HMAC accepts any key length");
    mac.update(data);
    let mut tag = [0u8; 64];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_ripemd160_empty() {
        assert_eq!(
            hex::encode(ripemd160(b"")),
            "9c1185a5c5e9fc54612808977ee8f548b2258d31"
        );
    }

    /// RFC 4231 test case 2.
    #[test]
    fn test_hmac_rfc4231_case2() {
        assert_eq!(
            hex::encode(sha512_hmac(b"Jefe", b"what do ya want for nothing?")),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_hash160_of_pubkey() {
        let pubkey = hex::decode("034f04181eeba35391b858633a765c4a0c189697b40d216354d50890d350c70290").unwrap();
        assert_eq!(
            hex::encode(hash160(&pubkey)),
            "0d82b1e7c96dbfa42462fe612932e6bff111d51b"
        );
    }
}
