//! Bech32 account addresses.

use bech32::{FromBase32, ToBase32, Variant};

use crate::PrimitivesError;

/// Encode raw address bytes with a human readable prefix.
///
/// # Arguments
/// * `prefix` - The bech32 prefix, e.g. `cosmos`.
/// * `data` - Raw address bytes (20 bytes for secp256k1 accounts).
///
/// # Returns
/// The bech32 string, or an error if the prefix is not a valid HRP.
pub fn to_bech32(prefix: &str, data: &[u8]) -> Result<String, PrimitivesError> {
    Ok(bech32::encode(prefix, data.to_base32(), Variant::Bech32)?)
}

/// Decode a bech32 address into its prefix and raw bytes.
///
/// Bech32m strings are rejected.
pub fn from_bech32(address: &str) -> Result<(String, Vec<u8>), PrimitivesError> {
    let (hrp, data, variant) = bech32::decode(address)?;
    if variant != Variant::Bech32 {
        return Err(PrimitivesError::InvalidAddress(
            "expected bech32, got bech32m".to_string(),
        ));
    }
    let bytes = Vec::<u8>::from_base32(&data)?;
    Ok((hrp, bytes))
}

/// Decode an address and check that it carries the expected prefix.
pub fn decode_with_prefix(address: &str, prefix: &str) -> Result<Vec<u8>, PrimitivesError> {
    let (hrp, bytes) = from_bech32(address)?;
    if hrp != prefix {
        return Err(PrimitivesError::InvalidAddress(format!(
            "expected prefix {:?}, got {:?}",
            prefix, hrp
        )));
    }
    Ok(bytes)
}
