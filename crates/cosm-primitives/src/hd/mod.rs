//! BIP-32 hierarchical deterministic key derivation for secp256k1.
//!
//! Only private derivation is implemented; signers always hold the seed.

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroize;

use crate::ec::PrivateKey;
use crate::hash::sha512_hmac;
use crate::PrimitivesError;

/// Offset at which child indices become hardened.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Coin type registered for Cosmos Hub (SLIP-44).
pub const COSMOS_COIN_TYPE: u32 = 118;

/// HMAC key for master key generation.
const MASTER_SEED_KEY: &[u8] = b"Bitcoin seed";

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// One step of an HD path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildIndex {
    Normal(u32),
    Hardened(u32),
}

impl ChildIndex {
    /// The raw 32-bit index including the hardened bit.
    pub fn to_u32(self) -> u32 {
        match self {
            ChildIndex::Normal(i) => i,
            ChildIndex::Hardened(i) => i | HARDENED_OFFSET,
        }
    }

    pub fn is_hardened(self) -> bool {
        matches!(self, ChildIndex::Hardened(_))
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildIndex::Normal(i) => write!(f, "{}", i),
            ChildIndex::Hardened(i) => write!(f, "{}'", i),
        }
    }
}

/// A derivation path such as `m/44'/118'/0'/0/0`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct HdPath(Vec<ChildIndex>);

impl HdPath {
    pub fn new(indices: Vec<ChildIndex>) -> Self {
        HdPath(indices)
    }

    pub fn indices(&self) -> &[ChildIndex] {
        &self.0
    }
}

/// The standard Cosmos Hub path `m/44'/118'/0'/0/{account}`.
pub fn cosmos_hub_path(account: u32) -> HdPath {
    HdPath(vec![
        ChildIndex::Hardened(44),
        ChildIndex::Hardened(COSMOS_COIN_TYPE),
        ChildIndex::Hardened(0),
        ChildIndex::Normal(0),
        ChildIndex::Normal(account),
    ])
}

impl FromStr for HdPath {
    type Err = PrimitivesError;

    /// Parse `m/...` notation. Hardened steps end in `'` or `h`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('/');
        if parts.next() != Some("m") {
            return Err(PrimitivesError::InvalidHdPath(format!(
                "path must start with \"m\": {}",
                s
            )));
        }
        let mut indices = Vec::new();
        for part in parts {
            let (digits, hardened) = match part.strip_suffix('\'').or_else(|| part.strip_suffix('h')) {
                Some(d) => (d, true),
                None => (part, false),
            };
            let value: u32 = digits.parse().map_err(|_| {
                PrimitivesError::InvalidHdPath(format!("invalid path component: {:?}", part))
            })?;
            if value >= HARDENED_OFFSET {
                return Err(PrimitivesError::InvalidHdPath(format!(
                    "index out of range: {}",
                    value
                )));
            }
            indices.push(if hardened {
                ChildIndex::Hardened(value)
            } else {
                ChildIndex::Normal(value)
            });
        }
        Ok(HdPath(indices))
    }
}

impl fmt::Display for HdPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for idx in &self.0 {
            write!(f, "/{}", idx)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------
// Extended keys
// -----------------------------------------------------------------------

/// A private key paired with its BIP-32 chain code.
#[derive(Clone, Debug)]
pub struct ExtendedPrivateKey {
    key: PrivateKey,
    chain_code: [u8; 32],
    depth: u8,
}

impl ExtendedPrivateKey {
    /// Derive the master key from a BIP-39 seed.
    ///
    /// # Arguments
    /// * `seed` - Seed bytes, normally the 64-byte output of
    ///   [`Mnemonic::to_seed`](crate::mnemonic::Mnemonic::to_seed).
    ///
    /// # Returns
    /// The master extended key, or an error if the seed produces an invalid key.
    pub fn from_seed(seed: &[u8]) -> Result<Self, PrimitivesError> {
        let mut i = sha512_hmac(MASTER_SEED_KEY, seed);
        let result = Self::from_hmac_output(&i, 0);
        i.zeroize();
        result
    }

    /// Derive a single child key.
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self, PrimitivesError> {
        let mut data = Vec::with_capacity(37);
        if index.is_hardened() {
            data.push(0u8);
            data.extend_from_slice(&self.key.to_bytes());
        } else {
            data.extend_from_slice(&self.key.pub_key().to_compressed());
        }
        data.extend_from_slice(&index.to_u32().to_be_bytes());

        let mut i = sha512_hmac(&self.chain_code, &data);
        data.zeroize();

        let mut tweak = [0u8; 32];
        tweak.copy_from_slice(&i[..32]);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&i[32..]);
        i.zeroize();

        let key = self.key.tweak_add(&tweak);
        tweak.zeroize();

        Ok(ExtendedPrivateKey {
            key: key?,
            chain_code,
            depth: self.depth.saturating_add(1),
        })
    }

    /// Derive along a full path starting from this key.
    pub fn derive_path(&self, path: &HdPath) -> Result<Self, PrimitivesError> {
        let mut current = self.clone();
        for index in path.indices() {
            current = current.derive_child(*index)?;
        }
        Ok(current)
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    fn from_hmac_output(i: &[u8; 64], depth: u8) -> Result<Self, PrimitivesError> {
        let key = PrivateKey::from_bytes(&i[..32])
            .map_err(|e| PrimitivesError::KeyDerivation(e.to_string()))?;
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&i[32..]);
        Ok(ExtendedPrivateKey {
            key,
            chain_code,
            depth,
        })
    }
}

impl Drop for ExtendedPrivateKey {
    fn drop(&mut self) {
        self.chain_code.zeroize();
    }
}
