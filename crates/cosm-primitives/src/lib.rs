//! Cosmos SDK client - Cryptographic primitives and key material.
//!
//! This crate provides the foundational building blocks for the signing stack:
//! - Hash functions (SHA-256, RIPEMD-160, HMAC-SHA512)
//! - secp256k1 private keys, public keys and fixed-length signatures
//! - BIP-39 mnemonic phrases and seed derivation
//! - BIP-32 hierarchical deterministic key derivation
//! - Bech32 account addresses

pub mod hash;
pub mod ec;
pub mod mnemonic;
pub mod hd;
pub mod address;

mod error;
pub use error::PrimitivesError;
