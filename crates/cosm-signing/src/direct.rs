//! SIGN_MODE_DIRECT sign-doc construction.
//!
//! In direct mode the signer signs the protobuf encoding of a `SignDoc`,
//! which embeds the already-serialized `TxBody` and `AuthInfo` verbatim.
//! The same body and auth info bytes then go into the `TxRaw`, so what the
//! node verifies is exactly what was signed.

use cosm_primitives::ec::PublicKey;
use cosm_proto::cosmos::base::v1beta1::Coin;
use cosm_proto::cosmos::crypto::secp256k1::PubKey;
use cosm_proto::cosmos::tx::signing::v1beta1::SignMode;
use cosm_proto::cosmos::tx::v1beta1::{AuthInfo, Fee, ModeInfo, SignDoc, SignerInfo};
use cosm_proto::{Any, TypedMessage};
use prost::Message;

use crate::TxError;

/// Pack a secp256k1 public key as `/cosmos.crypto.secp256k1.PubKey`.
pub fn encode_pubkey(pubkey: &PublicKey) -> Any {
    PubKey {
        key: pubkey.to_compressed().to_vec(),
    }
    .to_any()
}

/// Build `AuthInfo` bytes for signers that all share one sequence number.
///
/// # Arguments
/// * `pubkeys` - Packed public keys, one per signer, in signing order.
/// * `fee_amount` - Fee coins, kept in the given order.
/// * `gas_limit` - Maximum gas for the transaction.
/// * `sequence` - Account sequence of the signers.
///
/// # Returns
/// The serialized `AuthInfo`, or `TxError::Validation` if there are no signers.
pub fn make_auth_info_bytes(
    pubkeys: &[Any],
    fee_amount: &[Coin],
    gas_limit: u64,
    sequence: u64,
) -> Result<Vec<u8>, TxError> {
    let signers: Vec<(Any, u64)> = pubkeys.iter().map(|pk| (pk.clone(), sequence)).collect();
    make_auth_info_bytes_for_signers(&signers, fee_amount, gas_limit)
}

/// Build `AuthInfo` bytes with a sequence number per signer.
///
/// Every signer info uses `SIGN_MODE_DIRECT`.
///
/// # Arguments
/// * `signers` - `(public key, sequence)` pairs in signing order.
/// * `fee_amount` - Fee coins, kept in the given order.
/// * `gas_limit` - Maximum gas for the transaction.
///
/// # Returns
/// The serialized `AuthInfo`, or `TxError::Validation` if `signers` is empty.
pub fn make_auth_info_bytes_for_signers(
    signers: &[(Any, u64)],
    fee_amount: &[Coin],
    gas_limit: u64,
) -> Result<Vec<u8>, TxError> {
    if signers.is_empty() {
        return Err(TxError::Validation("auth info needs at least one signer".to_string()));
    }
    let auth_info = AuthInfo {
        signer_infos: signers
            .iter()
            .map(|(public_key, sequence)| SignerInfo {
                public_key: Some(public_key.clone()),
                mode_info: Some(ModeInfo::single(SignMode::Direct)),
                sequence: *sequence,
            })
            .collect(),
        fee: Some(Fee {
            amount: fee_amount.to_vec(),
            gas_limit,
            ..Default::default()
        }),
    };
    Ok(auth_info.encode_to_vec())
}

/// Assemble a direct-mode `SignDoc`.
///
/// # Arguments
/// * `body_bytes` - Serialized `TxBody`.
/// * `auth_info_bytes` - Serialized `AuthInfo`.
/// * `chain_id` - Network identifier, embedded unmodified.
/// * `account_number` - On-chain account number of the signer.
///
/// # Returns
/// The `SignDoc`, or `TxError::Validation` if the chain id is empty.
pub fn make_sign_doc(
    body_bytes: Vec<u8>,
    auth_info_bytes: Vec<u8>,
    chain_id: &str,
    account_number: u64,
) -> Result<SignDoc, TxError> {
    if chain_id.is_empty() {
        return Err(TxError::Validation("chain id must not be empty".to_string()));
    }
    Ok(SignDoc {
        body_bytes,
        auth_info_bytes,
        chain_id: chain_id.to_string(),
        account_number,
    })
}

/// The exact bytes that get signed: the protobuf encoding of `sign_doc`.
pub fn make_sign_bytes(sign_doc: &SignDoc) -> Vec<u8> {
    sign_doc.encode_to_vec()
}
