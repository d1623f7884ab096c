//! Offline signer interfaces.
//!
//! A signer holds (or fronts for) private keys and signs sign docs on
//! request. It never broadcasts and never talks to a node. Each sign call
//! takes a `CancellationToken`; local signers only check it on entry, remote
//! signers race it against the agent's reply.

use std::fmt;
use std::future::Future;

use cosm_primitives::ec::PublicKey;
use cosm_proto::cosmos::tx::v1beta1::SignDoc;
use cosm_signing::amino::{serialize_sign_doc, StdSignDoc, StdSignature};
use cosm_signing::direct::make_sign_bytes;
use tokio_util::sync::CancellationToken;

use crate::error::WalletError;

/// Signature algorithm of an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algo {
    Secp256k1,
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algo::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

/// An account a signer can sign for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountData {
    /// Bech32 account address.
    pub address: String,
    pub algo: Algo,
    pub pubkey: PublicKey,
}

/// Result of a direct-mode signing request.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectSignResponse {
    /// The document that was actually signed.
    pub signed: SignDoc,
    pub signature: StdSignature,
}

/// Result of an amino-mode signing request.
#[derive(Clone, Debug, PartialEq)]
pub struct AminoSignResponse {
    /// The document that was actually signed.
    pub signed: StdSignDoc,
    pub signature: StdSignature,
}

/// A signer for SIGN_MODE_DIRECT.
pub trait OfflineDirectSigner: Send + Sync {
    /// Accounts this signer controls, in a stable order.
    fn get_accounts(&self) -> impl Future<Output = Result<Vec<AccountData>, WalletError>> + Send;

    /// Sign the protobuf encoding of `sign_doc` with the key of `signer_address`.
    ///
    /// # Arguments
    /// * `signer_address` - Bech32 address of the signing account.
    /// * `sign_doc` - The direct-mode document to sign.
    /// * `cancel` - Aborts the request with `WalletError::Cancelled`.
    ///
    /// # Returns
    /// The signed document and the signature, or a `WalletError`.
    fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: SignDoc,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<DirectSignResponse, WalletError>> + Send;
}

/// A signer for SIGN_MODE_LEGACY_AMINO_JSON.
pub trait OfflineAminoSigner: Send + Sync {
    /// Accounts this signer controls, in a stable order.
    fn get_accounts(&self) -> impl Future<Output = Result<Vec<AccountData>, WalletError>> + Send;

    /// Sign the canonical JSON of `sign_doc` with the key of `signer_address`.
    ///
    /// # Arguments
    /// * `signer_address` - Bech32 address of the signing account.
    /// * `sign_doc` - The amino document to sign.
    /// * `cancel` - Aborts the request with `WalletError::Cancelled`.
    ///
    /// # Returns
    /// The signed document and the signature, or a `WalletError`.
    fn sign_amino(
        &self,
        signer_address: &str,
        sign_doc: StdSignDoc,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<AminoSignResponse, WalletError>> + Send;
}

// -----------------------------------------------------------------------
// Linkage checks
// -----------------------------------------------------------------------

/// Require that `response` signed exactly `requested`, compared by sign bytes.
pub fn check_direct_linkage(
    requested: &SignDoc,
    response: &DirectSignResponse,
) -> Result<(), WalletError> {
    if make_sign_bytes(requested) != make_sign_bytes(&response.signed) {
        return Err(WalletError::SignedDocMismatch);
    }
    Ok(())
}

/// Require that `response` signed exactly `requested`, compared by canonical
/// JSON.
pub fn check_amino_linkage(
    requested: &StdSignDoc,
    response: &AminoSignResponse,
) -> Result<(), WalletError> {
    if serialize_sign_doc(requested)? != serialize_sign_doc(&response.signed)? {
        return Err(WalletError::SignedDocMismatch);
    }
    Ok(())
}
