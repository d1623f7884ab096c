//! Final transaction envelope.
//!
//! A `SignedTransaction` pins the exact body and auth info bytes that were
//! signed together with one signature per signer info. It serializes as a
//! protobuf `TxRaw`, the blob handed to the broadcaster.

use cosm_proto::cosmos::tx::v1beta1::{AuthInfo, TxBody, TxRaw};
use cosm_proto::codec;
use prost::Message;
use tracing::debug;

use crate::TxError;

/// A fully signed transaction, immutable once assembled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransaction {
    body_bytes: Vec<u8>,
    auth_info_bytes: Vec<u8>,
    signatures: Vec<Vec<u8>>,
}

impl SignedTransaction {
    /// Assemble a signed transaction.
    ///
    /// The bytes are stored exactly as given; nothing is re-encoded.
    ///
    /// # Arguments
    /// * `body_bytes` - Serialized `TxBody` that was signed.
    /// * `auth_info_bytes` - Serialized `AuthInfo` that was signed.
    /// * `signatures` - One signature per signer info, in signer-info order.
    ///
    /// # Returns
    /// The transaction, or `TxError::Validation` if the auth info has no
    /// signers or the signature count differs from the signer-info count.
    pub fn new(
        body_bytes: Vec<u8>,
        auth_info_bytes: Vec<u8>,
        signatures: Vec<Vec<u8>>,
    ) -> Result<Self, TxError> {
        let auth_info: AuthInfo = codec::decode(&auth_info_bytes)
            .map_err(|e| e.with_type_url("/cosmos.tx.v1beta1.AuthInfo"))?;
        let signers = auth_info.signer_infos.len();
        if signers == 0 {
            return Err(TxError::Validation("auth info has no signer infos".to_string()));
        }
        if signatures.len() != signers {
            return Err(TxError::Validation(format!(
                "expected {} signatures, got {}",
                signers,
                signatures.len()
            )));
        }
        debug!(signers, body_len = body_bytes.len(), "assembled signed transaction");
        Ok(SignedTransaction {
            body_bytes,
            auth_info_bytes,
            signatures,
        })
    }

    /// Parse a `TxRaw` and validate it like [`SignedTransaction::new`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxError> {
        let raw: TxRaw = codec::decode(bytes)
            .map_err(|e| e.with_type_url("/cosmos.tx.v1beta1.TxRaw"))?;
        Self::new(raw.body_bytes, raw.auth_info_bytes, raw.signatures)
    }

    pub fn body_bytes(&self) -> &[u8] {
        &self.body_bytes
    }

    pub fn auth_info_bytes(&self) -> &[u8] {
        &self.auth_info_bytes
    }

    pub fn signatures(&self) -> &[Vec<u8>] {
        &self.signatures
    }

    /// Decode the body for inspection.
    pub fn body(&self) -> Result<TxBody, TxError> {
        Ok(codec::decode(&self.body_bytes)
            .map_err(|e| e.with_type_url("/cosmos.tx.v1beta1.TxBody"))?)
    }

    /// Decode the auth info for inspection.
    pub fn auth_info(&self) -> Result<AuthInfo, TxError> {
        Ok(codec::decode(&self.auth_info_bytes)
            .map_err(|e| e.with_type_url("/cosmos.tx.v1beta1.AuthInfo"))?)
    }

    pub fn to_tx_raw(&self) -> TxRaw {
        TxRaw {
            body_bytes: self.body_bytes.clone(),
            auth_info_bytes: self.auth_info_bytes.clone(),
            signatures: self.signatures.clone(),
        }
    }

    /// Serialize as `TxRaw`, ready for broadcast.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_tx_raw().encode_to_vec()
    }
}

impl From<SignedTransaction> for TxRaw {
    fn from(tx: SignedTransaction) -> Self {
        TxRaw {
            body_bytes: tx.body_bytes,
            auth_info_bytes: tx.auth_info_bytes,
            signatures: tx.signatures,
        }
    }
}

/// Build a `TxRaw` from already-signed parts.
///
/// # Returns
/// The envelope, or `TxError::Validation` under the same rules as
/// [`SignedTransaction::new`].
pub fn make_tx_raw(
    body_bytes: Vec<u8>,
    auth_info_bytes: Vec<u8>,
    signatures: Vec<Vec<u8>>,
) -> Result<TxRaw, TxError> {
    Ok(SignedTransaction::new(body_bytes, auth_info_bytes, signatures)?.into())
}
