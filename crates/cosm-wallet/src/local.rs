//! Signing with keys held in process memory.

use cosm_primitives::ec::{PrivateKey, PublicKey};
use cosm_proto::cosmos::tx::v1beta1::SignDoc;
use cosm_signing::amino::{encode_secp256k1_signature, serialize_sign_doc, StdSignDoc};
use cosm_signing::direct::make_sign_bytes;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::WalletError;
use crate::signer::{AccountData, Algo, AminoSignResponse, DirectSignResponse};

/// One key and the address derived from it.
#[derive(Clone)]
pub(crate) struct LocalAccount {
    key: PrivateKey,
    pubkey: PublicKey,
    address: String,
}

impl LocalAccount {
    pub(crate) fn new(key: PrivateKey, prefix: &str) -> Result<Self, WalletError> {
        let pubkey = key.pub_key();
        let address = pubkey.to_address(prefix)?;
        Ok(LocalAccount { key, pubkey, address })
    }

    pub(crate) fn address(&self) -> &str {
        &self.address
    }

    pub(crate) fn account_data(&self) -> AccountData {
        AccountData {
            address: self.address.clone(),
            algo: Algo::Secp256k1,
            pubkey: self.pubkey.clone(),
        }
    }
}

fn find<'a>(accounts: &'a [LocalAccount], address: &str) -> Result<&'a LocalAccount, WalletError> {
    accounts
        .iter()
        .find(|a| a.address == address)
        .ok_or_else(|| WalletError::AddressNotControlled(address.to_string()))
}

pub(crate) fn sign_direct(
    accounts: &[LocalAccount],
    signer_address: &str,
    sign_doc: SignDoc,
    cancel: &CancellationToken,
) -> Result<DirectSignResponse, WalletError> {
    if cancel.is_cancelled() {
        return Err(WalletError::Cancelled);
    }
    let account = find(accounts, signer_address)?;
    let sign_bytes = make_sign_bytes(&sign_doc);
    let signature = account.key.sign(&sign_bytes)?;
    debug!(address = signer_address, len = sign_bytes.len(), "signed direct sign doc");
    Ok(DirectSignResponse {
        signed: sign_doc,
        signature: encode_secp256k1_signature(&account.pubkey, &signature),
    })
}

pub(crate) fn sign_amino(
    accounts: &[LocalAccount],
    signer_address: &str,
    sign_doc: StdSignDoc,
    cancel: &CancellationToken,
) -> Result<AminoSignResponse, WalletError> {
    if cancel.is_cancelled() {
        return Err(WalletError::Cancelled);
    }
    let account = find(accounts, signer_address)?;
    let sign_bytes = serialize_sign_doc(&sign_doc)?;
    let signature = account.key.sign(&sign_bytes)?;
    debug!(address = signer_address, len = sign_bytes.len(), "signed amino sign doc");
    Ok(AminoSignResponse {
        signed: sign_doc,
        signature: encode_secp256k1_signature(&account.pubkey, &signature),
    })
}
