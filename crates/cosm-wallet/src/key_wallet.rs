//! Wallet holding a single raw private key.

use std::fmt;

use cosm_primitives::ec::PrivateKey;
use cosm_proto::cosmos::tx::v1beta1::SignDoc;
use cosm_signing::amino::StdSignDoc;
use tokio_util::sync::CancellationToken;

use crate::error::WalletError;
use crate::local::{self, LocalAccount};
use crate::signer::{
    AccountData, AminoSignResponse, DirectSignResponse, OfflineAminoSigner, OfflineDirectSigner,
};

/// A signer for exactly one secp256k1 key.
#[derive(Clone)]
pub struct Secp256k1Wallet {
    account: LocalAccount,
}

impl Secp256k1Wallet {
    /// Wrap `key`, deriving its address under `prefix`.
    pub fn new(key: PrivateKey, prefix: &str) -> Result<Self, WalletError> {
        Ok(Secp256k1Wallet {
            account: LocalAccount::new(key, prefix)?,
        })
    }

    /// Wrap a hex-encoded 32-byte private key.
    pub fn from_hex(key_hex: &str, prefix: &str) -> Result<Self, WalletError> {
        Self::new(PrivateKey::from_hex(key_hex)?, prefix)
    }

    pub fn address(&self) -> &str {
        self.account.address()
    }
}

impl fmt::Debug for Secp256k1Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1Wallet")
            .field("address", &self.account.address())
            .finish()
    }
}

impl OfflineDirectSigner for Secp256k1Wallet {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        Ok(vec![self.account.account_data()])
    }

    async fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: SignDoc,
        cancel: &CancellationToken,
    ) -> Result<DirectSignResponse, WalletError> {
        local::sign_direct(std::slice::from_ref(&self.account), signer_address, sign_doc, cancel)
    }
}

impl OfflineAminoSigner for Secp256k1Wallet {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        Ok(vec![self.account.account_data()])
    }

    async fn sign_amino(
        &self,
        signer_address: &str,
        sign_doc: StdSignDoc,
        cancel: &CancellationToken,
    ) -> Result<AminoSignResponse, WalletError> {
        local::sign_amino(std::slice::from_ref(&self.account), signer_address, sign_doc, cancel)
    }
}
