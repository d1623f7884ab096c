//! BIP-39 / BIP-32 hierarchical deterministic wallet.

use std::fmt;

use cosm_primitives::hd::{cosmos_hub_path, ExtendedPrivateKey, HdPath};
use cosm_primitives::mnemonic::Mnemonic;
use cosm_proto::cosmos::tx::v1beta1::SignDoc;
use cosm_signing::amino::StdSignDoc;
use serde::{Deserialize, Deserializer};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use zeroize::Zeroize;

use crate::error::WalletError;
use crate::local::{self, LocalAccount};
use crate::signer::{
    AccountData, AminoSignResponse, DirectSignResponse, OfflineAminoSigner, OfflineDirectSigner,
};

/// Default bech32 prefix of account addresses.
pub const DEFAULT_PREFIX: &str = "cosmos";

/// Options for [`Secp256k1HdWallet`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HdWalletOptions {
    /// BIP-39 passphrase; empty for none.
    pub bip39_password: String,
    /// One account is derived per path, in order.
    #[serde(deserialize_with = "deserialize_paths")]
    pub hd_paths: Vec<HdPath>,
    /// Bech32 prefix for the derived addresses.
    pub prefix: String,
}

impl Default for HdWalletOptions {
    fn default() -> Self {
        HdWalletOptions {
            bip39_password: String::new(),
            hd_paths: vec![cosmos_hub_path(0)],
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

fn deserialize_paths<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<HdPath>, D::Error> {
    let raw = Vec::<String>::deserialize(deserializer)?;
    raw.iter()
        .map(|p| p.parse::<HdPath>().map_err(serde::de::Error::custom))
        .collect()
}

/// A wallet deriving secp256k1 keys from a mnemonic.
///
/// Implements both [`OfflineDirectSigner`] and [`OfflineAminoSigner`].
pub struct Secp256k1HdWallet {
    mnemonic: Mnemonic,
    accounts: Vec<LocalAccount>,
}

impl Secp256k1HdWallet {
    /// Restore a wallet from a mnemonic phrase.
    ///
    /// # Arguments
    /// * `phrase` - English BIP-39 phrase.
    /// * `options` - Passphrase, derivation paths and address prefix.
    ///
    /// # Returns
    /// The wallet, or an error if the phrase is invalid, no paths are given,
    /// or a derivation step produces an invalid key.
    pub fn from_mnemonic(phrase: &str, options: HdWalletOptions) -> Result<Self, WalletError> {
        let mnemonic = Mnemonic::parse(phrase)?;
        Self::from_parsed(mnemonic, options)
    }

    /// Create a wallet from a freshly generated mnemonic.
    ///
    /// # Arguments
    /// * `word_count` - 12, 15, 18, 21 or 24.
    /// * `options` - Passphrase, derivation paths and address prefix.
    pub fn generate(word_count: usize, options: HdWalletOptions) -> Result<Self, WalletError> {
        let mnemonic = Mnemonic::generate(word_count)?;
        Self::from_parsed(mnemonic, options)
    }

    fn from_parsed(mnemonic: Mnemonic, options: HdWalletOptions) -> Result<Self, WalletError> {
        if options.hd_paths.is_empty() {
            return Err(WalletError::InvalidArgument(
                "at least one HD path is required".to_string(),
            ));
        }
        let mut seed = mnemonic.to_seed(&options.bip39_password);
        let master = ExtendedPrivateKey::from_seed(&seed);
        seed.zeroize();
        let master = master?;

        let accounts = options
            .hd_paths
            .iter()
            .map(|path| {
                let child = master.derive_path(path)?;
                let account = LocalAccount::new(child.private_key().clone(), &options.prefix)?;
                debug!(%path, address = account.address(), "derived account");
                Ok(account)
            })
            .collect::<Result<Vec<_>, WalletError>>()?;

        Ok(Secp256k1HdWallet { mnemonic, accounts })
    }

    /// The wallet's mnemonic phrase.
    pub fn mnemonic(&self) -> &str {
        self.mnemonic.phrase()
    }

    fn accounts(&self) -> Vec<AccountData> {
        self.accounts.iter().map(LocalAccount::account_data).collect()
    }
}

impl fmt::Debug for Secp256k1HdWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1HdWallet")
            .field("mnemonic", &self.mnemonic)
            .field(
                "accounts",
                &self.accounts.iter().map(LocalAccount::address).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl OfflineDirectSigner for Secp256k1HdWallet {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        Ok(self.accounts())
    }

    async fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: SignDoc,
        cancel: &CancellationToken,
    ) -> Result<DirectSignResponse, WalletError> {
        local::sign_direct(&self.accounts, signer_address, sign_doc, cancel)
    }
}

impl OfflineAminoSigner for Secp256k1HdWallet {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        Ok(self.accounts())
    }

    async fn sign_amino(
        &self,
        signer_address: &str,
        sign_doc: StdSignDoc,
        cancel: &CancellationToken,
    ) -> Result<AminoSignResponse, WalletError> {
        local::sign_amino(&self.accounts, signer_address, sign_doc, cancel)
    }
}
