/// Cosmos SDK client - offline signers.
///
/// Signers produce secp256k1 signatures over direct or amino sign docs.
/// Local wallets keep keys in memory; the remote signer forwards each
/// request to an external agent and waits for its approval.

pub mod hd_wallet;
pub mod key_wallet;
pub mod remote;
pub mod signer;

mod error;
mod local;

pub use error::WalletError;
pub use hd_wallet::{HdWalletOptions, Secp256k1HdWallet};
pub use key_wallet::Secp256k1Wallet;
pub use remote::{PendingRequest, RemoteSigner, RemoteSignerConfig, SignReply, SignRequest};
pub use signer::{
    check_amino_linkage, check_direct_linkage, AccountData, Algo, AminoSignResponse,
    DirectSignResponse, OfflineAminoSigner, OfflineDirectSigner,
};

#[cfg(test)]
mod tests;
