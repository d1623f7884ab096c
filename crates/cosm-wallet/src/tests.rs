//! Tests for the cosm-wallet crate.

use std::sync::Arc;
use std::time::Duration;

use cosm_primitives::hd::cosmos_hub_path;
use cosm_proto::cosmos::bank::v1beta1::MsgSend;
use cosm_proto::cosmos::base::v1beta1::Coin;
use cosm_proto::cosmos::tx::v1beta1::SignDoc;
use cosm_proto::{ProtoMessage, Registry, TypedMessage};
use cosm_signing::amino::{self, AminoTypes, StdFee, StdSignDoc};
use cosm_signing::direct;
use tokio_util::sync::CancellationToken;
use tracing_test::traced_test;

use crate::*;

const FAUCET_MNEMONIC: &str = "economy stock theory fatal elder harbor betray wasp final emotion task crumble siren bottom lizard educate guess current outdoor pair theory focus wife stone";
const FAUCET_PRIV: &str = "e16ee698b4a4ee03566d7dd9bb6f0e8a2dda802527ba56205f5767c0049fa0b9";
const FAUCET_ADDR: &str = "cosmos1pkptre7fdkl6gfrzlesjjvhxhlc3r4gmmk8rs6";
const FAUCET_PUB_BASE64: &str = "A08EGB7ro1ORuFhjOnZcSgwYlpe0DSFjVNUIkNNQxwKQ";
const TO_ADDR: &str = "cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu";

/// Direct signature over the sequence 0 MsgSend sign doc.
const DIRECT_SIG_SEQ0: &str =
    "yd0g4HRk06aI/0txCx+8An5JXnl8+gtIBNou0ReVkid3LeBZgI92WqKbj5Lt8w9MLFpDjjDT/miX2qcUHjzm+Q==";
/// Amino signature over the same content.
const AMINO_SIG_SEQ0: &str =
    "zW5WckAkJGPtTlkgoWw+AmNgiD/Krtc9xpoe3WDyif5XnBG3WzthhYmykHW06NfV9PV3/N7x1gpLMdnaSQBWPA==";

fn faucet() -> Secp256k1HdWallet {
    Secp256k1HdWallet::from_mnemonic(FAUCET_MNEMONIC, HdWalletOptions::default()).unwrap()
}

fn send_msg() -> MsgSend {
    MsgSend {
        from_address: FAUCET_ADDR.to_string(),
        to_address: TO_ADDR.to_string(),
        amount: vec![Coin::new("1234567", "ucosm")],
    }
}

fn direct_doc(wallet_pubkey: &cosm_primitives::ec::PublicKey) -> SignDoc {
    let registry = Registry::with_defaults();
    let msg = send_msg();
    let body = registry.encode_tx_body(&[&msg as &dyn ProtoMessage], "").unwrap();
    let auth = direct::make_auth_info_bytes(
        &[direct::encode_pubkey(wallet_pubkey)],
        &[Coin::new("2000", "ucosm")],
        200_000,
        0,
    )
    .unwrap();
    direct::make_sign_doc(body, auth, "simd-testing", 1).unwrap()
}

fn amino_doc() -> StdSignDoc {
    let msg = AminoTypes::with_defaults().to_amino(MsgSend::TYPE_URL, &send_msg()).unwrap();
    let fee = StdFee {
        amount: vec![amino::Coin::new("2000", "ucosm")],
        gas: "200000".to_string(),
    };
    amino::make_sign_doc(vec![msg], fee, "simd-testing", "", 1, 0).unwrap()
}

// -----------------------------------------------------------------------
// HD wallet
// -----------------------------------------------------------------------

#[tokio::test]
async fn test_hd_wallet_default_account() {
    let wallet = faucet();
    assert_eq!(wallet.mnemonic(), FAUCET_MNEMONIC);

    let accounts = OfflineDirectSigner::get_accounts(&wallet).await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].address, FAUCET_ADDR);
    assert_eq!(accounts[0].algo, Algo::Secp256k1);
    assert_eq!(
        amino::encode_secp256k1_pubkey(&accounts[0].pubkey).value,
        FAUCET_PUB_BASE64
    );
}

#[tokio::test]
async fn test_hd_wallet_multiple_paths_and_prefix() {
    let options = HdWalletOptions {
        hd_paths: vec![cosmos_hub_path(0), cosmos_hub_path(1), cosmos_hub_path(2)],
        ..Default::default()
    };
    let wallet = Secp256k1HdWallet::from_mnemonic(FAUCET_MNEMONIC, options).unwrap();
    let addresses: Vec<String> = OfflineAminoSigner::get_accounts(&wallet)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.address)
        .collect();
    assert_eq!(
        addresses,
        vec![
            FAUCET_ADDR,
            "cosmos10dyr9899g6t0pelew4nvf4j5c3jcgv0r73qga5",
            "cosmos1xy4yqngt0nlkdcenxymg8tenrghmek4nmqm28k",
        ]
    );

    let options = HdWalletOptions {
        prefix: "wasm".to_string(),
        ..Default::default()
    };
    let wallet = Secp256k1HdWallet::from_mnemonic(FAUCET_MNEMONIC, options).unwrap();
    let accounts = OfflineDirectSigner::get_accounts(&wallet).await.unwrap();
    assert_eq!(accounts[0].address, "wasm1pkptre7fdkl6gfrzlesjjvhxhlc3r4gm32kke3");
}

#[test]
fn test_hd_wallet_options_from_json() {
    let options: HdWalletOptions =
        serde_json::from_str(r#"{"hd_paths": ["m/44'/118'/0'/0/1"], "prefix": "osmo"}"#).unwrap();
    assert_eq!(options.hd_paths, vec![cosmos_hub_path(1)]);
    assert_eq!(options.prefix, "osmo");
    assert_eq!(options.bip39_password, "");

    let defaults: HdWalletOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, HdWalletOptions::default());

    assert!(serde_json::from_str::<HdWalletOptions>(r#"{"hd_paths": ["m/x"]}"#).is_err());
}

#[test]
fn test_hd_wallet_rejects_bad_input() {
    assert!(matches!(
        Secp256k1HdWallet::from_mnemonic("economy stock theory", HdWalletOptions::default()),
        Err(WalletError::Primitives(_))
    ));
    let options = HdWalletOptions {
        hd_paths: vec![],
        ..Default::default()
    };
    assert!(matches!(
        Secp256k1HdWallet::from_mnemonic(FAUCET_MNEMONIC, options),
        Err(WalletError::InvalidArgument(_))
    ));
}

#[test]
fn test_generated_wallet_debug_hides_secrets() {
    let wallet = Secp256k1HdWallet::generate(12, HdWalletOptions::default()).unwrap();
    assert_eq!(wallet.mnemonic().split(' ').count(), 12);
    let debug = format!("{:?}", wallet);
    assert!(!debug.contains(wallet.mnemonic()));
    assert!(debug.contains("cosmos1"));
}

#[traced_test]
#[tokio::test]
async fn test_hd_wallet_sign_direct_vector() {
    let wallet = faucet();
    let accounts = OfflineDirectSigner::get_accounts(&wallet).await.unwrap();
    let doc = direct_doc(&accounts[0].pubkey);

    let response = wallet
        .sign_direct(FAUCET_ADDR, doc.clone(), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response.signed, doc);
    assert_eq!(response.signature.signature, DIRECT_SIG_SEQ0);
    assert_eq!(response.signature.pub_key.value, FAUCET_PUB_BASE64);
    check_direct_linkage(&doc, &response).unwrap();
    assert!(logs_contain("signed direct sign doc"));
}

#[tokio::test]
async fn test_hd_wallet_sign_amino_vector() {
    let wallet = faucet();
    let doc = amino_doc();
    let response = wallet
        .sign_amino(FAUCET_ADDR, doc.clone(), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response.signed, doc);
    assert_eq!(response.signature.signature, AMINO_SIG_SEQ0);
    check_amino_linkage(&doc, &response).unwrap();
}

#[tokio::test]
async fn test_local_sign_errors() {
    let wallet = faucet();
    let doc = amino_doc();
    assert!(matches!(
        wallet.sign_amino(TO_ADDR, doc.clone(), &CancellationToken::new()).await,
        Err(WalletError::AddressNotControlled(addr)) if addr == TO_ADDR
    ));

    let cancel = CancellationToken::new();
    cancel.cancel();
    assert!(matches!(
        wallet.sign_amino(FAUCET_ADDR, doc, &cancel).await,
        Err(WalletError::Cancelled)
    ));
}

#[tokio::test]
async fn test_single_key_wallet_matches_hd_wallet() {
    let wallet = Secp256k1Wallet::from_hex(FAUCET_PRIV, "cosmos").unwrap();
    assert_eq!(wallet.address(), FAUCET_ADDR);

    let accounts = OfflineDirectSigner::get_accounts(&wallet).await.unwrap();
    let doc = direct_doc(&accounts[0].pubkey);
    let response = wallet
        .sign_direct(FAUCET_ADDR, doc, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response.signature.signature, DIRECT_SIG_SEQ0);
}

// -----------------------------------------------------------------------
// Linkage
// -----------------------------------------------------------------------

#[tokio::test]
async fn test_linkage_detects_substituted_doc() {
    let wallet = faucet();
    let doc = amino_doc();
    let mut response = wallet
        .sign_amino(FAUCET_ADDR, doc.clone(), &CancellationToken::new())
        .await
        .unwrap();
    response.signed.memo = "changed".to_string();
    assert!(matches!(
        check_amino_linkage(&doc, &response),
        Err(WalletError::SignedDocMismatch)
    ));

    let accounts = OfflineDirectSigner::get_accounts(&wallet).await.unwrap();
    let doc = direct_doc(&accounts[0].pubkey);
    let mut response = wallet
        .sign_direct(FAUCET_ADDR, doc.clone(), &CancellationToken::new())
        .await
        .unwrap();
    response.signed.account_number = 2;
    assert!(matches!(
        check_direct_linkage(&doc, &response),
        Err(WalletError::SignedDocMismatch)
    ));
}

// -----------------------------------------------------------------------
// Remote signer
// -----------------------------------------------------------------------

async fn remote_for_faucet(
    config: RemoteSignerConfig,
) -> (RemoteSigner, tokio::sync::mpsc::Receiver<PendingRequest>) {
    let accounts = OfflineDirectSigner::get_accounts(&faucet()).await.unwrap();
    RemoteSigner::new(accounts, config)
}

/// An agent that signs every request with the faucet wallet.
fn spawn_approving_agent(mut rx: tokio::sync::mpsc::Receiver<PendingRequest>, tamper: bool) {
    let wallet = Arc::new(faucet());
    tokio::spawn(async move {
        while let Some(pending) = rx.recv().await {
            let cancel = CancellationToken::new();
            match pending.request().clone() {
                SignRequest::Direct { signer_address, sign_doc } => {
                    let mut response =
                        wallet.sign_direct(&signer_address, sign_doc, &cancel).await.unwrap();
                    if tamper {
                        response.signed.chain_id = "other-chain".to_string();
                    }
                    pending.approve(SignReply::Direct(response));
                }
                SignRequest::Amino { signer_address, sign_doc } => {
                    let response =
                        wallet.sign_amino(&signer_address, sign_doc, &cancel).await.unwrap();
                    pending.approve(SignReply::Amino(response));
                }
            }
        }
    });
}

#[traced_test]
#[tokio::test]
async fn test_remote_signer_approved() {
    let (signer, rx) = remote_for_faucet(RemoteSignerConfig::default()).await;
    spawn_approving_agent(rx, false);

    let accounts = OfflineDirectSigner::get_accounts(&signer).await.unwrap();
    assert_eq!(accounts[0].address, FAUCET_ADDR);

    let doc = direct_doc(&accounts[0].pubkey);
    let response = signer
        .sign_direct(FAUCET_ADDR, doc, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response.signature.signature, DIRECT_SIG_SEQ0);

    let response = signer
        .sign_amino(FAUCET_ADDR, amino_doc(), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response.signature.signature, AMINO_SIG_SEQ0);
    assert!(logs_contain("waiting for remote signer"));
}

#[tokio::test]
async fn test_remote_signer_tampered_doc() {
    let (signer, rx) = remote_for_faucet(RemoteSignerConfig::default()).await;
    spawn_approving_agent(rx, true);
    let accounts = OfflineDirectSigner::get_accounts(&signer).await.unwrap();
    let result = signer
        .sign_direct(FAUCET_ADDR, direct_doc(&accounts[0].pubkey), &CancellationToken::new())
        .await;
    assert!(matches!(result, Err(WalletError::SignedDocMismatch)));
}

#[tokio::test]
async fn test_remote_signer_rejected() {
    let (signer, mut rx) = remote_for_faucet(RemoteSignerConfig::default()).await;
    tokio::spawn(async move {
        if let Some(pending) = rx.recv().await {
            assert_eq!(pending.request().signer_address(), FAUCET_ADDR);
            pending.reject("user declined");
        }
    });
    let result = signer
        .sign_amino(FAUCET_ADDR, amino_doc(), &CancellationToken::new())
        .await;
    assert!(matches!(result, Err(WalletError::Rejected(reason)) if reason == "user declined"));
}

#[traced_test]
#[tokio::test]
async fn test_remote_signer_timeout() {
    let config = RemoteSignerConfig {
        timeout_ms: 50,
        ..Default::default()
    };
    let (signer, mut rx) = remote_for_faucet(config).await;
    tokio::spawn(async move {
        let _held = rx.recv().await;
        tokio::time::sleep(Duration::from_secs(10)).await;
    });
    let result = signer
        .sign_amino(FAUCET_ADDR, amino_doc(), &CancellationToken::new())
        .await;
    assert!(matches!(result, Err(WalletError::TimedOut(d)) if d == Duration::from_millis(50)));
    assert!(logs_contain("remote signing failed"));
}

#[tokio::test]
async fn test_remote_signer_cancelled() {
    let (signer, mut rx) = remote_for_faucet(RemoteSignerConfig::default()).await;
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        let _held = rx.recv().await;
        trigger.cancel();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });
    let result = signer.sign_amino(FAUCET_ADDR, amino_doc(), &cancel).await;
    assert!(matches!(result, Err(WalletError::Cancelled)));
}

#[tokio::test]
async fn test_remote_signer_unavailable() {
    let (signer, rx) = remote_for_faucet(RemoteSignerConfig::default()).await;
    drop(rx);
    let result = signer
        .sign_amino(FAUCET_ADDR, amino_doc(), &CancellationToken::new())
        .await;
    assert!(matches!(result, Err(WalletError::Unavailable(_))));

    // agent receives the request and drops it unanswered
    let (signer, mut rx) = remote_for_faucet(RemoteSignerConfig::default()).await;
    tokio::spawn(async move {
        let pending = rx.recv().await;
        drop(pending);
    });
    let result = signer
        .sign_amino(FAUCET_ADDR, amino_doc(), &CancellationToken::new())
        .await;
    assert!(matches!(result, Err(WalletError::Unavailable(_))));
}

#[tokio::test]
async fn test_remote_signer_unknown_address() {
    let (signer, _rx) = remote_for_faucet(RemoteSignerConfig::default()).await;
    let result = signer
        .sign_amino(TO_ADDR, amino_doc(), &CancellationToken::new())
        .await;
    assert!(matches!(result, Err(WalletError::AddressNotControlled(_))));
}
