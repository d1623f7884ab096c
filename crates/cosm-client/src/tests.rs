//! Tests for the signing client against an in-memory chain.

use std::sync::Mutex;

use cosm_proto::cosmos::bank::v1beta1::MsgSend;
use cosm_proto::cosmos::base::v1beta1::Coin;
use cosm_proto::cosmos::tx::v1beta1::{SignDoc, TxRaw};
use cosm_proto::{ProtoMessage, TypedMessage};
use cosm_signing::amino::{self, AminoTypes, StdFee, StdSignDoc};
use cosm_signing::SignedTransaction;
use cosm_wallet::{
    AccountData, AminoSignResponse, DirectSignResponse, HdWalletOptions, OfflineAminoSigner,
    OfflineDirectSigner, Secp256k1HdWallet, WalletError,
};
use tokio_util::sync::CancellationToken;
use tracing_test::traced_test;

use crate::*;

const FAUCET_MNEMONIC: &str = "economy stock theory fatal elder harbor betray wasp final emotion task crumble siren bottom lizard educate guess current outdoor pair theory focus wife stone";
const FAUCET_ADDR: &str = "cosmos1pkptre7fdkl6gfrzlesjjvhxhlc3r4gmmk8rs6";
const TO_ADDR: &str = "cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu";

const AMINO_SIG_SEQ0: &str =
    "zW5WckAkJGPtTlkgoWw+AmNgiD/Krtc9xpoe3WDyif5XnBG3WzthhYmykHW06NfV9PV3/N7x1gpLMdnaSQBWPA==";

/// Signed `TxRaw` for the sequence 0 MsgSend reference transaction.
const TX_RAW_SEQ0: &str = concat!(
    "0a93010a90010a1c2f636f736d6f732e62616e6b2e763162657461312e4d736753656e6412700a2d636f73",
    "6d6f7331706b707472653766646b6c366766727a6c65736a6a766878686c63337234676d6d6b3872733612",
    "2d636f736d6f7331717970717870713971637273737a673270767871367273307a716733797963356c7a76",
    "3778751a100a0575636f736d12073132333435363712650a4e0a460a1f2f636f736d6f732e63727970746f",
    "2e736563703235366b312e5075624b657912230a21034f04181eeba35391b858633a765c4a0c189697b40d",
    "216354d50890d350c7029012040a02080112130a0d0a0575636f736d12043230303010c09a0c1a40c9dd20",
    "e07464d3a688ff4b710b1fbc027e495e797cfa0b4804da2ed117959227772de059808f765aa29b8f92edf3",
    "0f4c2c5a438e30d3fe6897daa7141e3ce6f9",
);

// -----------------------------------------------------------------------
// In-memory chain
// -----------------------------------------------------------------------

struct MockChain {
    chain_id: String,
    account: Option<SequenceResponse>,
    reject: Option<BroadcastFailure>,
    broadcasts: Mutex<Vec<BroadcastPayload>>,
}

impl MockChain {
    fn new(sequence: u64) -> Self {
        MockChain {
            chain_id: "simd-testing".to_string(),
            account: Some(SequenceResponse {
                account_number: 1,
                sequence,
            }),
            reject: None,
            broadcasts: Mutex::new(Vec::new()),
        }
    }

    fn last_broadcast(&self) -> BroadcastPayload {
        self.broadcasts.lock().unwrap().last().cloned().unwrap()
    }
}

impl AccountQuery for MockChain {
    async fn get_sequence(&self, address: &str) -> Result<SequenceResponse, ClientError> {
        match (address, self.account) {
            (FAUCET_ADDR, Some(account)) => Ok(account),
            _ => Err(ClientError::Query(format!("account {} not found", address))),
        }
    }
}

impl ChainIdSource for MockChain {
    async fn get_chain_id(&self) -> Result<String, ClientError> {
        Ok(self.chain_id.clone())
    }
}

impl Broadcaster for MockChain {
    async fn broadcast(&self, payload: BroadcastPayload) -> Result<BroadcastTxResult, ClientError> {
        self.broadcasts.lock().unwrap().push(payload);
        if let Some(failure) = &self.reject {
            return Err(failure.clone().into());
        }
        Ok(BroadcastTxResult {
            transaction_hash: "ABCDEF".to_string(),
            height: Some(7),
            raw_log: None,
        })
    }
}

/// Signs a document for a different chain than the one requested.
struct ChainSwappingSigner {
    inner: Secp256k1HdWallet,
}

impl OfflineDirectSigner for ChainSwappingSigner {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        OfflineDirectSigner::get_accounts(&self.inner).await
    }

    async fn sign_direct(
        &self,
        signer_address: &str,
        mut sign_doc: SignDoc,
        cancel: &CancellationToken,
    ) -> Result<DirectSignResponse, WalletError> {
        sign_doc.chain_id = "other-chain".to_string();
        self.inner.sign_direct(signer_address, sign_doc, cancel).await
    }
}

impl OfflineAminoSigner for ChainSwappingSigner {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        OfflineAminoSigner::get_accounts(&self.inner).await
    }

    async fn sign_amino(
        &self,
        signer_address: &str,
        mut sign_doc: StdSignDoc,
        cancel: &CancellationToken,
    ) -> Result<AminoSignResponse, WalletError> {
        sign_doc.chain_id = "other-chain".to_string();
        self.inner.sign_amino(signer_address, sign_doc, cancel).await
    }
}

fn faucet() -> Secp256k1HdWallet {
    Secp256k1HdWallet::from_mnemonic(FAUCET_MNEMONIC, HdWalletOptions::default()).unwrap()
}

fn client(chain: MockChain) -> SigningClient<Secp256k1HdWallet, MockChain> {
    SigningClient::new(chain, FAUCET_ADDR, faucet(), &ClientConfig::default()).unwrap()
}

fn reference_fee() -> StdFee {
    StdFee {
        amount: vec![amino::Coin::new("2000", "ucosm")],
        gas: "200000".to_string(),
    }
}

fn send_msg() -> MsgSend {
    MsgSend {
        from_address: FAUCET_ADDR.to_string(),
        to_address: TO_ADDR.to_string(),
        amount: vec![Coin::new("1234567", "ucosm")],
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn test_get_sequence_defaults_to_sender() {
    let client = client(MockChain::new(5));
    let seq = client.get_sequence(None).await.unwrap();
    assert_eq!(seq, SequenceResponse { account_number: 1, sequence: 5 });
    assert!(matches!(
        client.get_sequence(Some(TO_ADDR)).await,
        Err(ClientError::Query(_))
    ));
}

#[traced_test]
#[tokio::test]
async fn test_sign_and_broadcast_amino_vector() {
    let client = client(MockChain::new(0));
    let msg = AminoTypes::with_defaults().to_amino(MsgSend::TYPE_URL, &send_msg()).unwrap();

    let result = client
        .sign_and_broadcast(vec![msg], reference_fee(), "", &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(result.transaction_hash, "ABCDEF");
    assert_eq!(result.height, Some(7));

    match client.provider().last_broadcast() {
        BroadcastPayload::Amino(tx) => {
            assert_eq!(tx.signatures.len(), 1);
            assert_eq!(tx.signatures[0].signature, AMINO_SIG_SEQ0);
            assert_eq!(tx.msg[0].value["to_address"], TO_ADDR);
            assert_eq!(tx.memo, "");
        }
        other => panic!("expected amino payload, got {other:?}"),
    }
    assert!(logs_contain("signing amino transaction"));
}

#[tokio::test]
async fn test_sign_and_broadcast_direct_vector() {
    let client = client(MockChain::new(0));
    let msg = send_msg();
    client
        .sign_and_broadcast_direct(
            &[&msg as &dyn ProtoMessage],
            &reference_fee(),
            "",
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    match client.provider().last_broadcast() {
        BroadcastPayload::Protobuf(bytes) => {
            assert_eq!(hex::encode(&bytes), TX_RAW_SEQ0);
            let raw: TxRaw = cosm_proto::codec::decode(&bytes).unwrap();
            assert_eq!(raw.signatures.len(), 1);
            let tx = SignedTransaction::from_bytes(&bytes).unwrap();
            assert_eq!(tx.auth_info().unwrap().signer_infos[0].sequence, 0);
        }
        other => panic!("expected protobuf payload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_send_tokens_uses_fee_table() {
    let client = client(MockChain::new(3));
    client
        .send_tokens(TO_ADDR, vec![Coin::new("10", "ucosm")], "hello", &CancellationToken::new())
        .await
        .unwrap();

    match client.provider().last_broadcast() {
        BroadcastPayload::Amino(tx) => {
            assert_eq!(tx.fee.gas, "80000");
            assert_eq!(tx.fee.amount, vec![amino::Coin::new("2000", "ucosm")]);
            assert_eq!(tx.msg[0].msg_type, "cosmos-sdk/MsgSend");
            assert_eq!(tx.msg[0].value["from_address"], FAUCET_ADDR);
            assert_eq!(tx.memo, "hello");
        }
        other => panic!("expected amino payload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_broadcast_failure_surfaces() {
    let mut chain = MockChain::new(0);
    chain.reject = Some(BroadcastFailure {
        code: 32,
        description: "account sequence mismatch".to_string(),
    });
    let client = client(chain);
    let result = client
        .send_tokens(TO_ADDR, vec![Coin::new("10", "ucosm")], "", &CancellationToken::new())
        .await;
    match result {
        Err(ClientError::Broadcast(failure)) => {
            assert_eq!(failure.code, 32);
            assert!(failure.description.contains("sequence mismatch"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_sender_not_in_signer() {
    let client =
        SigningClient::new(MockChain::new(0), TO_ADDR, faucet(), &ClientConfig::default()).unwrap();
    let msg = send_msg();
    let result = client
        .sign_direct_tx(&[&msg as &dyn ProtoMessage], &reference_fee(), "", &CancellationToken::new())
        .await;
    assert!(matches!(
        result,
        Err(ClientError::Wallet(WalletError::AddressNotControlled(_)))
    ));
}

#[tokio::test]
async fn test_cancelled_before_signing() {
    let client = client(MockChain::new(0));
    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = client
        .send_tokens(TO_ADDR, vec![Coin::new("10", "ucosm")], "", &cancel)
        .await;
    assert!(matches!(result, Err(ClientError::Wallet(WalletError::Cancelled))));
    assert!(client.provider().broadcasts.lock().unwrap().is_empty());
}

#[test]
fn test_invalid_gas_price_rejected() {
    let config = ClientConfig {
        gas_price: "free".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        SigningClient::new(MockChain::new(0), FAUCET_ADDR, faucet(), &config),
        Err(ClientError::Config(_))
    ));
}

#[tokio::test]
async fn test_signer_changing_direct_doc_rejected() {
    let signer = ChainSwappingSigner { inner: faucet() };
    let client =
        SigningClient::new(MockChain::new(0), FAUCET_ADDR, signer, &ClientConfig::default()).unwrap();
    let msg = send_msg();
    let result = client
        .sign_and_broadcast_direct(
            &[&msg as &dyn ProtoMessage],
            &reference_fee(),
            "",
            &CancellationToken::new(),
        )
        .await;
    assert!(matches!(
        result,
        Err(ClientError::Wallet(WalletError::SignedDocMismatch))
    ));
    assert!(client.provider().broadcasts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_signer_changing_amino_doc_rejected() {
    let signer = ChainSwappingSigner { inner: faucet() };
    let client =
        SigningClient::new(MockChain::new(0), FAUCET_ADDR, signer, &ClientConfig::default()).unwrap();
    let result = client
        .send_tokens(TO_ADDR, vec![Coin::new("10", "ucosm")], "", &CancellationToken::new())
        .await;
    assert!(matches!(
        result,
        Err(ClientError::Wallet(WalletError::SignedDocMismatch))
    ));
    assert!(client.provider().broadcasts.lock().unwrap().is_empty());
}
