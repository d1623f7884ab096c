//! Client that signs with an offline signer and broadcasts through a
//! provider.

use std::sync::Arc;

use cosm_proto::cosmos::bank::v1beta1::MsgSend;
use cosm_proto::cosmos::base::v1beta1::Coin;
use cosm_proto::{ProtoMessage, Registry, TypedMessage};
use cosm_signing::amino::{self, AminoMsg, AminoTypes, StdFee, StdTx};
use cosm_signing::{direct, SignedTransaction, TxError};
use cosm_wallet::{
    check_amino_linkage, check_direct_linkage, OfflineAminoSigner, OfflineDirectSigner,
    WalletError,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::gas::FeeTable;
use crate::provider::{
    AccountQuery, BroadcastPayload, BroadcastTxResult, Broadcaster, ChainIdSource,
    SequenceResponse,
};

/// Signs transactions for one sender address and broadcasts them.
///
/// Each call looks up the account number, sequence and chain id afresh;
/// nothing is cached between calls.
pub struct SigningClient<S, P> {
    sender_address: String,
    signer: S,
    provider: P,
    registry: Arc<Registry>,
    amino_types: AminoTypes,
    fees: FeeTable,
}

impl<S, P> SigningClient<S, P>
where
    P: AccountQuery + ChainIdSource + Broadcaster,
{
    /// Create a client for `sender_address`.
    ///
    /// # Arguments
    /// * `provider` - Account lookup, chain id and broadcast.
    /// * `sender_address` - Address that signs and pays for transactions.
    /// * `signer` - Holds the key for `sender_address`.
    /// * `config` - Gas price and gas limits.
    ///
    /// # Returns
    /// The client, or `ClientError::Config` if the gas price is invalid.
    pub fn new(
        provider: P,
        sender_address: impl Into<String>,
        signer: S,
        config: &ClientConfig,
    ) -> Result<Self, ClientError> {
        Ok(SigningClient {
            sender_address: sender_address.into(),
            signer,
            provider,
            registry: Arc::new(Registry::with_defaults()),
            amino_types: AminoTypes::with_defaults(),
            fees: config.fee_table()?,
        })
    }

    /// Use `registry` to encode direct-mode message bodies.
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = registry;
        self
    }

    /// Use `amino_types` to convert messages for amino signing.
    pub fn with_amino_types(mut self, amino_types: AminoTypes) -> Self {
        self.amino_types = amino_types;
        self
    }

    pub fn sender_address(&self) -> &str {
        &self.sender_address
    }

    pub fn fees(&self) -> &FeeTable {
        &self.fees
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Account number and sequence of `address`, or of the sender if `None`.
    pub async fn get_sequence(&self, address: Option<&str>) -> Result<SequenceResponse, ClientError> {
        self.provider
            .get_sequence(address.unwrap_or(&self.sender_address))
            .await
    }

    async fn submit(&self, payload: BroadcastPayload) -> Result<BroadcastTxResult, ClientError> {
        let result = self.provider.broadcast(payload).await?;
        debug!(hash = %result.transaction_hash, "transaction accepted");
        Ok(result)
    }
}

// -----------------------------------------------------------------------
// Amino mode
// -----------------------------------------------------------------------

impl<S, P> SigningClient<S, P>
where
    S: OfflineAminoSigner,
    P: AccountQuery + ChainIdSource + Broadcaster,
{
    /// Build, sign and assemble a legacy amino transaction.
    ///
    /// # Arguments
    /// * `msgs` - Messages in amino JSON form.
    /// * `fee` - Fee coins and gas limit.
    /// * `memo` - Free text attached to the transaction.
    /// * `cancel` - Aborts a pending signature request.
    pub async fn sign_amino_tx(
        &self,
        msgs: Vec<AminoMsg>,
        fee: StdFee,
        memo: &str,
        cancel: &CancellationToken,
    ) -> Result<StdTx, ClientError> {
        let SequenceResponse {
            account_number,
            sequence,
        } = self.get_sequence(None).await?;
        let chain_id = self.provider.get_chain_id().await?;
        debug!(account_number, sequence, %chain_id, "signing amino transaction");

        let sign_doc = amino::make_sign_doc(msgs, fee, &chain_id, memo, account_number, sequence)?;
        let response = self
            .signer
            .sign_amino(&self.sender_address, sign_doc.clone(), cancel)
            .await?;
        check_amino_linkage(&sign_doc, &response)?;
        Ok(amino::make_std_tx(response.signed, response.signature))
    }

    /// Look up the sender's account, sign `msgs` in amino mode and broadcast.
    pub async fn sign_and_broadcast(
        &self,
        msgs: Vec<AminoMsg>,
        fee: StdFee,
        memo: &str,
        cancel: &CancellationToken,
    ) -> Result<BroadcastTxResult, ClientError> {
        let tx = self.sign_amino_tx(msgs, fee, memo, cancel).await?;
        self.submit(BroadcastPayload::Amino(tx)).await
    }

    /// Transfer `amount` from the sender to `recipient_address` using the
    /// fee table's send fee.
    pub async fn send_tokens(
        &self,
        recipient_address: &str,
        amount: Vec<Coin>,
        memo: &str,
        cancel: &CancellationToken,
    ) -> Result<BroadcastTxResult, ClientError> {
        let msg = MsgSend {
            from_address: self.sender_address.clone(),
            to_address: recipient_address.to_string(),
            amount,
        };
        let amino_msg = self.amino_types.to_amino(MsgSend::TYPE_URL, &msg)?;
        self.sign_and_broadcast(vec![amino_msg], self.fees.send.clone(), memo, cancel)
            .await
    }
}

// -----------------------------------------------------------------------
// Direct mode
// -----------------------------------------------------------------------

impl<S, P> SigningClient<S, P>
where
    S: OfflineDirectSigner,
    P: AccountQuery + ChainIdSource + Broadcaster,
{
    /// Build and sign a protobuf transaction.
    ///
    /// # Arguments
    /// * `messages` - Registered messages, packed under their own type URLs.
    /// * `fee` - Fee coins and gas limit.
    /// * `memo` - Free text attached to the transaction.
    /// * `cancel` - Aborts a pending signature request.
    ///
    /// # Returns
    /// The signed transaction, or the first error from lookup, encoding or
    /// signing.
    pub async fn sign_direct_tx(
        &self,
        messages: &[&dyn ProtoMessage],
        fee: &StdFee,
        memo: &str,
        cancel: &CancellationToken,
    ) -> Result<SignedTransaction, ClientError> {
        let accounts = OfflineDirectSigner::get_accounts(&self.signer).await?;
        let account = accounts
            .into_iter()
            .find(|a| a.address == self.sender_address)
            .ok_or_else(|| WalletError::AddressNotControlled(self.sender_address.clone()))?;

        let gas_limit: u64 = fee
            .gas
            .parse()
            .map_err(|_| TxError::Validation(format!("invalid gas limit {:?}", fee.gas)))?;
        let fee_amount: Vec<Coin> = fee.amount.iter().map(Into::into).collect();

        let SequenceResponse {
            account_number,
            sequence,
        } = self.get_sequence(None).await?;
        let chain_id = self.provider.get_chain_id().await?;
        debug!(account_number, sequence, %chain_id, "signing direct transaction");

        let body_bytes = self.registry.encode_tx_body(messages, memo)?;
        let auth_info_bytes = direct::make_auth_info_bytes(
            &[direct::encode_pubkey(&account.pubkey)],
            &fee_amount,
            gas_limit,
            sequence,
        )?;
        let sign_doc = direct::make_sign_doc(body_bytes, auth_info_bytes, &chain_id, account_number)?;

        let response = self
            .signer
            .sign_direct(&self.sender_address, sign_doc.clone(), cancel)
            .await?;
        check_direct_linkage(&sign_doc, &response)?;

        let (_, signature) = amino::decode_signature(&response.signature)?;
        Ok(SignedTransaction::new(
            response.signed.body_bytes,
            response.signed.auth_info_bytes,
            vec![signature.to_fixed().to_vec()],
        )?)
    }

    /// Look up the sender's account, sign `messages` in direct mode and
    /// broadcast the resulting `TxRaw`.
    pub async fn sign_and_broadcast_direct(
        &self,
        messages: &[&dyn ProtoMessage],
        fee: &StdFee,
        memo: &str,
        cancel: &CancellationToken,
    ) -> Result<BroadcastTxResult, ClientError> {
        let tx = self.sign_direct_tx(messages, fee, memo, cancel).await?;
        self.submit(BroadcastPayload::Protobuf(tx.to_bytes())).await
    }
}
