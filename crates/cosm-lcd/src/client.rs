//! LCD HTTP client for account lookup and transaction broadcast.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use cosm_client::{
    AccountQuery, BroadcastPayload, BroadcastTxResult, Broadcaster, ChainIdSource, ClientError,
    SequenceResponse,
};
use cosm_signing::amino::StdTx;

use crate::error::LcdError;
use crate::types::{
    AccountResponse, BaseAccount, BroadcastTxRequest, BroadcastTxResponse, LcdConfig,
    NodeInfoResponse, PostTxsRequest, TxResponse,
};

/// HTTP client for a node's REST (LCD) API.
#[derive(Debug, Clone)]
pub struct LcdClient {
    /// Client configuration.
    config: LcdConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl LcdClient {
    /// Create a new LCD client with the given configuration.
    ///
    /// # Returns
    /// The client, or `LcdError::Http` if the HTTP client cannot be built.
    pub fn new(config: LcdConfig) -> Result<Self, LcdError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &LcdConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Fetch the account at `address`.
    ///
    /// # Returns
    /// `Ok(None)` if the node does not know the account.
    pub async fn get_account(&self, address: &str) -> Result<Option<BaseAccount>, LcdError> {
        let resp = self
            .client
            .get(self.url(&format!("/auth/accounts/{}", address)))
            .send()
            .await?;
        let response: AccountResponse = read_json(resp).await?;
        let account = response.result.value;
        if account.address.is_empty() {
            return Ok(None);
        }
        Ok(Some(account))
    }

    /// Network identifier reported by `/node_info`.
    pub async fn chain_id(&self) -> Result<String, LcdError> {
        let resp = self.client.get(self.url("/node_info")).send().await?;
        let response: NodeInfoResponse = read_json(resp).await?;
        Ok(response.node_info.network)
    }

    /// Broadcast a legacy amino transaction to `POST /txs`.
    pub async fn broadcast_amino(&self, tx: &StdTx) -> Result<TxResponse, LcdError> {
        let body = PostTxsRequest {
            tx,
            mode: self.config.broadcast_mode,
        };
        let resp = self.client.post(self.url("/txs")).json(&body).send().await?;
        let response: TxResponse = read_json(resp).await?;
        check_code(response)
    }

    /// Broadcast a serialized `TxRaw` to `POST /cosmos/tx/v1beta1/txs`.
    pub async fn broadcast_tx_bytes(&self, tx_bytes: &[u8]) -> Result<TxResponse, LcdError> {
        let body = BroadcastTxRequest {
            tx_bytes: BASE64.encode(tx_bytes),
            mode: self.config.broadcast_mode.as_proto_mode(),
        };
        let resp = self
            .client
            .post(self.url("/cosmos/tx/v1beta1/txs"))
            .json(&body)
            .send()
            .await?;
        let response: BroadcastTxResponse = read_json(resp).await?;
        check_code(response.tx_response)
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, LcdError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(LcdError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

fn check_code(response: TxResponse) -> Result<TxResponse, LcdError> {
    if response.code != 0 {
        return Err(LcdError::Rejected {
            code: response.code,
            description: response
                .raw_log
                .unwrap_or_else(|| "rejected".to_string()),
        });
    }
    Ok(response)
}

// -----------------------------------------------------------------------
// Client collaborator traits
// -----------------------------------------------------------------------

impl AccountQuery for LcdClient {
    async fn get_sequence(&self, address: &str) -> Result<SequenceResponse, ClientError> {
        match self.get_account(address).await? {
            Some(account) => Ok(SequenceResponse {
                account_number: account.account_number,
                sequence: account.sequence,
            }),
            None => Err(ClientError::Query(format!(
                "account does not exist on chain: {}",
                address
            ))),
        }
    }
}

impl ChainIdSource for LcdClient {
    async fn get_chain_id(&self) -> Result<String, ClientError> {
        Ok(self.chain_id().await?)
    }
}

impl Broadcaster for LcdClient {
    async fn broadcast(&self, payload: BroadcastPayload) -> Result<BroadcastTxResult, ClientError> {
        let result = match &payload {
            BroadcastPayload::Amino(tx) => self.broadcast_amino(tx).await,
            BroadcastPayload::Protobuf(bytes) => self.broadcast_tx_bytes(bytes).await,
        };
        match result {
            Ok(resp) => {
                debug!(hash = %resp.txhash, height = ?resp.height, "broadcast accepted");
                Ok(BroadcastTxResult {
                    transaction_hash: resp.txhash,
                    height: resp.height,
                    raw_log: resp.raw_log,
                })
            }
            Err(e) => {
                warn!(error = %e, "broadcast failed");
                Err(e.into())
            }
        }
    }
}
