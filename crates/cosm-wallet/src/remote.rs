//! Signer that delegates to an external agent.
//!
//! Requests are handed to the agent over a bounded channel as
//! [`PendingRequest`]s. The agent answers each one exactly once with
//! [`PendingRequest::approve`] or [`PendingRequest::reject`]; dropping a
//! request unanswered surfaces as `WalletError::Unavailable`. A request
//! ends with the first of: the agent's answer, cancellation, or the
//! configured timeout. Nothing is retried.

use std::time::Duration;

use cosm_proto::cosmos::tx::v1beta1::SignDoc;
use cosm_signing::amino::StdSignDoc;
use serde::Deserialize;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::WalletError;
use crate::signer::{
    check_amino_linkage, check_direct_linkage, AccountData, AminoSignResponse, DirectSignResponse,
    OfflineAminoSigner, OfflineDirectSigner,
};

/// Configuration for [`RemoteSigner`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteSignerConfig {
    /// How long to wait for the agent, in milliseconds.
    pub timeout_ms: u64,
    /// Requests that may queue before senders wait.
    pub channel_capacity: usize,
}

impl Default for RemoteSignerConfig {
    fn default() -> Self {
        RemoteSignerConfig {
            timeout_ms: 120_000,
            channel_capacity: 16,
        }
    }
}

impl RemoteSignerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// What the agent is asked to sign.
#[derive(Clone, Debug, PartialEq)]
pub enum SignRequest {
    Direct { signer_address: String, sign_doc: SignDoc },
    Amino { signer_address: String, sign_doc: StdSignDoc },
}

impl SignRequest {
    pub fn signer_address(&self) -> &str {
        match self {
            SignRequest::Direct { signer_address, .. } => signer_address,
            SignRequest::Amino { signer_address, .. } => signer_address,
        }
    }
}

/// The agent's answer to an approved request.
#[derive(Clone, Debug, PartialEq)]
pub enum SignReply {
    Direct(DirectSignResponse),
    Amino(AminoSignResponse),
}

/// A request waiting for the agent's decision.
#[derive(Debug)]
pub struct PendingRequest {
    request: SignRequest,
    reply: oneshot::Sender<Result<SignReply, String>>,
}

impl PendingRequest {
    pub fn request(&self) -> &SignRequest {
        &self.request
    }

    /// Answer with a signature. Ignored if the requester already gave up.
    pub fn approve(self, reply: SignReply) {
        let _ = self.reply.send(Ok(reply));
    }

    /// Decline the request.
    pub fn reject(self, reason: impl Into<String>) {
        let _ = self.reply.send(Err(reason.into()));
    }
}

/// A signer whose keys live with an external agent.
#[derive(Clone, Debug)]
pub struct RemoteSigner {
    accounts: Vec<AccountData>,
    requests: mpsc::Sender<PendingRequest>,
    config: RemoteSignerConfig,
}

impl RemoteSigner {
    /// Create a signer for `accounts` and the receiving end the agent reads.
    ///
    /// # Arguments
    /// * `accounts` - Accounts the agent controls.
    /// * `config` - Timeout and channel capacity.
    ///
    /// # Returns
    /// The signer and the agent's request queue.
    pub fn new(
        accounts: Vec<AccountData>,
        config: RemoteSignerConfig,
    ) -> (Self, mpsc::Receiver<PendingRequest>) {
        let (requests, rx) = mpsc::channel(config.channel_capacity.max(1));
        (
            RemoteSigner {
                accounts,
                requests,
                config,
            },
            rx,
        )
    }

    fn ensure_controlled(&self, address: &str) -> Result<(), WalletError> {
        if self.accounts.iter().any(|a| a.address == address) {
            Ok(())
        } else {
            Err(WalletError::AddressNotControlled(address.to_string()))
        }
    }

    /// Send `request` to the agent and wait for its answer.
    async fn round_trip(
        &self,
        request: SignRequest,
        cancel: &CancellationToken,
    ) -> Result<SignReply, WalletError> {
        if cancel.is_cancelled() {
            return Err(WalletError::Cancelled);
        }
        let timeout = self.config.timeout();
        let address = request.signer_address().to_string();
        let (reply_tx, reply_rx) = oneshot::channel();
        let pending = PendingRequest {
            request,
            reply: reply_tx,
        };

        let exchange = async {
            self.requests
                .send(pending)
                .await
                .map_err(|_| WalletError::Unavailable("agent is not listening".to_string()))?;
            debug!(address = %address, "waiting for remote signer");
            match reply_rx.await {
                Ok(Ok(reply)) => Ok(reply),
                Ok(Err(reason)) => Err(WalletError::Rejected(reason)),
                Err(_) => Err(WalletError::Unavailable(
                    "agent dropped the request".to_string(),
                )),
            }
        };

        let result = tokio::select! {
            _ = cancel.cancelled() => Err(WalletError::Cancelled),
            _ = tokio::time::sleep(timeout) => Err(WalletError::TimedOut(timeout)),
            result = exchange => result,
        };
        if let Err(e) = &result {
            warn!(address = %address, error = %e, "remote signing failed");
        }
        result
    }
}

impl OfflineDirectSigner for RemoteSigner {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        Ok(self.accounts.clone())
    }

    async fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: SignDoc,
        cancel: &CancellationToken,
    ) -> Result<DirectSignResponse, WalletError> {
        self.ensure_controlled(signer_address)?;
        let request = SignRequest::Direct {
            signer_address: signer_address.to_string(),
            sign_doc: sign_doc.clone(),
        };
        match self.round_trip(request, cancel).await? {
            SignReply::Direct(response) => {
                check_direct_linkage(&sign_doc, &response)?;
                Ok(response)
            }
            SignReply::Amino(_) => Err(WalletError::Unavailable(
                "agent answered a direct request in amino mode".to_string(),
            )),
        }
    }
}

impl OfflineAminoSigner for RemoteSigner {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        Ok(self.accounts.clone())
    }

    async fn sign_amino(
        &self,
        signer_address: &str,
        sign_doc: StdSignDoc,
        cancel: &CancellationToken,
    ) -> Result<AminoSignResponse, WalletError> {
        self.ensure_controlled(signer_address)?;
        let request = SignRequest::Amino {
            signer_address: signer_address.to_string(),
            sign_doc: sign_doc.clone(),
        };
        match self.round_trip(request, cancel).await? {
            SignReply::Amino(response) => {
                check_amino_linkage(&sign_doc, &response)?;
                Ok(response)
            }
            SignReply::Direct(_) => Err(WalletError::Unavailable(
                "agent answered an amino request in direct mode".to_string(),
            )),
        }
    }
}
