//! Signing transport produced by a [`ProviderFactory`](crate::provider::ProviderFactory).
//!
//! # Responsibilities
//! - Expose the wallet-filled RPC provider to callers
//! - Report the unlocked accounts
//! - Sign messages with any unlocked account
//! - Verify the remote chain id against the profile, with a timeout

use alloy::primitives::Address;
use alloy::providers::Provider;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signature, Signer};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::error::{ProviderError, ProviderResult};
use crate::profiles::NetworkProfile;

/// A wallet-backed RPC transport bound to one network profile.
#[derive(Clone)]
pub struct SigningTransport {
    profile: NetworkProfile,
    provider: Arc<dyn Provider + Send + Sync>,
    signers: Vec<PrivateKeySigner>,
}

impl SigningTransport {
    pub(crate) fn new(
        profile: NetworkProfile,
        provider: Arc<dyn Provider + Send + Sync>,
        signers: Vec<PrivateKeySigner>,
    ) -> Self {
        Self {
            profile,
            provider,
            signers,
        }
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    /// The underlying provider. Transactions sent through it are signed by
    /// the unlocked accounts.
    pub fn provider(&self) -> &(dyn Provider + Send + Sync) {
        self.provider.as_ref()
    }

    /// Unlocked accounts in derivation order.
    pub fn accounts(&self) -> Vec<Address> {
        self.signers.iter().map(|s| s.address()).collect()
    }

    /// The first unlocked account, used as the default sender.
    pub fn default_account(&self) -> Address {
        // Factories never build a transport without at least one signer.
        self.signers[0].address()
    }

    /// Sign arbitrary message bytes (with Ethereum prefix).
    pub async fn sign_message(&self, account: Address, message: &[u8]) -> ProviderResult<Signature> {
        let signer = self
            .signers
            .iter()
            .find(|s| s.address() == account)
            .ok_or_else(|| ProviderError::Wallet(format!("Account {} is not unlocked", account)))?;

        signer
            .sign_message(message)
            .await
            .map_err(|e| ProviderError::Wallet(format!("Message signing failed: {}", e)))
    }

    /// Query the node for its chain id.
    pub async fn remote_chain_id(&self, wait: Duration) -> ProviderResult<u64> {
        match timeout(wait, self.provider.get_chain_id()).await {
            Ok(Ok(id)) => Ok(id),
            Ok(Err(e)) => Err(ProviderError::Rpc(e.to_string())),
            Err(_) => Err(ProviderError::Timeout(wait.as_secs())),
        }
    }

    /// Check that the node serves the chain this profile expects.
    ///
    /// Returns the remote chain id. Wildcard profiles accept any id.
    pub async fn verify_chain_id(&self, wait: Duration) -> ProviderResult<u64> {
        let actual = self.remote_chain_id(wait).await?;
        let expected = self.profile.chain_id();

        if !expected.accepts(actual) {
            tracing::warn!(
                network = self.profile.name(),
                expected = %expected,
                actual,
                "Chain ID mismatch"
            );
            return Err(ProviderError::ChainMismatch {
                expected: expected.concrete().unwrap_or_default(),
                actual,
            });
        }

        tracing::info!(network = self.profile.name(), chain_id = actual, "Chain ID verified");
        Ok(actual)
    }
}

impl std::fmt::Debug for SigningTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningTransport")
            .field("network", &self.profile.name())
            .field("endpoint", &self.profile.endpoint().redacted())
            .field("accounts", &self.accounts())
            .finish()
    }
}
