//! Deferred construction of signing transports.
//!
//! # Security
//! - The factory holds the shared credential, never a copy of its own
//! - Derived keys live only inside the transport it builds
//! - Nothing here logs secret material

use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::coins_bip39::English;
use alloy::signers::local::{MnemonicBuilder, PrivateKeySigner};
use alloy::signers::Signer;
use std::sync::Arc;

use crate::credentials::Credential;
use crate::error::{ProviderError, ProviderResult};
use crate::profiles::NetworkProfile;
use crate::provider::transport::SigningTransport;

/// Binds one profile to the process credential. Invoke [`ProviderFactory::build`]
/// only when the network is actually selected.
#[derive(Clone)]
pub struct ProviderFactory {
    credential: Arc<Credential>,
    profile: NetworkProfile,
}

impl ProviderFactory {
    /// Only the resolver mints factories, so every one shares its credential.
    pub(crate) fn new(credential: Arc<Credential>, profile: NetworkProfile) -> Self {
        Self {
            credential,
            profile,
        }
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    pub fn credential(&self) -> &Arc<Credential> {
        &self.credential
    }

    /// Whether both factories close over the same credential instance.
    pub fn shares_credential(&self, other: &ProviderFactory) -> bool {
        Arc::ptr_eq(&self.credential, &other.credential)
    }

    /// Derive the profile's accounts from the mnemonic on `m/44'/60'/0'/0/i`.
    ///
    /// Signers carry the profile's concrete chain id for EIP-155; wildcard
    /// profiles leave it unset.
    pub fn derive_signers(&self) -> ProviderResult<Vec<PrivateKeySigner>> {
        let range = self.profile.accounts();
        let chain_id = self.profile.chain_id().concrete();

        range
            .indices()
            .map(|index| -> ProviderResult<PrivateKeySigner> {
                let signer = MnemonicBuilder::<English>::default()
                    .phrase(self.credential.mnemonic())
                    .index(index)
                    .map_err(|e| {
                        ProviderError::Wallet(format!("Invalid derivation index {}: {}", index, e))
                    })?
                    .build()
                    .map_err(|e| {
                        ProviderError::Wallet(format!("Mnemonic derivation failed: {}", e))
                    })?;
                Ok(signer.with_chain_id(chain_id))
            })
            .collect()
    }

    /// Build the signing transport. Performs key derivation but no network
    /// traffic; the HTTP connection is established on first request.
    pub fn build(&self) -> ProviderResult<SigningTransport> {
        let url: url::Url = self.profile.endpoint().expose().parse().map_err(|e| {
            ProviderError::InvalidEndpoint(format!("'{}': {}", self.profile.endpoint(), e))
        })?;

        let signers = self.derive_signers()?;
        let (first, rest) = signers
            .split_first()
            .ok_or_else(|| ProviderError::Wallet("No accounts to unlock".to_string()))?;

        let mut wallet = EthereumWallet::from(first.clone());
        for signer in rest {
            wallet.register_signer(signer.clone());
        }

        let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

        tracing::info!(
            network = self.profile.name(),
            endpoint = %self.profile.endpoint(),
            chain_id = %self.profile.chain_id(),
            accounts = signers.len(),
            default_account = %first.address(),
            "Signing transport built"
        );

        Ok(SigningTransport::new(
            self.profile.clone(),
            Arc::new(provider) as Arc<dyn Provider + Send + Sync>,
            signers,
        ))
    }
}

impl std::fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderFactory")
            .field("network", &self.profile.name())
            .field("endpoint", &self.profile.endpoint().redacted())
            .field("chain_id", &self.profile.chain_id())
            .finish()
    }
}
