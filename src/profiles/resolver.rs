//! Name → profile resolution.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::credentials::Credential;
use crate::error::{ResolverError, ResolverResult};
use crate::profiles::builtin::builtin_networks;
use crate::profiles::types::{NetworkConfig, NetworkProfile};
use crate::provider::ProviderFactory;

/// Fixed mapping of environment names to validated profiles, bound to the
/// process credential.
#[derive(Debug, Clone)]
pub struct NetworkProfileResolver {
    credential: Arc<Credential>,
    profiles: BTreeMap<String, NetworkProfile>,
}

impl NetworkProfileResolver {
    /// Validate and render every network in `networks`.
    ///
    /// Fails with [`ResolverError::InvalidProfile`] on the first network that
    /// does not pass validation; no partially built resolver is returned.
    pub fn new(
        credential: Arc<Credential>,
        networks: &BTreeMap<String, NetworkConfig>,
    ) -> ResolverResult<Self> {
        let profiles = networks
            .iter()
            .map(|(name, network)| {
                NetworkProfile::from_config(name, network, &credential)
                    .map(|profile| (name.clone(), profile))
            })
            .collect::<ResolverResult<BTreeMap<_, _>>>()?;

        if profiles.is_empty() {
            tracing::warn!("No networks configured; every lookup will fail");
        }

        for profile in profiles.values() {
            tracing::debug!(
                network = profile.name(),
                kind = %profile.kind(),
                endpoint = %profile.endpoint(),
                chain_id = %profile.chain_id(),
                gas = profile.gas_limit(),
                "Network profile registered"
            );
        }

        Ok(Self {
            credential,
            profiles,
        })
    }

    /// Resolver over the built-in `rinkeby` and `development` networks.
    pub fn with_builtin_profiles(credential: Arc<Credential>) -> ResolverResult<Self> {
        Self::new(credential, &builtin_networks())
    }

    /// Look up a profile by name.
    pub fn resolve(&self, name: &str) -> ResolverResult<NetworkProfile> {
        self.lookup(name).cloned()
    }

    /// Factory for a signing transport on the named network. Cheap; performs
    /// no I/O until [`ProviderFactory::build`] is called.
    pub fn provider(&self, name: &str) -> ResolverResult<ProviderFactory> {
        let profile = self.lookup(name)?;
        Ok(ProviderFactory::new(
            Arc::clone(&self.credential),
            profile.clone(),
        ))
    }

    /// Configured names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &NetworkProfile> {
        self.profiles.values()
    }

    pub fn credential(&self) -> &Arc<Credential> {
        &self.credential
    }

    fn lookup(&self, name: &str) -> ResolverResult<&NetworkProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ResolverError::UnknownEnvironment {
                name: name.to_string(),
                available: self.profiles.keys().cloned().collect(),
            })
    }
}
