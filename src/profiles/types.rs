//! Profile value types.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;

pub use crate::config::schema::{ChainId, NetworkConfig, NetworkKind};
use crate::config::validation::{
    validate_api_key_for_url, validate_network, validate_rendered_endpoint, ValidationError,
    API_KEY_PLACEHOLDER,
};
use crate::credentials::Credential;
use crate::error::{ResolverError, ResolverResult};

/// A rendered RPC endpoint.
///
/// The rendered URL may embed the API key, so `Display`, `Debug` and
/// `Serialize` all show the redacted form. Use [`Endpoint::expose`] to get
/// the real URL.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    template: String,
    rendered: String,
}

impl Endpoint {
    /// Substitute the API key into `template`.
    pub fn render(template: &str, api_key: &str) -> Self {
        Self {
            template: template.to_string(),
            rendered: template.replace(API_KEY_PLACEHOLDER, api_key),
        }
    }

    /// The URL with the API key in place.
    pub fn expose(&self) -> &str {
        &self.rendered
    }

    /// The configured template, placeholder intact.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether the rendered URL carries the API key.
    pub fn embeds_api_key(&self) -> bool {
        self.template.contains(API_KEY_PLACEHOLDER)
    }

    /// The URL safe for logs.
    pub fn redacted(&self) -> String {
        self.template.replace(API_KEY_PLACEHOLDER, "***")
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Endpoint({})", self.redacted())
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.redacted())
    }
}

/// Consecutive HD derivation indices unlocked for a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountRange {
    pub start: u32,
    pub count: u32,
}

impl AccountRange {
    pub fn indices(&self) -> Range<u32> {
        self.start..self.start + self.count
    }
}

/// A fully populated, immutable connection profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    name: String,
    kind: NetworkKind,
    endpoint: Endpoint,
    chain_id: ChainId,
    gas_limit: u64,
    confirmations: u32,
    timeout_blocks: u32,
    skip_dry_run: bool,
    accounts: AccountRange,
}

impl NetworkProfile {
    /// Validate `network` and render it against `credential`.
    pub fn from_config(
        name: &str,
        network: &NetworkConfig,
        credential: &Credential,
    ) -> ResolverResult<Self> {
        if name.trim().is_empty() {
            return Err(ResolverError::InvalidProfile {
                name: name.to_string(),
                reason: "name must not be empty".to_string(),
            });
        }

        validate_network(network).map_err(|errors| ResolverError::InvalidProfile {
            name: name.to_string(),
            reason: errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        })?;

        let invalid = |e: ValidationError| ResolverError::InvalidProfile {
            name: name.to_string(),
            reason: e.to_string(),
        };

        let endpoint = Endpoint::render(&network.endpoint, credential.api_key());
        if endpoint.embeds_api_key() {
            validate_api_key_for_url(credential.api_key()).map_err(invalid)?;
        }
        validate_rendered_endpoint(endpoint.expose(), network.kind).map_err(invalid)?;

        Ok(Self {
            name: name.to_string(),
            kind: network.kind,
            endpoint,
            chain_id: network.chain_id,
            gas_limit: network.gas,
            confirmations: network.confirmations,
            timeout_blocks: network.timeout_blocks,
            skip_dry_run: network.skip_dry_run,
            accounts: AccountRange {
                start: network.address_index,
                count: network.num_addresses,
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NetworkKind {
        self.kind
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    /// Blocks required after inclusion; 0 means accept on inclusion.
    pub fn confirmations(&self) -> u32 {
        self.confirmations
    }

    /// 0 means the deployment tool's own default applies.
    pub fn timeout_blocks(&self) -> u32 {
        self.timeout_blocks
    }

    /// Carried for the deployment pipeline; not acted upon here.
    pub fn skip_dry_run(&self) -> bool {
        self.skip_dry_run
    }

    pub fn accounts(&self) -> AccountRange {
        self.accounts
    }
}
