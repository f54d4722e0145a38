//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the resolver.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::credentials::credential::{DEFAULT_API_KEY_PATH, DEFAULT_MNEMONIC_PATH};
use crate::profiles::builtin::builtin_networks;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Where the two secret files live.
    pub credentials: CredentialsConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Named network definitions. A `[networks]` table in the file replaces
    /// the built-in mapping as a whole.
    pub networks: BTreeMap<String, NetworkConfig>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            credentials: CredentialsConfig::default(),
            observability: ObservabilityConfig::default(),
            networks: builtin_networks(),
        }
    }
}

/// Secret file locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// File holding the mnemonic phrase.
    pub mnemonic_path: PathBuf,

    /// File holding the RPC provider API key.
    pub api_key_path: PathBuf,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            mnemonic_path: PathBuf::from(DEFAULT_MNEMONIC_PATH),
            api_key_path: PathBuf::from(DEFAULT_API_KEY_PATH),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format for log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Whether a network is a shared public chain or a local development node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Public,
    Local,
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkKind::Public => f.pad("public"),
            NetworkKind::Local => f.pad("local"),
        }
    }
}

/// Chain ID of a network, or the wildcard `*` accepting any chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "RawChainId", into = "RawChainId")]
pub enum ChainId {
    Any,
    Id(u64),
}

impl ChainId {
    /// The concrete chain id, if any.
    pub fn concrete(&self) -> Option<u64> {
        match self {
            ChainId::Any => None,
            ChainId::Id(id) => Some(*id),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, ChainId::Any)
    }

    /// Whether a chain reporting `actual` satisfies this id.
    pub fn accepts(&self, actual: u64) -> bool {
        match self {
            ChainId::Any => true,
            ChainId::Id(id) => *id == actual,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainId::Any => f.write_str("*"),
            ChainId::Id(id) => write!(f, "{}", id),
        }
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        ChainId::Id(id)
    }
}

/// On-disk form of a chain id: an integer or the string `"*"`.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum RawChainId {
    Id(u64),
    Text(String),
}

impl TryFrom<RawChainId> for ChainId {
    type Error = String;

    fn try_from(raw: RawChainId) -> Result<Self, Self::Error> {
        match raw {
            RawChainId::Id(id) => Ok(ChainId::Id(id)),
            RawChainId::Text(text) if text.trim() == "*" => Ok(ChainId::Any),
            RawChainId::Text(text) => text
                .trim()
                .parse::<u64>()
                .map(ChainId::Id)
                .map_err(|_| format!("chain_id must be an integer or \"*\", got \"{}\"", text)),
        }
    }
}

impl From<ChainId> for RawChainId {
    fn from(id: ChainId) -> Self {
        match id {
            ChainId::Any => RawChainId::Text("*".to_string()),
            ChainId::Id(id) => RawChainId::Id(id),
        }
    }
}

/// A single named network as written in configuration.
///
/// Connection policy fields have no implicit fallbacks: `kind`, `endpoint`,
/// `chain_id` and `gas` are required for every network. The remaining
/// fields carry explicit, documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Public chain or local development node.
    pub kind: NetworkKind,

    /// Endpoint URL. May contain the `{api_key}` placeholder.
    pub endpoint: String,

    /// Expected chain id, or `"*"` for local networks.
    pub chain_id: ChainId,

    /// Gas ceiling for deployment transactions.
    pub gas: u64,

    /// Blocks to wait after inclusion. 0 accepts a transaction on inclusion.
    #[serde(default)]
    pub confirmations: u32,

    /// Blocks to wait before a deployment is declared stuck. 0 defers to
    /// the deployment tool's own default.
    #[serde(default)]
    pub timeout_blocks: u32,

    /// Ask the deployment pipeline to skip its simulated pass.
    #[serde(default)]
    pub skip_dry_run: bool,

    /// First HD derivation index to unlock.
    #[serde(default)]
    pub address_index: u32,

    /// Number of consecutive accounts to unlock.
    #[serde(default = "default_num_addresses")]
    pub num_addresses: u32,
}

fn default_num_addresses() -> u32 {
    1
}
