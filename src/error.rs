//! Error definitions shared across the resolver and provider layers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading credentials or resolving network profiles.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// A secret file is missing, unreadable, or empty. Fatal at startup.
    #[error("Credential unavailable at {}: {reason}", path.display())]
    CredentialUnavailable { path: PathBuf, reason: String },

    /// The requested environment is not in the profile mapping.
    #[error("Unknown environment '{name}' (available: {})", available.join(", "))]
    UnknownEnvironment { name: String, available: Vec<String> },

    /// A profile failed load-time validation.
    #[error("Invalid profile '{name}': {reason}")]
    InvalidProfile { name: String, reason: String },
}

/// Result type for resolver operations.
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Errors raised while building or using a signing transport.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Mnemonic derivation or signing failed.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// The profile endpoint could not be turned into a transport URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The remote node reports a different chain than the profile expects.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
