//! Startup orchestration.
//!
//! # Responsibilities
//! - Load credentials once, eagerly
//! - Validate and register every configured network
//! - Hand back the immutable resolver that every consumer shares
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Credentials load before profiles so templates can render

use std::sync::Arc;

use crate::config::schema::ResolverConfig;
use crate::credentials::Credential;
use crate::error::ResolverResult;
use crate::profiles::NetworkProfileResolver;

/// Build the process resolver from configuration.
pub fn bootstrap(config: &ResolverConfig) -> ResolverResult<NetworkProfileResolver> {
    let credential = Credential::load(
        &config.credentials.mnemonic_path,
        &config.credentials.api_key_path,
    )?;

    let resolver = NetworkProfileResolver::new(Arc::new(credential), &config.networks)?;

    tracing::info!(
        networks = ?resolver.names().collect::<Vec<_>>(),
        "Resolver ready"
    );

    Ok(resolver)
}
