//! Network definition validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject wildcard chain ids on public networks
//! - Validate value ranges (gas > 0, at least one account)
//! - Check that the endpoint renders to a usable URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: NetworkConfig → Result<(), Vec<ValidationError>>
//! - Runs before a profile is accepted into the resolver

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use url::{Host, Url};

use crate::config::schema::{ChainId, NetworkConfig, NetworkKind};

/// Placeholder replaced with the API key when an endpoint is rendered.
pub const API_KEY_PLACEHOLDER: &str = "{api_key}";

/// A single failed check on a network definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Largest number of accounts a single network may unlock. Each account
/// costs one seed derivation when a factory is invoked.
pub const MAX_ACCOUNTS: u32 = 1000;

/// First hardened child index. Derivation ranges on `m/44'/60'/0'/0/i` must
/// stay below it.
pub const HARDENED_OFFSET: u32 = 1 << 31;

/// Validate one network definition.
pub fn validate_network(network: &NetworkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match (network.kind, network.chain_id) {
        (NetworkKind::Public, ChainId::Any) => errors.push(ValidationError::new(
            "chain_id",
            "public networks require a concrete chain id",
        )),
        (_, ChainId::Id(0)) => errors.push(ValidationError::new("chain_id", "must be non-zero")),
        _ => {}
    }

    if network.gas == 0 {
        errors.push(ValidationError::new("gas", "must be greater than zero"));
    }

    if let Err(e) = validate_account_range(network.address_index, network.num_addresses) {
        errors.push(e);
    }

    if let Err(e) = validate_endpoint(&network.endpoint, network.kind) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_account_range(start: u32, count: u32) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::new("num_addresses", "must be at least 1"));
    }
    if count > MAX_ACCOUNTS {
        return Err(ValidationError::new(
            "num_addresses",
            format!("must be at most {}", MAX_ACCOUNTS),
        ));
    }
    match start.checked_add(count) {
        None => Err(ValidationError::new("address_index", "derivation range overflows")),
        Some(end) if end > HARDENED_OFFSET => Err(ValidationError::new(
            "address_index",
            format!("derivation range must end at or below {}", HARDENED_OFFSET),
        )),
        Some(_) => Ok(()),
    }
}

fn validate_endpoint(template: &str, kind: NetworkKind) -> Result<(), ValidationError> {
    if template.trim().is_empty() {
        return Err(ValidationError::new("endpoint", "must not be empty"));
    }

    let stripped = template.replace(API_KEY_PLACEHOLDER, "");
    if stripped.contains('{') || stripped.contains('}') {
        return Err(ValidationError::new(
            "endpoint",
            format!("only the {} placeholder is supported", API_KEY_PLACEHOLDER),
        ));
    }

    if placeholder_in_authority(template) {
        return Err(ValidationError::new(
            "endpoint",
            format!("{} may only appear in the path or query", API_KEY_PLACEHOLDER),
        ));
    }

    validate_rendered_endpoint(&template.replace(API_KEY_PLACEHOLDER, "key"), kind)
}

/// Check a fully rendered endpoint URL.
///
/// Messages name only the scheme or host, never the full URL.
pub fn validate_rendered_endpoint(rendered: &str, kind: NetworkKind) -> Result<(), ValidationError> {
    let url = Url::parse(rendered)
        .map_err(|e| ValidationError::new("endpoint", format!("not a valid URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ValidationError::new(
            "endpoint",
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    let host = url
        .host()
        .ok_or_else(|| ValidationError::new("endpoint", "missing host"))?;

    if kind == NetworkKind::Local && !is_loopback(&host) {
        return Err(ValidationError::new(
            "endpoint",
            format!("local networks must point at a loopback host, got '{}'", host),
        ));
    }

    Ok(())
}

/// Reject API keys that would change the shape of the URL they are
/// substituted into.
pub fn validate_api_key_for_url(api_key: &str) -> Result<(), ValidationError> {
    if api_key
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@' | ':'))
    {
        return Err(ValidationError::new(
            "api_key",
            "contains characters not allowed in an endpoint URL",
        ));
    }
    Ok(())
}

fn placeholder_in_authority(template: &str) -> bool {
    let Some(pos) = template.find(API_KEY_PLACEHOLDER) else {
        return false;
    };
    let authority_start = template.find("://").map(|i| i + 3).unwrap_or(0);
    let authority_end = template[authority_start..]
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .map(|i| authority_start + i)
        .unwrap_or(template.len());
    pos < authority_end
}

fn is_loopback(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(domain) => domain.eq_ignore_ascii_case("localhost"),
        Host::Ipv4(addr) => addr.is_loopback() || *addr == Ipv4Addr::UNSPECIFIED,
        Host::Ipv6(addr) => addr.is_loopback() || *addr == Ipv6Addr::UNSPECIFIED,
    }
}
