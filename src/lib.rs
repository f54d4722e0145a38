//! Credential-backed network profile resolver for smart-contract tooling.

pub mod config;
pub mod credentials;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod profiles;
pub mod provider;

pub use config::schema::ResolverConfig;
pub use credentials::Credential;
pub use error::{ProviderError, ResolverError};
pub use profiles::{NetworkProfile, NetworkProfileResolver};
pub use provider::{ProviderFactory, SigningTransport};
