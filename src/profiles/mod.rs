//! Network profile subsystem.
//!
//! # Data Flow
//! ```text
//! NetworkConfig (built-in table or TOML)
//!     + Arc<Credential>
//!     → types.rs (validate, render endpoint)
//!     → resolver.rs (name → NetworkProfile, name → ProviderFactory)
//! ```
//!
//! # Design Decisions
//! - Profiles are immutable value objects, built once at startup
//! - No inheritance between profiles; every field is set per network
//! - Wildcard chain ids are confined to local networks
//! - Endpoints render eagerly but only ever display redacted

pub mod builtin;
pub mod resolver;
pub mod types;

pub use resolver::NetworkProfileResolver;
pub use types::{AccountRange, Endpoint, NetworkProfile};
