//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → ResolverConfig (credential paths, logging, networks)
//!     → validation.rs (semantic checks, per network)
//!     → NetworkProfileResolver (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - Without a file, the built-in network table applies
//! - A `[networks]` table replaces the built-ins, it never merges with them
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ChainId, NetworkConfig, NetworkKind, ResolverConfig};
