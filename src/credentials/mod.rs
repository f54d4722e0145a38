//! Credential subsystem.
//!
//! # Data Flow
//! ```text
//! mnemonic file + API key file (plain text, local)
//!     → credential.rs (read, trim, reject empty)
//!     → Arc<Credential> (immutable, one per process)
//!     → shared by the resolver and every ProviderFactory
//! ```
//!
//! # Security Constraints
//! - Secrets come ONLY from the two local files
//! - Never log or serialize secret material
//! - Memory holding secrets is zeroed on drop

pub mod credential;

pub use credential::Credential;
