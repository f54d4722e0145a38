//! Signing provider subsystem.
//!
//! # Data Flow
//! ```text
//! NetworkProfile + Arc<Credential>
//!     → factory.rs (ProviderFactory, built eagerly, invoked lazily)
//!     → mnemonic derivation → EthereumWallet
//!     → transport.rs (SigningTransport over alloy HTTP provider)
//! ```
//!
//! # Security Constraints
//! - Keys are derived only when a factory is invoked
//! - Never log keys, the mnemonic, or an unredacted endpoint
//! - All RPC calls made here carry a caller-supplied timeout

pub mod factory;
pub mod transport;

pub use factory::ProviderFactory;
pub use transport::SigningTransport;
