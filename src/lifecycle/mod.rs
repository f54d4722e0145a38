//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Load credentials → Validate networks → Resolver
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then credentials, then profiles
//! - Nothing touches the network during startup

pub mod startup;

pub use startup::bootstrap;
