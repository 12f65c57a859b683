//! Nullable infrastructure for deterministic testing.
//!
//! The endorsement plugin's external collaborators (the identity
//! subsystem, the consultation service) are abstracted behind traits.
//! This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be scripted to fail at any step
//! - Record what they were asked, for assertions
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod consult;
pub mod identity;

pub use consult::NullConsultor;
pub use identity::{NullIdentityProvider, NullSigningIdentity};
