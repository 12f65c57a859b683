//! Pluggable transaction endorsement.
//!
//! An endorsement attests that a participant approves a proposed
//! transaction response: a signature over `payload ‖ serialized-identity`,
//! with the serialized identity doubling as the endorser reference.
//!
//! The pieces:
//! - [`Plugin`] / [`PluginFactory`]: the contract a host drives. A factory
//!   hands out fresh plugin instances; each instance is initialized once
//!   with its dependencies and then endorses any number of proposals.
//! - [`Dependency`]: the typed capabilities a host injects at `init` time.
//!   Plugins bind what they need and ignore the rest.
//! - [`DefaultEndorser`]: the stock plugin. Resolves a signing identity
//!   for the request, serializes it, and signs the payload concatenated
//!   with the identity bytes. Performs no I/O unless a consultor is bound.
//! - [`Consultor`]: an optional pre-signing consultation hook, invoked
//!   only when configured, bounded by a timeout, and isolated so its
//!   failure can never hang or crash the signing path.
//!
//! Identity resolution and signing are consumed through the
//! [`IdentityProvider`] and [`SigningIdentity`] traits; `attest-identity`
//! provides an Ed25519-backed implementation.

pub mod config;
pub mod consult;
pub mod default;
pub mod dependency;
pub mod error;
pub mod identity;
pub mod plugin;

pub use config::{ConfigError, EndorsementConfig};
pub use consult::{
    ConsultDecision, ConsultError, ConsultMode, ConsultRequest, Consultor, HttpConsultor,
};
pub use default::{DefaultEndorser, DefaultEndorserFactory};
pub use dependency::Dependency;
pub use error::EndorsementError;
pub use identity::{IdentityError, IdentityProvider, SigningIdentity};
pub use plugin::{Plugin, PluginFactory};
