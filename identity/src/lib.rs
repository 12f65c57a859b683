//! Ed25519-backed signing identities for the endorsement plugin, plus
//! endorsement verification.
//!
//! `attest-endorsement` consumes identities through traits; this crate is
//! the concrete implementation a single-key endorser deploys. An identity
//! serializes to an [`IdentityRecord`] (public key + issuer), and that
//! record is what lands in `Endorsement::endorser`, so verifiers can
//! recover the signing key from the endorsement alone.

pub mod provider;
pub mod record;
pub mod verify;

pub use provider::{LocalIdentity, LocalIdentityProvider};
pub use record::IdentityRecord;
pub use verify::verify_endorsement;
