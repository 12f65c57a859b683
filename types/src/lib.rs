//! Fundamental types for the Attest endorsement toolkit.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: key material, signed proposals, and endorsements. It is
//! intentionally just data. Signing logic lives in `attest-crypto`, and
//! the endorsement contract in `attest-endorsement`.

pub mod endorsement;
pub mod keys;
pub mod proposal;

pub use endorsement::Endorsement;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use proposal::SignedProposal;
