//! Identity interfaces consumed by endorsement plugins.
//!
//! The membership subsystem that resolves and validates signing identities
//! is an external collaborator; these traits pin down the only surface the
//! endorsement core relies on. `attest-identity` ships an Ed25519-backed
//! implementation, and `attest-nullables` a deterministic test double.

use attest_types::SignedProposal;
use thiserror::Error;

/// A capability object able to serialize itself and produce signatures
/// with an associated private key.
pub trait SigningIdentity {
    /// Deterministic encoding of this identity. The encoding doubles as
    /// the endorser reference inside an endorsement.
    fn serialize(&self) -> Result<Vec<u8>, IdentityError>;

    /// Sign a message with this identity's private key.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, IdentityError>;
}

/// Resolves the signing identity that serves a given request.
///
/// Implementations must be safe for concurrent use: one bound provider
/// serves every `endorse` call on a plugin instance.
pub trait IdentityProvider: Send + Sync {
    /// Resolve a signing identity for the given proposal.
    fn signing_identity_for_request(
        &self,
        proposal: &SignedProposal,
    ) -> Result<Box<dyn SigningIdentity>, IdentityError>;
}

/// Failures of the identity subsystem, as seen through the traits above.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity resolution failed: {0}")]
    Resolution(String),

    #[error("identity serialization failed: {0}")]
    Serialization(String),

    #[error("signing failed: {0}")]
    Signing(String),
}
