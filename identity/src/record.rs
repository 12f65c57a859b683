//! The serialized form of a signing identity.

use attest_endorsement::IdentityError;
use attest_types::PublicKey;
use serde::{Deserialize, Serialize};

/// What an identity serializes to: the verification key plus the issuing
/// organization.
///
/// The bincode encoding of this record is deterministic, which matters
/// because the encoding is signed over (as part of `payload ‖ endorser`)
/// and re-derived by verifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub public_key: PublicKey,
    pub issuer: String,
}

impl IdentityRecord {
    pub fn new(public_key: PublicKey, issuer: &str) -> Self {
        Self {
            public_key,
            issuer: issuer.to_string(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, IdentityError> {
        bincode::serialize(self).map_err(|e| IdentityError::Serialization(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, IdentityError> {
        bincode::deserialize(bytes).map_err(|e| IdentityError::Serialization(e.to_string()))
    }
}
