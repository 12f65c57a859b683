//! Signed proposal: a client's request for endorsement of a transaction.

use serde::{Deserialize, Serialize};

/// A client's signed request for endorsement.
///
/// The proposal bytes are opaque to the endorsement core; their envelope
/// format belongs to the host. The signature identifies who is asking, and
/// identity providers use it to decide which signing identity serves the
/// request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedProposal {
    /// Serialized proposal envelope.
    pub proposal_bytes: Vec<u8>,
    /// Client signature over the proposal bytes.
    pub signature: Vec<u8>,
}

impl SignedProposal {
    pub fn new(proposal_bytes: Vec<u8>, signature: Vec<u8>) -> Self {
        Self {
            proposal_bytes,
            signature,
        }
    }
}
