//! Endorsement: a signature plus identity reference attesting approval of
//! a proposed transaction response.

use serde::{Deserialize, Serialize};

/// The result of endorsing a proposal response.
///
/// `signature` covers exactly `payload ‖ endorser`: the concatenation of
/// the (possibly rewritten) response payload and the serialized identity
/// that produced the signature. The serialized identity doubles as the
/// endorser reference, so a verifier can recover the signing key from
/// `endorser` alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endorsement {
    /// Signature over `payload ‖ endorser`.
    pub signature: Vec<u8>,
    /// Serialized identity of the endorsing participant.
    pub endorser: Vec<u8>,
}

impl Endorsement {
    /// Compose the exact message an endorsement signature covers.
    ///
    /// Both signers and verifiers go through this helper so the two sides
    /// can never drift apart on the concatenation.
    pub fn message_for(payload: &[u8], endorser: &[u8]) -> Vec<u8> {
        let mut message = Vec::with_capacity(payload.len() + endorser.len());
        message.extend_from_slice(payload);
        message.extend_from_slice(endorser);
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_payload_then_endorser() {
        let msg = Endorsement::message_for(b"resp", b"id");
        assert_eq!(msg, b"respid");
    }

    #[test]
    fn message_for_empty_payload() {
        let msg = Endorsement::message_for(b"", b"id");
        assert_eq!(msg, b"id");
    }

    #[test]
    fn endorsement_bincode_roundtrip() {
        let e = Endorsement {
            signature: vec![1, 2, 3],
            endorser: vec![4, 5],
        };
        let bytes = bincode::serialize(&e).unwrap();
        let back: Endorsement = bincode::deserialize(&bytes).unwrap();
        assert_eq!(e, back);
    }
}
