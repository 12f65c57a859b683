//! Endorsement verification.

use crate::record::IdentityRecord;
use attest_crypto::verify_signature;
use attest_endorsement::IdentityError;
use attest_types::{Endorsement, Signature};

/// Check an endorsement against the payload it claims to endorse.
///
/// The endorser bytes are decoded back into an [`IdentityRecord`] and the
/// signature is verified over `payload ‖ endorser` with the recovered
/// public key. Returns `Ok(false)` for a wrong-length or invalid
/// signature; an endorser record that does not decode is an error, since
/// it means the endorsement could not have been produced by this scheme.
pub fn verify_endorsement(
    endorsement: &Endorsement,
    payload: &[u8],
) -> Result<bool, IdentityError> {
    let record = IdentityRecord::decode(&endorsement.endorser)?;
    let Some(signature) = Signature::from_slice(&endorsement.signature) else {
        return Ok(false);
    };
    let message = Endorsement::message_for(payload, &endorsement.endorser);
    Ok(verify_signature(&message, &signature, &record.public_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::LocalIdentityProvider;
    use attest_crypto::keypair_from_seed;
    use attest_endorsement::{DefaultEndorser, Plugin};
    use attest_types::SignedProposal;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn plugin(seed: u8) -> DefaultEndorser {
        let provider = LocalIdentityProvider::new(keypair_from_seed(&[seed; 32]), "org1");
        DefaultEndorser::with_provider(Arc::new(provider))
    }

    fn proposal() -> SignedProposal {
        SignedProposal::new(b"envelope".to_vec(), b"client-sig".to_vec())
    }

    #[test]
    fn tampered_payload_fails_verification() {
        let (endorsement, _) = plugin(3).endorse(b"resp".to_vec(), &proposal()).unwrap();
        assert!(!verify_endorsement(&endorsement, b"tampered").unwrap());
    }

    #[test]
    fn tampered_signature_fails_verification() {
        let (mut endorsement, payload) =
            plugin(3).endorse(b"resp".to_vec(), &proposal()).unwrap();
        endorsement.signature[0] ^= 0x01;
        assert!(!verify_endorsement(&endorsement, &payload).unwrap());
    }

    #[test]
    fn wrong_length_signature_is_invalid_not_an_error() {
        let (mut endorsement, payload) =
            plugin(3).endorse(b"resp".to_vec(), &proposal()).unwrap();
        endorsement.signature.pop();
        assert!(!verify_endorsement(&endorsement, &payload).unwrap());
    }

    #[test]
    fn undecodable_endorser_is_an_error() {
        let endorsement = Endorsement {
            signature: vec![0u8; 64],
            endorser: b"garbage".to_vec(),
        };
        assert!(verify_endorsement(&endorsement, b"resp").is_err());
    }

    #[test]
    fn endorsement_from_another_key_fails_verification() {
        let (endorsement_a, payload) =
            plugin(1).endorse(b"resp".to_vec(), &proposal()).unwrap();
        let (endorsement_b, _) = plugin(2).endorse(b"resp".to_vec(), &proposal()).unwrap();
        // Signature from key B pasted under endorser record A.
        let forged = Endorsement {
            signature: endorsement_b.signature,
            endorser: endorsement_a.endorser,
        };
        assert!(!verify_endorsement(&forged, &payload).unwrap());
    }

    proptest! {
        #[test]
        fn any_payload_verifies_against_its_own_endorsement(
            payload in proptest::collection::vec(any::<u8>(), 0..512)
        ) {
            let (endorsement, returned) =
                plugin(11).endorse(payload.clone(), &proposal()).unwrap();
            prop_assert_eq!(&returned, &payload);
            prop_assert!(verify_endorsement(&endorsement, &returned).unwrap());
        }
    }
}
