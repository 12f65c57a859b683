//! Nullable identity provider: deterministic identities and signatures.

use attest_crypto::blake2b_256;
use attest_endorsement::{IdentityError, IdentityProvider, SigningIdentity};
use attest_types::SignedProposal;
use std::sync::Mutex;

/// An identity provider that resolves every request to a fixed identity
/// whose signatures are Blake2b hashes of the signed message.
///
/// Hash-as-signature makes expected endorsements computable by hand in
/// tests: for identity bytes `ID` and payload `P`, the signature is
/// exactly `blake2b_256(P ‖ ID)`. Each step can be scripted to fail.
pub struct NullIdentityProvider {
    identity_bytes: Vec<u8>,
    fail_resolution: bool,
    fail_serialization: bool,
    fail_signing: bool,
    resolutions: Mutex<usize>,
}

impl NullIdentityProvider {
    pub fn new(identity_bytes: &[u8]) -> Self {
        Self {
            identity_bytes: identity_bytes.to_vec(),
            fail_resolution: false,
            fail_serialization: false,
            fail_signing: false,
            resolutions: Mutex::new(0),
        }
    }

    /// Every resolution attempt fails, as if the membership service were
    /// unreachable.
    pub fn failing_resolution() -> Self {
        Self {
            fail_resolution: true,
            ..Self::new(b"")
        }
    }

    /// Identities resolve but cannot serialize, as if malformed.
    pub fn failing_serialization(identity_bytes: &[u8]) -> Self {
        Self {
            fail_serialization: true,
            ..Self::new(identity_bytes)
        }
    }

    /// Identities resolve and serialize but cannot sign, as if the key
    /// were missing.
    pub fn failing_signing(identity_bytes: &[u8]) -> Self {
        Self {
            fail_signing: true,
            ..Self::new(identity_bytes)
        }
    }

    /// How many identities this provider has resolved.
    pub fn resolution_count(&self) -> usize {
        *self.resolutions.lock().unwrap()
    }
}

impl IdentityProvider for NullIdentityProvider {
    fn signing_identity_for_request(
        &self,
        _proposal: &SignedProposal,
    ) -> Result<Box<dyn SigningIdentity>, IdentityError> {
        *self.resolutions.lock().unwrap() += 1;
        if self.fail_resolution {
            return Err(IdentityError::Resolution(
                "null provider: scripted resolution failure".into(),
            ));
        }
        Ok(Box::new(NullSigningIdentity {
            identity_bytes: self.identity_bytes.clone(),
            fail_serialization: self.fail_serialization,
            fail_signing: self.fail_signing,
        }))
    }
}

/// The identity handed out by [`NullIdentityProvider`].
pub struct NullSigningIdentity {
    identity_bytes: Vec<u8>,
    fail_serialization: bool,
    fail_signing: bool,
}

impl SigningIdentity for NullSigningIdentity {
    fn serialize(&self) -> Result<Vec<u8>, IdentityError> {
        if self.fail_serialization {
            return Err(IdentityError::Serialization(
                "null identity: scripted serialization failure".into(),
            ));
        }
        Ok(self.identity_bytes.clone())
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, IdentityError> {
        if self.fail_signing {
            return Err(IdentityError::Signing(
                "null identity: scripted signing failure".into(),
            ));
        }
        Ok(blake2b_256(message).to_vec())
    }
}
