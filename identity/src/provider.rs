//! A single-key identity provider for local endorsers.

use crate::record::IdentityRecord;
use attest_crypto::sign_message;
use attest_endorsement::{IdentityError, IdentityProvider, SigningIdentity};
use attest_types::{KeyPair, SignedProposal};
use std::sync::Arc;

/// Resolves every request to the same local Ed25519 identity.
///
/// This is the provider a peer with one signing key deploys. Multi-tenant
/// membership services would inspect the proposal to pick an identity per
/// request; the endorsement core is indifferent to the difference.
pub struct LocalIdentityProvider {
    keypair: Arc<KeyPair>,
    record: IdentityRecord,
}

impl LocalIdentityProvider {
    pub fn new(keypair: KeyPair, issuer: &str) -> Self {
        let record = IdentityRecord::new(keypair.public.clone(), issuer);
        Self {
            keypair: Arc::new(keypair),
            record,
        }
    }

    pub fn record(&self) -> &IdentityRecord {
        &self.record
    }
}

impl IdentityProvider for LocalIdentityProvider {
    fn signing_identity_for_request(
        &self,
        _proposal: &SignedProposal,
    ) -> Result<Box<dyn SigningIdentity>, IdentityError> {
        Ok(Box::new(LocalIdentity {
            keypair: Arc::clone(&self.keypair),
            record: self.record.clone(),
        }))
    }
}

/// The signing capability handed out per request.
pub struct LocalIdentity {
    keypair: Arc<KeyPair>,
    record: IdentityRecord,
}

impl SigningIdentity for LocalIdentity {
    fn serialize(&self) -> Result<Vec<u8>, IdentityError> {
        self.record.encode()
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, IdentityError> {
        Ok(sign_message(message, &self.keypair.private).to_vec())
    }
}
