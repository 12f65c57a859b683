//! The default endorsement plugin.

use crate::consult::{ConsultDecision, ConsultMode, ConsultRequest, Consultor};
use crate::dependency::Dependency;
use crate::error::EndorsementError;
use crate::identity::IdentityProvider;
use crate::plugin::{Plugin, PluginFactory};
use attest_types::{Endorsement, SignedProposal};
use std::sync::Arc;
use tracing::{debug, warn};

/// The stock endorsement plugin.
///
/// Endorsing resolves a signing identity for the request, serializes it,
/// and signs `payload ‖ identity_bytes`; the payload is returned to the
/// caller unmodified. When a consultor is bound, it is asked before
/// signing and its answer is applied according to the configured
/// [`ConsultMode`]; without one, the whole call is a pure in-process
/// computation.
pub struct DefaultEndorser {
    provider: Option<Arc<dyn IdentityProvider>>,
    consultor: Option<Arc<dyn Consultor>>,
    consult_mode: ConsultMode,
}

impl DefaultEndorser {
    /// A fresh, uninitialized instance. Every `endorse` call fails with
    /// [`EndorsementError::MissingDependency`] until [`Plugin::init`]
    /// binds an identity provider.
    pub fn new() -> Self {
        Self {
            provider: None,
            consultor: None,
            consult_mode: ConsultMode::default(),
        }
    }

    /// Statically wired construction: the provider is fixed at build time
    /// and no `init` call is needed.
    pub fn with_provider(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider: Some(provider),
            consultor: None,
            consult_mode: ConsultMode::default(),
        }
    }

    /// Attach a consultor to a statically wired instance.
    pub fn with_consultor(mut self, consultor: Arc<dyn Consultor>, mode: ConsultMode) -> Self {
        self.consultor = Some(consultor);
        self.consult_mode = mode;
        self
    }

    /// Ask the bound consultor, if any, and apply the configured mode.
    fn consult(
        &self,
        payload: &[u8],
        proposal: &SignedProposal,
    ) -> Result<(), EndorsementError> {
        let Some(consultor) = &self.consultor else {
            return Ok(());
        };
        let request = ConsultRequest {
            payload: payload.to_vec(),
            proposal_bytes: proposal.proposal_bytes.clone(),
        };
        match (consultor.consult(&request), self.consult_mode) {
            (Ok(ConsultDecision::Approve), _) => Ok(()),
            (Ok(ConsultDecision::Veto { reason }), ConsultMode::Strict) => {
                Err(EndorsementError::Vetoed(reason))
            }
            (Ok(ConsultDecision::Veto { reason }), ConsultMode::Advisory) => {
                warn!(
                    consultor = consultor.name(),
                    reason = %reason,
                    "consultor vetoed; endorsing anyway (advisory mode)"
                );
                Ok(())
            }
            (Err(e), ConsultMode::Strict) => Err(EndorsementError::Consultation(e)),
            (Err(e), ConsultMode::Advisory) => {
                warn!(
                    consultor = consultor.name(),
                    error = %e,
                    "consultation failed; endorsing anyway (advisory mode)"
                );
                Ok(())
            }
        }
    }
}

impl Default for DefaultEndorser {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for DefaultEndorser {
    fn init(&mut self, dependencies: &[Dependency]) -> Result<(), EndorsementError> {
        // Clear first so a failed or repeated init never leaves a mix of
        // old and new bindings behind.
        self.provider = None;
        self.consultor = None;
        self.consult_mode = ConsultMode::default();

        for dep in dependencies {
            match dep {
                Dependency::IdentityProvider(p) => {
                    if self.provider.is_none() {
                        self.provider = Some(Arc::clone(p));
                    } else {
                        debug!("ignoring extra identity provider (first match wins)");
                    }
                }
                Dependency::Consultor { consultor, mode } => {
                    if self.consultor.is_none() {
                        self.consultor = Some(Arc::clone(consultor));
                        self.consult_mode = *mode;
                    } else {
                        debug!("ignoring extra consultor (first match wins)");
                    }
                }
            }
        }

        if self.provider.is_none() {
            return Err(EndorsementError::MissingDependency);
        }
        debug!(
            consultation = self.consultor.is_some(),
            "endorsement plugin initialized"
        );
        Ok(())
    }

    fn endorse(
        &self,
        payload: Vec<u8>,
        proposal: &SignedProposal,
    ) -> Result<(Endorsement, Vec<u8>), EndorsementError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(EndorsementError::MissingDependency)?;

        let identity = provider
            .signing_identity_for_request(proposal)
            .map_err(EndorsementError::IdentityResolution)?;

        let identity_bytes = identity
            .serialize()
            .map_err(EndorsementError::Serialization)?;

        self.consult(&payload, proposal)?;

        let message = Endorsement::message_for(&payload, &identity_bytes);
        let signature = identity.sign(&message).map_err(EndorsementError::Signing)?;

        debug!(
            payload_len = payload.len(),
            endorser_len = identity_bytes.len(),
            "endorsed proposal response"
        );
        Ok((
            Endorsement {
                signature,
                endorser: identity_bytes,
            },
            payload,
        ))
    }
}

/// Factory for [`DefaultEndorser`] instances.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEndorserFactory;

impl PluginFactory for DefaultEndorserFactory {
    fn create(&self) -> Box<dyn Plugin> {
        Box::new(DefaultEndorser::new())
    }
}
