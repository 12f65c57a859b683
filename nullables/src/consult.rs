//! Nullable consultor: scripted consultation outcomes.

use attest_endorsement::{ConsultDecision, ConsultError, ConsultRequest, Consultor};
use std::sync::Mutex;

enum Script {
    Approve,
    Veto(String),
    Fail(String),
}

/// A consultor that answers from a script and records every request it
/// was shown.
pub struct NullConsultor {
    script: Script,
    requests: Mutex<Vec<ConsultRequest>>,
}

impl NullConsultor {
    /// Approves everything.
    pub fn approving() -> Self {
        Self {
            script: Script::Approve,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Vetoes everything with the given reason.
    pub fn vetoing(reason: &str) -> Self {
        Self {
            script: Script::Veto(reason.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every consultation, as if the service were unreachable.
    pub fn failing(message: &str) -> Self {
        Self {
            script: Script::Fail(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request this consultor has been shown, in order.
    pub fn requests(&self) -> Vec<ConsultRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Consultor for NullConsultor {
    fn consult(&self, request: &ConsultRequest) -> Result<ConsultDecision, ConsultError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Approve => Ok(ConsultDecision::Approve),
            Script::Veto(reason) => Ok(ConsultDecision::Veto {
                reason: reason.clone(),
            }),
            Script::Fail(message) => Err(ConsultError::Unavailable(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::NullIdentityProvider;
    use attest_endorsement::{
        ConsultMode, DefaultEndorser, Dependency, EndorsementError, Plugin,
    };
    use attest_types::SignedProposal;
    use std::sync::Arc;

    fn proposal() -> SignedProposal {
        SignedProposal::new(b"envelope".to_vec(), b"client-sig".to_vec())
    }

    fn plugin_with(consultor: Arc<NullConsultor>, mode: ConsultMode) -> DefaultEndorser {
        let mut plugin = DefaultEndorser::new();
        plugin
            .init(&[
                Dependency::IdentityProvider(Arc::new(NullIdentityProvider::new(b"ID42"))),
                Dependency::Consultor { consultor, mode },
            ])
            .unwrap();
        plugin
    }

    #[test]
    fn consultor_sees_payload_and_proposal() {
        let consultor = Arc::new(NullConsultor::approving());
        let plugin = plugin_with(Arc::clone(&consultor), ConsultMode::Strict);
        plugin.endorse(b"resp123".to_vec(), &proposal()).unwrap();

        let requests = consultor.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].payload, b"resp123");
        assert_eq!(requests[0].proposal_bytes, b"envelope");
    }

    #[test]
    fn strict_veto_carries_scripted_reason() {
        let consultor = Arc::new(NullConsultor::vetoing("double spend"));
        let plugin = plugin_with(consultor, ConsultMode::Strict);
        let err = plugin.endorse(b"resp".to_vec(), &proposal()).unwrap_err();
        match err {
            EndorsementError::Vetoed(reason) => assert_eq!(reason, "double spend"),
            other => panic!("expected veto, got {other:?}"),
        }
    }

    #[test]
    fn advisory_failure_still_records_the_request() {
        let consultor = Arc::new(NullConsultor::failing("down for maintenance"));
        let plugin = plugin_with(Arc::clone(&consultor), ConsultMode::Advisory);
        assert!(plugin.endorse(b"resp".to_vec(), &proposal()).is_ok());
        assert_eq!(consultor.call_count(), 1);
    }
}
