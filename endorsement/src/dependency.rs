//! Typed dependencies injected into a plugin at initialization.

use crate::consult::{ConsultMode, Consultor};
use crate::identity::IdentityProvider;
use std::fmt;
use std::sync::Arc;

/// A capability a host hands to [`Plugin::init`](crate::Plugin::init).
///
/// The set is open-ended by design: plugins scan the list, bind the kinds
/// they understand, and ignore the rest, so hosts can inject capabilities
/// meant for other plugin variants without breaking this one.
#[derive(Clone)]
pub enum Dependency {
    /// The identity subsystem used to resolve signing identities.
    IdentityProvider(Arc<dyn IdentityProvider>),
    /// An optional pre-endorsement consultation service and the policy
    /// for acting on its answers.
    Consultor {
        consultor: Arc<dyn Consultor>,
        mode: ConsultMode,
    },
}

impl Dependency {
    /// The capability kind, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IdentityProvider(_) => "identity-provider",
            Self::Consultor { .. } => "consultor",
        }
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdentityProvider(_) => f.write_str("Dependency::IdentityProvider"),
            Self::Consultor { mode, .. } => {
                write!(f, "Dependency::Consultor({mode:?})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consult::{ConsultDecision, ConsultError, ConsultRequest};
    use crate::identity::{IdentityError, SigningIdentity};
    use attest_types::SignedProposal;

    struct Provider;
    impl IdentityProvider for Provider {
        fn signing_identity_for_request(
            &self,
            _proposal: &SignedProposal,
        ) -> Result<Box<dyn SigningIdentity>, IdentityError> {
            Err(IdentityError::Resolution("unused".into()))
        }
    }

    struct Approver;
    impl Consultor for Approver {
        fn consult(&self, _request: &ConsultRequest) -> Result<ConsultDecision, ConsultError> {
            Ok(ConsultDecision::Approve)
        }

        fn name(&self) -> &str {
            "approver"
        }
    }

    #[test]
    fn kinds_are_distinct() {
        let provider = Dependency::IdentityProvider(Arc::new(Provider));
        let consultor = Dependency::Consultor {
            consultor: Arc::new(Approver),
            mode: ConsultMode::Advisory,
        };
        assert_eq!(provider.kind(), "identity-provider");
        assert_eq!(consultor.kind(), "consultor");
    }

    #[test]
    fn debug_does_not_expose_internals() {
        let dep = Dependency::IdentityProvider(Arc::new(Provider));
        assert_eq!(format!("{dep:?}"), "Dependency::IdentityProvider");
    }
}
