use crate::consult::ConsultError;
use crate::identity::IdentityError;
use thiserror::Error;

/// Failures of the endorsement path.
///
/// Every variant is returned to the caller; nothing is retried internally
/// and no failure terminates the process. Whether a failure is worth
/// retrying (a transient identity-service outage vs. a permanently
/// invalid key) is a distinction only the caller can make.
#[derive(Debug, Error)]
pub enum EndorsementError {
    /// No identity-providing dependency was bound. Raised by `init` when
    /// the dependency list contains none, and by every subsequent
    /// `endorse` call on an instance left in that state.
    #[error("no signing identity provider among the injected dependencies")]
    MissingDependency,

    #[error("failed fetching signing identity")]
    IdentityResolution(#[source] IdentityError),

    #[error("could not serialize the signing identity")]
    Serialization(#[source] IdentityError),

    #[error("could not sign the proposal response payload")]
    Signing(#[source] IdentityError),

    /// A strict-mode consultor call failed.
    #[error("pre-endorsement consultation failed")]
    Consultation(#[source] ConsultError),

    /// A strict-mode consultor declined the transaction.
    #[error("endorsement vetoed by consultor: {0}")]
    Vetoed(String),
}
