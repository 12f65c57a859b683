//! The plugin and factory contracts exposed to the host.

use crate::dependency::Dependency;
use crate::error::EndorsementError;
use attest_types::{Endorsement, SignedProposal};

/// An endorsement plugin.
///
/// Lifecycle: created by a [`PluginFactory`], initialized exactly once via
/// [`init`](Plugin::init), then invoked any number of times via
/// [`endorse`](Plugin::endorse). There is no teardown; the owner discards
/// the instance when done.
///
/// `init` takes `&mut self` while `endorse` takes `&self`, so the borrow
/// checker enforces that initialization happens before (and never
/// concurrently with) use. An initialized instance is safe for concurrent
/// `endorse` calls: each call touches only its own arguments and the
/// bound, `Sync` dependencies.
pub trait Plugin: Send + Sync {
    /// Bind this plugin's dependencies.
    ///
    /// The list is scanned in order and the FIRST entry of each supported
    /// kind wins; later entries of the same kind are ignored. Hosts that
    /// inject more than one identity-providing dependency should not
    /// expect the extras to shadow the first.
    ///
    /// Fails with [`EndorsementError::MissingDependency`] when no identity
    /// provider is present. Calling `init` again replaces all previous
    /// bindings wholesale; it never merges old and new state.
    fn init(&mut self, dependencies: &[Dependency]) -> Result<(), EndorsementError>;

    /// Endorse a proposal response payload.
    ///
    /// Returns the endorsement (a signature over `payload ‖ identity`
    /// and the serialized identity as the endorser reference) together
    /// with the payload, which a plugin variant may have rewritten before
    /// signing. The stock implementation returns it unmodified.
    fn endorse(
        &self,
        payload: Vec<u8>,
        proposal: &SignedProposal,
    ) -> Result<(Endorsement, Vec<u8>), EndorsementError>;
}

/// Hands out fresh, uninitialized plugin instances.
///
/// Stateless from the caller's perspective: safe to call concurrently,
/// any number of times, and it cannot fail.
pub trait PluginFactory: Send + Sync {
    fn create(&self) -> Box<dyn Plugin>;
}
