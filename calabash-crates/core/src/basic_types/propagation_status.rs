use thiserror::Error;

/// The result of invoking a propagator (or of a single domain operation). The propagation can
/// either succeed or run into a [`Contradiction`].
pub type PropagationStatus = Result<(), Contradiction>;

/// The signal that the current domains admit no valid completion.
///
/// A contradiction aborts the propagation which raised it; the solver reverts the domains to the
/// last checkpoint.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contradiction {
    /// A domain operation would have made a domain empty, i.e. it would have broken
    /// `kernel ⊆ envelope` for a set variable or `low ≤ high` for an integer variable.
    #[error("the domain of a variable became empty")]
    EmptyDomain,
    /// A propagator found its constraint to be unsatisfiable without emptying a domain, e.g. a
    /// mandatory value lies outside of the range the constraint accepts.
    #[error("propagator `{propagator}` detected an inconsistency")]
    Propagator { propagator: &'static str },
}
