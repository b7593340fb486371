//! Handles to the variables owned by the [`Solver`].
//!
//! Propagators only hold these handles; all domain information lives in the solver and is read
//! and modified through the contexts passed to the propagators.
mod integer_variable;
mod set_variable;

pub use integer_variable::IntDomainId;
pub use set_variable::SetDomainId;

#[cfg(doc)]
use crate::Solver;

/// A handle to either a set variable or an integer variable.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum AnyDomainId {
    Set(SetDomainId),
    Int(IntDomainId),
}

impl From<SetDomainId> for AnyDomainId {
    fn from(domain: SetDomainId) -> Self {
        AnyDomainId::Set(domain)
    }
}

impl From<IntDomainId> for AnyDomainId {
    fn from(domain: IntDomainId) -> Self {
        AnyDomainId::Int(domain)
    }
}

impl std::fmt::Display for AnyDomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyDomainId::Set(domain) => write!(f, "{domain}"),
            AnyDomainId::Int(domain) => write!(f, "{domain}"),
        }
    }
}
