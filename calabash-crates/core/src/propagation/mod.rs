//! Contains the main building blocks for propagators over set variables.
//!
//! # Background
//!
//! A set variable `S` is represented by two bounds: its *kernel* (the values which are certainly
//! in `S`) and its *envelope* (the values which may be in `S`), with `kernel ⊆ S ⊆ envelope`. A
//! propagator takes the domains of its variables and narrows them, i.e. it grows kernels, shrinks
//! envelopes and tightens integer bounds, without ever removing a solution of its constraint.
//!
//! A propagator is said to be at fix-point if applying it again does not change any domain. The
//! propagators in this crate are required to be idempotent: a single call to
//! [`Propagator::propagate_from_scratch`] results in a fix-point of that propagator.
//!
//! # Practical
//!
//! Each concrete propagator implements [`Propagator`]. It is created by a
//! [`PropagatorConstructor`], which registers the propagator for the events it cares about
//! through the [`PropagatorConstructorContext`]. The solver then calls the propagator with a
//! [`PropagationContext`]; domains are read through [`ReadDomains`] and changed through the
//! methods of the context.
//!
//! When the solver has recorded the changes to a watched variable since the previous call, it
//! hands them over as a [`Delta`](crate::engine::notifications::Delta) to
//! [`Propagator::propagate_incremental`], which lets a propagator restrict its work to the
//! elements that changed.
//!
//! The propagator is added to the solver through [`Solver::add_propagator`].
mod constructor;
mod contexts;
mod local_id;
mod propagator;

pub(crate) mod propagator_id;
pub(crate) mod store;

pub use constructor::PropagatorConstructor;
pub use constructor::PropagatorConstructorContext;
pub use contexts::Domains;
pub use contexts::PropagationContext;
pub use contexts::ReadDomains;
pub use local_id::LocalId;
pub use propagator::Priority;
pub use propagator::Propagator;
pub use propagator_id::PropagatorId;
pub(crate) use propagator_id::PropagatorVarId;
pub use store::PropagatorHandle;

pub use crate::engine::notifications::DomainEvents;
#[cfg(doc)]
use crate::Solver;
