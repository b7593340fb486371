//! The propagators over set variables.
//!
//! Every propagator comes with an `...Args` struct, which is the [`PropagatorConstructor`] that
//! registers it with the solver. The functions in [`crate::constraints`] are the more convenient
//! way to post them.
mod set_difference;
mod set_strict_high_bound;
mod transitive_closure;

pub use set_difference::*;
pub use set_strict_high_bound::*;
pub use transitive_closure::*;

#[cfg(doc)]
use crate::propagation::PropagatorConstructor;
