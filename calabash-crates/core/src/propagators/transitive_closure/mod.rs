mod at_most_transitive_closure;
mod maximal_closure;
mod strongly_connected;

pub use at_most_transitive_closure::*;
