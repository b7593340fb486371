//! Checks the set propagators against brute-force enumeration on small random instances.
mod brute_force;
mod incremental_propagation_tests;
mod set_difference_tests;
mod set_strict_high_bound_tests;
mod transitive_closure_tests;
