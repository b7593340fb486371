use calabash_core::constraints;
use calabash_core::constraints::Constraint;
use calabash_core::propagators::SetStrictHighBoundArgs;
use calabash_core::variables::IntDomainId;
use calabash_core::variables::SetDomainId;
use calabash_core::Entailment;
use calabash_core::Solver;
use rand::Rng;

use crate::brute_force::init_logging;
use crate::brute_force::int_values;
use crate::brute_force::random_set_change;
use crate::brute_force::random_set_variable;
use crate::brute_force::rng;
use crate::brute_force::set_values;

const UNIVERSE: std::ops::Range<i32> = -2..5;

fn is_strictly_below(set: &[i32], bound: i32) -> bool {
    set.iter().all(|&value| value < bound)
}

fn num_satisfying(solver: &Solver, set: SetDomainId, bound: IntDomainId) -> (usize, usize) {
    let sets = set_values(solver, set);
    let bounds = int_values(solver, bound);

    let num_satisfying = sets
        .iter()
        .map(|set| {
            bounds
                .iter()
                .filter(|&&bound| is_strictly_below(set, bound))
                .count()
        })
        .sum();

    (num_satisfying, sets.len() * bounds.len())
}

#[test]
fn solutions_match_brute_force() {
    init_logging();
    let mut rng = rng(42);

    for _ in 0..200 {
        let mut solver = Solver::default();
        let set = random_set_variable(&mut solver, &mut rng, UNIVERSE);
        let lower_bound = rng.gen_range(-3..5);
        let bound = solver.new_integer_variable(lower_bound, rng.gen_range(lower_bound..6));
        let (expected, _) = num_satisfying(&solver, set, bound);

        if constraints::set_strict_high_bound(set, bound)
            .post(&mut solver)
            .is_err()
        {
            assert_eq!(0, expected);
            continue;
        }

        let num_solutions = solver.for_each_solution(|solution| {
            assert!(is_strictly_below(
                solution.set_value(set),
                solution.integer_value(bound)
            ));
        });
        assert_eq!(expected, num_solutions);
    }
}

#[test]
fn propagation_leaves_only_supported_values() {
    init_logging();
    let mut rng = rng(11);

    for _ in 0..200 {
        let mut solver = Solver::default();
        let set = random_set_variable(&mut solver, &mut rng, UNIVERSE);
        let lower_bound = rng.gen_range(-3..5);
        let bound = solver.new_integer_variable(lower_bound, rng.gen_range(lower_bound..6));
        if constraints::set_strict_high_bound(set, bound)
            .post(&mut solver)
            .is_err()
        {
            continue;
        }

        let solutions = solver.all_solutions();
        let kernel = solver.kernel(set);

        for value in solver.envelope(set) {
            if !kernel.contains(&value) {
                assert!(solutions
                    .iter()
                    .any(|solution| solution.set_value(set).contains(&value)));
            }
        }
        for value in [solver.lower_bound(bound), solver.upper_bound(bound)] {
            assert!(solutions
                .iter()
                .any(|solution| solution.integer_value(bound) == value));
        }
    }
}

#[test]
fn entailment_agrees_with_brute_force() {
    init_logging();
    let mut rng = rng(5);

    for _ in 0..300 {
        let mut solver = Solver::default();
        let universe = UNIVERSE.collect::<Vec<_>>();
        let set = solver.new_set_variable(&[], &universe);
        let bound = solver.new_integer_variable(-3, 6);
        let handle = solver
            .add_propagator(SetStrictHighBoundArgs { set, bound })
            .expect("the empty set is below every bound");

        for _ in 0..6 {
            random_set_change(&mut solver, &mut rng, &[set], UNIVERSE);
        }
        let _ = solver.set_lower_bound(bound, rng.gen_range(-3..7));
        let _ = solver.set_upper_bound(bound, rng.gen_range(-3..7));

        let (num_satisfying, num_assignments) = num_satisfying(&solver, set, bound);
        match solver.entailment(handle) {
            Entailment::Satisfied => assert_eq!(num_assignments, num_satisfying),
            Entailment::Violated => assert_eq!(0, num_satisfying),
            Entailment::Undetermined => {}
        }
    }
}
