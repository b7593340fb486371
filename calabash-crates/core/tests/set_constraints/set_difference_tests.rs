use calabash_core::constraints;
use calabash_core::constraints::Constraint;
use calabash_core::propagators::SetDifferenceArgs;
use calabash_core::variables::SetDomainId;
use calabash_core::Entailment;
use calabash_core::Solver;

use crate::brute_force::difference;
use crate::brute_force::init_logging;
use crate::brute_force::random_set_change;
use crate::brute_force::random_set_variable;
use crate::brute_force::rng;
use crate::brute_force::set_assignments;

const UNIVERSE: std::ops::Range<i32> = 0..4;

fn num_satisfying(solver: &Solver, vars: &[SetDomainId]) -> (usize, usize) {
    let assignments = set_assignments(solver, vars);
    let num_satisfying = assignments
        .iter()
        .filter(|sets| difference(&sets[0], &sets[1]) == sets[2])
        .count();

    (num_satisfying, assignments.len())
}

#[test]
fn solutions_match_brute_force() {
    init_logging();
    let mut rng = rng(42);

    for _ in 0..200 {
        let mut solver = Solver::default();
        let vars = [(); 3].map(|_| random_set_variable(&mut solver, &mut rng, UNIVERSE));
        let (expected, _) = num_satisfying(&solver, &vars);

        if constraints::set_difference(vars[0], vars[1], vars[2])
            .post(&mut solver)
            .is_err()
        {
            assert_eq!(0, expected);
            continue;
        }

        let num_solutions = solver.for_each_solution(|solution| {
            assert_eq!(
                difference(solution.set_value(vars[0]), solution.set_value(vars[1])),
                solution.set_value(vars[2])
            );
        });
        assert_eq!(expected, num_solutions);
    }
}

#[test]
fn every_undecided_value_is_supported_both_ways() {
    init_logging();
    let mut rng = rng(7);

    for _ in 0..200 {
        let mut solver = Solver::default();
        let vars = [(); 3].map(|_| random_set_variable(&mut solver, &mut rng, UNIVERSE));
        if constraints::set_difference(vars[0], vars[1], vars[2])
            .post(&mut solver)
            .is_err()
        {
            continue;
        }

        let solutions = solver.all_solutions();
        for var in vars {
            let kernel = solver.kernel(var);
            for value in solver.envelope(var) {
                if kernel.contains(&value) {
                    continue;
                }

                assert!(solutions
                    .iter()
                    .any(|solution| solution.set_value(var).contains(&value)));
                assert!(solutions
                    .iter()
                    .any(|solution| !solution.set_value(var).contains(&value)));
            }
        }
    }
}

#[test]
fn entailment_agrees_with_brute_force() {
    init_logging();
    let mut rng = rng(3);

    for _ in 0..300 {
        let mut solver = Solver::default();
        let universe = UNIVERSE.collect::<Vec<_>>();
        let vars = [(); 3].map(|_| solver.new_set_variable(&[], &universe));
        let handle = solver
            .add_propagator(SetDifferenceArgs {
                minuend: vars[0],
                subtrahend: vars[1],
                difference: vars[2],
            })
            .expect("unconstrained variables");

        for _ in 0..12 {
            random_set_change(&mut solver, &mut rng, &vars, UNIVERSE);
        }

        let (num_satisfying, num_assignments) = num_satisfying(&solver, &vars);
        match solver.entailment(handle) {
            Entailment::Satisfied => assert_eq!(num_assignments, num_satisfying),
            Entailment::Violated => assert_eq!(0, num_satisfying),
            Entailment::Undetermined => assert!(num_assignments > 1),
        }
    }
}
