use calabash_core::constraints;
use calabash_core::constraints::Constraint;
use calabash_core::propagators::AtMostTransitiveClosureArgs;
use calabash_core::variables::SetDomainId;
use calabash_core::Entailment;
use calabash_core::Solver;
use rand::Rng;

use crate::brute_force::init_logging;
use crate::brute_force::is_at_most_transitive_closure;
use crate::brute_force::random_set_change;
use crate::brute_force::random_set_variable;
use crate::brute_force::reachable;
use crate::brute_force::rng;
use crate::brute_force::set_assignments;

const NUM_NODES: i32 = 3;

fn random_instance(solver: &mut Solver, rng: &mut rand::rngs::SmallRng) -> Vec<SetDomainId> {
    (0..2 * NUM_NODES)
        .map(|_| random_set_variable(solver, rng, 0..NUM_NODES))
        .collect()
}

fn num_satisfying(solver: &Solver, vars: &[SetDomainId], reflexive: bool) -> (usize, usize) {
    let assignments = set_assignments(solver, vars);
    let num_satisfying = assignments
        .iter()
        .filter(|sets| {
            let (relation, closure) = sets.split_at(NUM_NODES as usize);
            is_at_most_transitive_closure(relation, closure, reflexive)
        })
        .count();

    (num_satisfying, assignments.len())
}

#[test]
fn closure_envelopes_are_the_reachable_nodes() {
    init_logging();
    let mut rng = rng(42);

    for _ in 0..200 {
        let num_nodes = rng.gen_range(1..=6);
        let reflexive = rng.gen_bool(0.5);
        let nodes = (0..num_nodes).collect::<Vec<_>>();

        let mut solver = Solver::default();
        let successors = (0..num_nodes)
            .map(|_| {
                nodes
                    .iter()
                    .copied()
                    .filter(|_| rng.gen_bool(0.3))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let relation = successors
            .iter()
            .map(|envelope| solver.new_set_variable(&[], envelope))
            .collect::<Vec<_>>();
        let closure = (0..num_nodes)
            .map(|_| solver.new_set_variable(&[], &nodes))
            .collect::<Vec<_>>();

        constraints::at_most_transitive_closure(relation, closure.clone(), reflexive)
            .post(&mut solver)
            .expect("the empty closure is always allowed");

        for (node, &var) in closure.iter().enumerate() {
            let mut expected = reachable(&successors, node);
            if reflexive && !expected.contains(&(node as i32)) {
                expected.push(node as i32);
                expected.sort_unstable();
            }

            assert_eq!(expected, solver.envelope(var));
        }
    }
}

#[test]
fn solutions_match_brute_force() {
    init_logging();
    let mut rng = rng(13);

    for _ in 0..100 {
        let mut solver = Solver::default();
        let vars = random_instance(&mut solver, &mut rng);
        let reflexive = rng.gen_bool(0.5);
        let (expected, _) = num_satisfying(&solver, &vars, reflexive);

        let (relation, closure) = vars.split_at(NUM_NODES as usize);
        if constraints::at_most_transitive_closure(relation, closure, reflexive)
            .post(&mut solver)
            .is_err()
        {
            assert_eq!(0, expected);
            continue;
        }

        let num_solutions = solver.for_each_solution(|solution| {
            let relation = relation
                .iter()
                .map(|&var| solution.set_value(var).to_vec())
                .collect::<Vec<_>>();
            let closure = closure
                .iter()
                .map(|&var| solution.set_value(var).to_vec())
                .collect::<Vec<_>>();

            assert!(is_at_most_transitive_closure(&relation, &closure, reflexive));
        });
        assert_eq!(expected, num_solutions);
    }
}

#[test]
fn entailment_agrees_with_brute_force() {
    init_logging();
    let mut rng = rng(17);

    for _ in 0..100 {
        let mut solver = Solver::default();
        let vars = random_instance(&mut solver, &mut rng);
        let reflexive = rng.gen_bool(0.5);

        let (relation, closure) = vars.split_at(NUM_NODES as usize);
        let Ok(handle) = solver.add_propagator(AtMostTransitiveClosureArgs {
            relation: relation.into(),
            closure: closure.into(),
            reflexive,
        }) else {
            continue;
        };

        for _ in 0..4 {
            random_set_change(&mut solver, &mut rng, &vars, 0..NUM_NODES);
        }

        let (num_satisfying, num_assignments) = num_satisfying(&solver, &vars, reflexive);
        match solver.entailment(handle) {
            Entailment::Satisfied => assert_eq!(num_assignments, num_satisfying),
            Entailment::Violated => assert_eq!(0, num_satisfying),
            Entailment::Undetermined => assert!(num_assignments > 1),
        }
    }
}
