use calabash_core::constraints;
use calabash_core::constraints::Constraint;
use calabash_core::variables::IntDomainId;
use calabash_core::variables::SetDomainId;
use calabash_core::Solver;
use calabash_core::SolverOptions;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::brute_force::init_logging;
use crate::brute_force::random_set_change;
use crate::brute_force::random_set_variable;
use crate::brute_force::rng;

const UNIVERSE: std::ops::Range<i32> = 0..4;

struct Instance {
    solver: Solver,
    sets: Vec<SetDomainId>,
    bound: IntDomainId,
}

/// Posts `a \ b = c`, `c \ d = e` and `c <<< x` on random domains; `None` if posting fails.
fn random_instance(seed: u64, incremental_propagation: bool) -> Option<Instance> {
    let mut rng = rng(seed);
    let mut solver = Solver::with_options(SolverOptions {
        incremental_propagation,
        ..Default::default()
    });

    let sets = (0..5)
        .map(|_| random_set_variable(&mut solver, &mut rng, UNIVERSE))
        .collect::<Vec<_>>();
    let bound = solver.new_integer_variable(rng.gen_range(-1..2), rng.gen_range(2..6));

    constraints::set_difference(sets[0], sets[1], sets[2])
        .post(&mut solver)
        .ok()?;
    constraints::set_difference(sets[2], sets[3], sets[4])
        .post(&mut solver)
        .ok()?;
    constraints::set_strict_high_bound(sets[2], bound)
        .post(&mut solver)
        .ok()?;

    Some(Instance {
        solver,
        sets,
        bound,
    })
}

fn assert_same_domains(incremental: &Instance, from_scratch: &Instance) {
    for (&var, &other) in incremental.sets.iter().zip(&from_scratch.sets) {
        assert_eq!(incremental.solver.kernel(var), from_scratch.solver.kernel(other));
        assert_eq!(
            incremental.solver.envelope(var),
            from_scratch.solver.envelope(other)
        );
    }

    assert_eq!(
        incremental.solver.lower_bound(incremental.bound),
        from_scratch.solver.lower_bound(from_scratch.bound)
    );
    assert_eq!(
        incremental.solver.upper_bound(incremental.bound),
        from_scratch.solver.upper_bound(from_scratch.bound)
    );
}

#[test]
fn incremental_and_from_scratch_enumerate_the_same_solutions() {
    init_logging();

    for seed in 0..100 {
        let incremental = random_instance(seed, true);
        let from_scratch = random_instance(seed, false);

        let (Some(mut incremental), Some(mut from_scratch)) = (incremental, from_scratch) else {
            continue;
        };
        assert_same_domains(&incremental, &from_scratch);

        assert_eq!(
            from_scratch.solver.all_solutions(),
            incremental.solver.all_solutions()
        );
        assert_eq!(
            0,
            from_scratch
                .solver
                .statistics()
                .num_incremental_propagator_calls
        );
    }
}

#[test]
fn incremental_and_from_scratch_reach_the_same_fixpoint() {
    init_logging();
    let mut changes: SmallRng = rng(99);

    for seed in 0..100 {
        let (Some(mut incremental), Some(mut from_scratch)) =
            (random_instance(seed, true), random_instance(seed, false))
        else {
            continue;
        };

        for _ in 0..8 {
            let checkpoint = incremental.solver.get_checkpoint();
            incremental.solver.new_checkpoint();
            from_scratch.solver.new_checkpoint();

            // Replay the same change on both solvers.
            let change_seed = changes.gen::<u64>();
            random_set_change(
                &mut incremental.solver,
                &mut rng(change_seed),
                &incremental.sets,
                UNIVERSE,
            );
            random_set_change(
                &mut from_scratch.solver,
                &mut rng(change_seed),
                &from_scratch.sets,
                UNIVERSE,
            );

            let incremental_status = incremental.solver.propagate();
            let from_scratch_status = from_scratch.solver.propagate();
            assert_eq!(from_scratch_status.is_ok(), incremental_status.is_ok());

            if incremental_status.is_err() {
                incremental.solver.backtrack(checkpoint);
                from_scratch.solver.backtrack(checkpoint);
            }

            assert_same_domains(&incremental, &from_scratch);
        }
    }
}
