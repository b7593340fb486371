use std::ops::Range;

use calabash_core::variables::IntDomainId;
use calabash_core::variables::SetDomainId;
use calabash_core::Solver;
use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Every set between `kernel` and `envelope`, each in increasing order.
pub(crate) fn completions(kernel: &[i32], envelope: &[i32]) -> Vec<Vec<i32>> {
    let free = envelope
        .iter()
        .copied()
        .filter(|value| !kernel.contains(value))
        .collect::<Vec<_>>();

    (0..1_u32 << free.len())
        .map(|mask| {
            kernel
                .iter()
                .copied()
                .chain(
                    free.iter()
                        .enumerate()
                        .filter(|&(index, _)| mask & (1 << index) != 0)
                        .map(|(_, &value)| value),
                )
                .sorted_unstable()
                .collect()
        })
        .collect()
}

/// Every value which the set variable can take under the current domains.
pub(crate) fn set_values(solver: &Solver, var: SetDomainId) -> Vec<Vec<i32>> {
    completions(&solver.kernel(var), &solver.envelope(var))
}

/// Every combination of values of the given set variables under the current domains.
pub(crate) fn set_assignments(solver: &Solver, vars: &[SetDomainId]) -> Vec<Vec<Vec<i32>>> {
    vars.iter()
        .map(|&var| set_values(solver, var))
        .multi_cartesian_product()
        .collect()
}

pub(crate) fn int_values(solver: &Solver, var: IntDomainId) -> Vec<i32> {
    (solver.lower_bound(var)..=solver.upper_bound(var)).collect()
}

/// Creates a set variable over `universe` in which every value is either excluded, required or
/// undecided with equal probability.
pub(crate) fn random_set_variable(
    solver: &mut Solver,
    rng: &mut SmallRng,
    universe: Range<i32>,
) -> SetDomainId {
    let mut kernel = vec![];
    let mut envelope = vec![];

    for value in universe {
        match rng.gen_range(0..3) {
            0 => {}
            1 => {
                kernel.push(value);
                envelope.push(value);
            }
            _ => envelope.push(value),
        }
    }

    solver.new_set_variable(&kernel, &envelope)
}

/// Makes a random change to one of `vars` without propagating it; changes which empty a domain
/// are skipped.
pub(crate) fn random_set_change(
    solver: &mut Solver,
    rng: &mut SmallRng,
    vars: &[SetDomainId],
    universe: Range<i32>,
) {
    let var = vars[rng.gen_range(0..vars.len())];
    let value = rng.gen_range(universe);

    let _ = if rng.gen_bool(0.5) {
        solver.add_to_kernel(var, value)
    } else {
        solver.remove_from_envelope(var, value)
    };
}

pub(crate) fn difference(minuend: &[i32], subtrahend: &[i32]) -> Vec<i32> {
    minuend
        .iter()
        .copied()
        .filter(|value| !subtrahend.contains(value))
        .collect()
}

/// The nodes reachable from `node` through at least one edge, in increasing order.
pub(crate) fn reachable(successors: &[Vec<i32>], node: usize) -> Vec<i32> {
    let mut is_reached = vec![false; successors.len()];
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        for &next in &successors[current] {
            let next = next as usize;
            if !is_reached[next] {
                is_reached[next] = true;
                stack.push(next);
            }
        }
    }

    (0..successors.len())
        .filter(|&other| is_reached[other])
        .map(|other| other as i32)
        .collect()
}

/// Whether every closure set only contains nodes reachable from its own node.
pub(crate) fn is_at_most_transitive_closure(
    relation: &[Vec<i32>],
    closure: &[Vec<i32>],
    reflexive: bool,
) -> bool {
    closure.iter().enumerate().all(|(node, values)| {
        let reached = reachable(relation, node);
        values
            .iter()
            .all(|&value| reached.contains(&value) || (reflexive && value == node as i32))
    })
}

#[test]
fn completions_enumerate_every_set_between_the_bounds() {
    assert_eq!(
        vec![vec![1], vec![0, 1], vec![1, 2], vec![0, 1, 2]],
        completions(&[1], &[0, 1, 2])
    );
}

#[test]
fn reachable_follows_paths() {
    let successors = vec![vec![1], vec![2], vec![1], vec![]];

    assert_eq!(vec![1, 2], reachable(&successors, 0));
    assert_eq!(vec![1, 2], reachable(&successors, 1));
    assert!(reachable(&successors, 3).is_empty());
}
