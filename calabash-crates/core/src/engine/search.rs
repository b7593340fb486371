//! Exhaustive depth-first enumeration of the solutions of a [`Solver`].
//!
//! The branching order is fixed: the smallest undecided element of the first undecided set
//! variable is included, then excluded; afterwards the first unfixed integer variable is split
//! into its lower bound and the rest of its domain.

use log::debug;
use log::info;

use super::variables::IntDomainId;
use super::variables::SetDomainId;
use super::Solver;
use crate::basic_types::Contradiction;
use crate::basic_types::Entailment;
use crate::basic_types::Solution;
use crate::calabash_assert_moderate;

#[derive(Clone, Copy, Debug)]
enum Decision {
    /// Decides whether `value` is part of `domain`.
    SetElement { domain: SetDomainId, value: i32 },
    /// Decides whether `domain` takes the value `value` or a larger one.
    IntegerSplit { domain: IntDomainId, value: i32 },
}

impl Decision {
    /// Applies the left (`positive`) or right branch of the decision.
    fn apply(self, solver: &mut Solver, positive: bool) -> Result<(), Contradiction> {
        match (self, positive) {
            (Decision::SetElement { domain, value }, true) => solver.add_to_kernel(domain, value),
            (Decision::SetElement { domain, value }, false) => {
                solver.remove_from_envelope(domain, value)
            }
            (Decision::IntegerSplit { domain, value }, true) => solver.set_upper_bound(domain, value),
            (Decision::IntegerSplit { domain, value }, false) => {
                solver.set_lower_bound(domain, value + 1)
            }
        }
    }
}

impl Solver {
    /// Calls `on_solution` for every solution of the posted constraints, and returns the number of
    /// solutions.
    ///
    /// The domains are left as they were before the call, including changes which had not been
    /// propagated yet.
    pub fn for_each_solution(&mut self, mut on_solution: impl FnMut(&Solution)) -> usize {
        if self.is_infeasible() {
            return 0;
        }

        let root = self.get_checkpoint();
        self.new_checkpoint();

        let mut num_solutions = 0;
        self.enumerate(&mut on_solution, &mut num_solutions);

        self.backtrack(root);
        info!("Enumeration finished with {num_solutions} solutions");

        num_solutions
    }

    /// Returns every solution in the order in which they are enumerated.
    pub fn all_solutions(&mut self) -> Vec<Solution> {
        let mut solutions = vec![];
        let _ = self.for_each_solution(|solution| solutions.push(solution.clone()));
        solutions
    }

    fn enumerate(&mut self, on_solution: &mut impl FnMut(&Solution), num_solutions: &mut usize) {
        if self.propagate().is_err() {
            return;
        }

        let Some(decision) = self.next_decision() else {
            calabash_assert_moderate!(self.entailment_of_all() == Entailment::Satisfied);

            *num_solutions += 1;
            self.statistics.num_solutions += 1;
            on_solution(&Solution::from_assignments(self.assignments()));
            return;
        };

        for positive in [true, false] {
            let checkpoint = self.get_checkpoint();
            self.new_checkpoint();
            self.statistics.num_decisions += 1;

            match decision.apply(self, positive) {
                Ok(()) => self.enumerate(on_solution, num_solutions),
                Err(contradiction) => debug!("{decision:?} failed immediately: {contradiction}"),
            }

            self.backtrack(checkpoint);
        }
    }

    fn next_decision(&self) -> Option<Decision> {
        let assignments = self.assignments();

        let set_decision = assignments.set_domain_ids().find_map(|domain| {
            let set_domain = assignments.set_domain(domain);
            set_domain
                .envelope()
                .find(|&value| !set_domain.kernel_contains(value))
                .map(|value| Decision::SetElement { domain, value })
        });

        set_decision.or_else(|| {
            assignments.int_domain_ids().find_map(|domain| {
                let int_domain = assignments.int_domain(domain);
                (!int_domain.is_fixed()).then(|| Decision::IntegerSplit {
                    domain,
                    value: int_domain.lower_bound(),
                })
            })
        })
    }
}
