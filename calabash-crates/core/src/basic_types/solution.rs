use crate::calabash_assert_simple;
use crate::containers::KeyedVec;
use crate::engine::domains::Assignments;
use crate::engine::variables::IntDomainId;
use crate::engine::variables::SetDomainId;

/// A complete assignment: the value of every set variable and every integer variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    sets: KeyedVec<SetDomainId, Vec<i32>>,
    integers: KeyedVec<IntDomainId, i32>,
}

impl Solution {
    /// The elements of `var` in increasing order.
    pub fn set_value(&self, var: SetDomainId) -> &[i32] {
        &self.sets[var]
    }

    pub fn integer_value(&self, var: IntDomainId) -> i32 {
        self.integers[var]
    }

    pub fn num_set_variables(&self) -> usize {
        self.sets.len()
    }

    pub fn num_integer_variables(&self) -> usize {
        self.integers.len()
    }

    /// Takes the values of fully instantiated domains.
    pub(crate) fn from_assignments(assignments: &Assignments) -> Self {
        let mut sets = KeyedVec::default();
        for domain_id in assignments.set_domain_ids() {
            let domain = assignments.set_domain(domain_id);
            calabash_assert_simple!(domain.is_instantiated());
            let _ = sets.push(domain.kernel().collect());
        }

        let mut integers = KeyedVec::default();
        for domain_id in assignments.int_domain_ids() {
            let domain = assignments.int_domain(domain_id);
            calabash_assert_simple!(domain.is_fixed());
            let _ = integers.push(domain.lower_bound());
        }

        Solution { sets, integers }
    }
}
