use std::fmt::Display;

/// Describes whether a constraint holds for every, no, or some completion of the current domains.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Entailment {
    /// Every completion of the current domains satisfies the constraint.
    Satisfied,
    /// No completion of the current domains satisfies the constraint.
    Violated,
    /// Some completions satisfy the constraint, others do not (or the propagator cannot tell yet).
    Undetermined,
}

impl Entailment {
    /// Combines the entailment of two constraints which should hold together.
    pub fn and(self, other: Entailment) -> Entailment {
        match (self, other) {
            (Entailment::Violated, _) | (_, Entailment::Violated) => Entailment::Violated,
            (Entailment::Satisfied, Entailment::Satisfied) => Entailment::Satisfied,
            _ => Entailment::Undetermined,
        }
    }
}

impl Display for Entailment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entailment::Satisfied => write!(f, "satisfied"),
            Entailment::Violated => write!(f, "violated"),
            Entailment::Undetermined => write!(f, "undetermined"),
        }
    }
}
