use crate::basic_types::Contradiction;

/// The domain of an integer variable, represented by its bounds only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IntDomain {
    lower_bound: i32,
    upper_bound: i32,
}

impl IntDomain {
    pub(crate) fn new(lower_bound: i32, upper_bound: i32) -> IntDomain {
        IntDomain {
            lower_bound,
            upper_bound,
        }
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    /// Raises the lower bound to `value`; returns whether the domain changed.
    pub(crate) fn set_lower_bound(&mut self, value: i32) -> Result<bool, Contradiction> {
        if value <= self.lower_bound {
            return Ok(false);
        }
        if value > self.upper_bound {
            return Err(Contradiction::EmptyDomain);
        }

        self.lower_bound = value;
        Ok(true)
    }

    /// Lowers the upper bound to `value`; returns whether the domain changed.
    pub(crate) fn set_upper_bound(&mut self, value: i32) -> Result<bool, Contradiction> {
        if value >= self.upper_bound {
            return Ok(false);
        }
        if value < self.lower_bound {
            return Err(Contradiction::EmptyDomain);
        }

        self.upper_bound = value;
        Ok(true)
    }
}
