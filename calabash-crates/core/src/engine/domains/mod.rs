mod assignments;
mod int_domain;
mod set_domain;

pub(crate) use assignments::Assignments;
pub(crate) use int_domain::IntDomain;
pub(crate) use set_domain::SetDomain;
