use std::fmt::Display;

use enumset::enum_set;
use enumset::EnumSet;
use enumset::EnumSetType;

/// A description of the kinds of events that can happen on a domain.
#[derive(Debug, EnumSetType, Hash)]
pub enum DomainEvent {
    /// A value was added to the kernel of a set variable.
    KernelGrew,
    /// A value was removed from the envelope of a set variable.
    EnvelopeShrank,
    /// The lower bound of an integer variable was raised.
    LowerRaised,
    /// The upper bound of an integer variable was lowered.
    UpperLowered,
    /// The domain of an integer variable collapsed to a single value.
    Instantiated,
}

impl Display for DomainEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainEvent::KernelGrew => write!(f, "[Event:Kernel]"),
            DomainEvent::EnvelopeShrank => write!(f, "[Event:Envelope]"),
            DomainEvent::LowerRaised => write!(f, "[Event:LB]"),
            DomainEvent::UpperLowered => write!(f, "[Event:UB]"),
            DomainEvent::Instantiated => write!(f, "[Event:Instantiated]"),
        }
    }
}

/// The events a propagator subscribes to for a single variable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DomainEvents {
    events: EnumSet<DomainEvent>,
}

impl DomainEvents {
    /// Both set events: the kernel growing and the envelope shrinking.
    pub const ANY_SET: DomainEvents =
        DomainEvents::create(enum_set!(DomainEvent::KernelGrew | DomainEvent::EnvelopeShrank));
    /// Only the kernel of a set variable growing.
    pub const KERNEL: DomainEvents = DomainEvents::create(enum_set!(DomainEvent::KernelGrew));
    /// Only the envelope of a set variable shrinking.
    pub const ENVELOPE: DomainEvents =
        DomainEvents::create(enum_set!(DomainEvent::EnvelopeShrank));
    /// Every change to an integer variable.
    pub const ANY_INT: DomainEvents = DomainEvents::create(enum_set!(
        DomainEvent::LowerRaised | DomainEvent::UpperLowered | DomainEvent::Instantiated
    ));
    /// Both bounds of an integer variable tightening.
    pub const BOUNDS: DomainEvents =
        DomainEvents::create(enum_set!(DomainEvent::LowerRaised | DomainEvent::UpperLowered));
    /// The upper bound of an integer variable being lowered, or the variable being fixed.
    pub const UPPER_BOUND_AND_ASSIGN: DomainEvents = DomainEvents::create(enum_set!(
        DomainEvent::UpperLowered | DomainEvent::Instantiated
    ));

    pub const fn create(events: EnumSet<DomainEvent>) -> DomainEvents {
        DomainEvents { events }
    }

    pub fn events(&self) -> EnumSet<DomainEvent> {
        self.events
    }
}
