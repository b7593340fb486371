//! Everything related to informing propagators about changes to the domains of the variables they
//! watch: the kinds of events, the sink which captures them, the per-propagator deltas and the
//! watch lists.
mod delta;
mod domain_events;
mod event_sink;
mod watch_list;

pub use delta::Delta;
pub use domain_events::DomainEvent;
pub use domain_events::DomainEvents;
pub(crate) use event_sink::EventSink;
pub(crate) use watch_list::WatchList;
