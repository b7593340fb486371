//! Contains structures related to the statistic logging of the [`Solver`].
mod statistic_logger;
mod statistic_logging;

use std::fmt::Display;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

#[cfg(doc)]
use crate::Solver;

/// Something which can be written to the statistic log under a name.
///
/// Every [`Display`] value is a statistic; [`create_statistics_struct!`] derives it for a struct of
/// counters, naming each counter after its field.
pub trait Statistic {
    fn log(&self, statistic_logger: StatisticLogger);
}

impl<Value: Display> Statistic for Value {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger.log_statistic(self);
    }
}

/// Declares a `Copy` struct of public counters which starts at zero and implements
/// [`Statistic`].
///
/// # Example
/// ```rust
/// # use calabash_core::create_statistics_struct;
/// create_statistics_struct!(EnumerationStatistics {
///     num_nodes: u64,
///     num_failures: u64,
/// });
///
/// let mut statistics = EnumerationStatistics::default();
/// statistics.num_nodes += 1;
///
/// assert_eq!(1, statistics.num_nodes);
/// assert_eq!(0, statistics.num_failures);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$struct_documentation:meta])* $name:ident { $($(#[$variable_documentation:meta])* $field:ident : $type:ident),+ $(,)? }) => {
        $(#[$struct_documentation])*
        #[derive(Default, Debug, Copy, Clone)]
        pub struct $name {
            $($(#[$variable_documentation])* pub $field: $type),+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, statistic_logger: $crate::statistics::StatisticLogger) {
                $($crate::statistics::Statistic::log(&self.$field, statistic_logger.attach_to_prefix(stringify!($field))));+
            }
        }
    };
}
