//! Statistic logging is configured once per process, so these tests live in their own binary.

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use calabash_core::constraints;
use calabash_core::constraints::Constraint;
use calabash_core::convert_case::Case;
use calabash_core::statistics::configure_statistic_logging;
use calabash_core::statistics::should_log_statistics;
use calabash_core::statistics::StatisticOptions;
use calabash_core::Solver;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().expect("not poisoned").clone();
        String::from_utf8(bytes)
            .expect("statistics are written as utf-8")
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("not poisoned").write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn solver_statistics_are_written_with_prefix_casing_and_closing_line() {
    let mut solver = Solver::default();
    let set = solver.new_set_variable(&[5], &[1, 5, 8]);
    let bound = solver.new_integer_variable(0, 7);
    constraints::set_strict_high_bound(set, bound)
        .post(&mut solver)
        .expect("no contradiction");

    // Nothing is written before the logging is configured.
    assert!(!should_log_statistics());
    solver.log_statistics();

    let buffer = SharedBuffer::default();
    configure_statistic_logging(
        StatisticOptions::new("%%")
            .with_casing(Case::Camel)
            .with_closing_line("%% end of statistics")
            .with_writer(buffer.clone()),
    );
    assert!(should_log_statistics());

    solver.log_statistics();

    assert_eq!(
        vec![
            "%% numPropagatorCallsFromScratch=1",
            "%% numIncrementalPropagatorCalls=0",
            "%% numContradictions=0",
            "%% numDecisions=0",
            "%% numSolutions=0",
            "%% end of statistics",
        ],
        buffer.lines()
    );
}
