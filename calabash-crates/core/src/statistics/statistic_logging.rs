//! The global destination of the statistics: lines of the form `{prefix} {name}={value}`, written
//! to stdout unless another writer is configured.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

/// How statistics are written. Built with [`StatisticOptions::new`] and installed with
/// [`configure_statistic_logging`].
pub struct StatisticOptions {
    prefix: String,
    closing_line: Option<String>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl StatisticOptions {
    /// Statistics are written to stdout with the given prefix, with their names unchanged.
    pub fn new(prefix: impl Into<String>) -> Self {
        StatisticOptions {
            prefix: prefix.into(),
            closing_line: None,
            casing: None,
            writer: Box::new(std::io::stdout()),
        }
    }

    /// A line written by [`log_statistic_postfix`] once every statistic has been logged.
    pub fn with_closing_line(mut self, closing_line: impl Into<String>) -> Self {
        self.closing_line = Some(closing_line.into());
        self
    }

    /// Converts every statistic name to `casing` before writing it.
    pub fn with_casing(mut self, casing: Case) -> Self {
        self.casing = Some(casing);
        self
    }

    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    fn format_name(&self, name: impl Display) -> String {
        match self.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        }
    }
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("closing_line", &self.closing_line)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

/// Installs the options for statistic logging. Only the first call has an effect; until then no
/// statistics are written.
pub fn configure_statistic_logging(options: StatisticOptions) {
    let _ = STATISTIC_OPTIONS.set(Mutex::new(options));
}

fn with_options(write: impl FnOnce(&mut StatisticOptions)) {
    if let Some(Ok(mut options)) = STATISTIC_OPTIONS.get().map(Mutex::lock) {
        write(&mut options);
    }
}

/// Writes the statistic `name` with its `value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| {
        let name = options.format_name(name);
        let _ = writeln!(options.writer, "{} {name}={value}", options.prefix);
    });
}

/// Writes the closing line, if one was configured.
pub fn log_statistic_postfix() {
    with_options(|options| {
        if let Some(closing_line) = &options.closing_line {
            let _ = writeln!(options.writer, "{closing_line}");
        }
    });
}

/// Whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
