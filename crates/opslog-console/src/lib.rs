//! # opslog-console
//!
//! Console backend for opslog. Events are rendered through the per-kind
//! line formats and written, one line per record, to standard output (or
//! standard error). An optional marker filter limits which record kinds a
//! given backend instance emits, mirroring how deployments split audit,
//! metric and error records across sinks.
//!
//! ```no_run
//! opslog_console::init();
//!
//! let logger = opslog_core::Logger::named("orders::Checkout");
//! logger.debug().debug("checkout starting", None, None, &[]);
//! ```

use std::io::Write;
use std::sync::Arc;

use opslog_core::format::{console_line, interpolate};
use opslog_core::{install_backend, LogBackend, LogKind, Severity};

/// Process stream the console backend writes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Accept-list of marker names, built from a comma-separated configuration
/// value. An empty filter accepts nothing; no filter accepts everything.
#[derive(Debug, Clone, Default)]
pub struct MarkerFilter {
    markers: Vec<String>,
}

impl MarkerFilter {
    /// Parse a comma-separated marker list, e.g. `"AUDIT_LOG, ERROR_LOG"`.
    pub fn new(markers: &str) -> Self {
        Self {
            markers: markers
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn accepts(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }
}

/// Backend writing formatted lines to a console stream.
#[derive(Debug, Default)]
pub struct ConsoleBackend {
    target: ConsoleTarget,
    filter: Option<MarkerFilter>,
}

impl ConsoleBackend {
    pub fn new(target: ConsoleTarget) -> Self {
        Self {
            target,
            filter: None,
        }
    }

    /// Restrict this backend to the markers the filter accepts.
    pub fn with_filter(mut self, filter: MarkerFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    fn write_line(&self, line: &str) {
        // a console write failure must never propagate into the caller
        let result = match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(line.as_bytes()),
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(line.as_bytes()),
        };
        if let Err(err) = result {
            tracing::debug!(%err, "console write failed");
        }
    }
}

impl LogBackend for ConsoleBackend {
    fn emit(&self, kind: LogKind, _severity: Severity, message: &str, args: &[&str]) {
        let marker = kind.marker();
        if let Some(filter) = &self.filter {
            if !filter.accepts(marker) {
                return;
            }
        }
        let thread = std::thread::current();
        let thread_name = match thread.name() {
            Some(name) => name.to_string(),
            None => format!("{:?}", thread.id()),
        };
        let message = interpolate(message, args);
        match console_line(marker, &thread_name, &message) {
            Ok(line) => self.write_line(&line),
            Err(err) => tracing::error!(%err, %kind, "failed to format log record"),
        }
    }
}

/// Install a console backend writing every record kind to standard output.
///
/// Returns false when another backend was installed first.
pub fn init() -> bool {
    install_backend(Arc::new(ConsoleBackend::default()))
}
