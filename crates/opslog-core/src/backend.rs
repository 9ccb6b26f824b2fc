//! Backend contract and registration.
//!
//! The core never writes bytes itself: a façade hands each event (kind
//! marker, severity, message template, args) to the installed backend, which
//! formats and emits it synchronously on the caller's thread. Backends are
//! registered explicitly at process start; when nothing is registered every
//! event falls through to a no-op backend and a single diagnostic line is
//! written to standard error announcing degraded mode.

use std::fmt;
use std::sync::{Arc, Once};

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};

/// Marker distinguishing the record kinds for dispatch to the matching line
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Audit,
    Metric,
    Error,
    Debug,
}

impl LogKind {
    /// Stable marker name attached to emitted events.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Audit => "AUDIT_LOG",
            Self::Metric => "METRIC_LOG",
            Self::Error => "ERROR_LOG",
            Self::Debug => "DEBUG_LOG",
        }
    }

    /// Parse a marker name back into a kind. Unknown markers yield `None`;
    /// dispatchers render a placeholder line for those instead of failing.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "AUDIT_LOG" => Some(Self::Audit),
            "METRIC_LOG" => Some(Self::Metric),
            "ERROR_LOG" => Some(Self::Error),
            "DEBUG_LOG" => Some(Self::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audit => write!(f, "audit"),
            Self::Metric => write!(f, "metric"),
            Self::Error => write!(f, "error"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

/// A logging backend performs the actual emission.
///
/// `emit` is called synchronously during a façade call, while that call's
/// context entries are in place; implementations interpolate the message,
/// pull the resolved specs through the line formatters and write the result.
/// Emission failures are the backend's concern: they must not propagate into
/// the calling application.
pub trait LogBackend: Send + Sync {
    fn emit(&self, kind: LogKind, severity: crate::severity::Severity, message: &str, args: &[&str]);
}

static BACKEND: OnceCell<Arc<dyn LogBackend>> = OnceCell::new();
static NOOP: Lazy<Arc<NoOpBackend>> = Lazy::new(|| Arc::new(NoOpBackend));
static DEGRADED_NOTICE: Once = Once::new();

/// Install the process-wide logging backend.
///
/// The first installation wins; later attempts are rejected and return
/// false, leaving the existing backend in place.
pub fn install_backend(backend: Arc<dyn LogBackend>) -> bool {
    let installed = BACKEND.set(backend).is_ok();
    if installed {
        tracing::debug!("log backend installed");
    } else {
        tracing::warn!("log backend already installed; ignoring replacement");
    }
    installed
}

/// True when a backend has been installed.
pub fn backend_installed() -> bool {
    BACKEND.get().is_some()
}

/// The backend events are routed to: the installed one, or the no-op
/// fallback. The fallback announces degraded mode on standard error exactly
/// once per process.
pub(crate) fn active_backend() -> Arc<dyn LogBackend> {
    match BACKEND.get() {
        Some(backend) => Arc::clone(backend),
        None => {
            DEGRADED_NOTICE.call_once(|| {
                eprintln!("opslog: no log backend installed; structured logging is disabled");
            });
            let fallback: Arc<dyn LogBackend> = NOOP.clone();
            fallback
        }
    }
}

/// Backend that drops every event.
#[derive(Debug, Default)]
pub struct NoOpBackend;

impl LogBackend for NoOpBackend {
    fn emit(
        &self,
        _kind: LogKind,
        _severity: crate::severity::Severity,
        _message: &str,
        _args: &[&str],
    ) {
    }
}
