//! Severity vocabulary and the derivations that hang off it.
//!
//! Severity is ambient per call: the façade records it in the call context
//! and every record kind renders it. Request status and alert level are
//! derived from it when the caller does not supply a message group.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Log severity attached to every façade call.
///
/// `Fatal` has no distinct output channel of its own; backends that map to
/// conventional leveled sinks treat it as an error-level event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Stable upper-case name as rendered in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("DEBUG") => Ok(Self::Debug),
            v if v.eq_ignore_ascii_case("INFO") => Ok(Self::Info),
            v if v.eq_ignore_ascii_case("WARN") => Ok(Self::Warn),
            v if v.eq_ignore_ascii_case("ERROR") => Ok(Self::Error),
            v if v.eq_ignore_ascii_case("FATAL") => Ok(Self::Fatal),
            other => Err(Error::InvalidArgument(format!(
                "unrecognized severity: {other:?}"
            ))),
        }
    }
}

/// Coarse request outcome carried in the message group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestStatus {
    Complete,
    Error,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "COMPLETE",
            Self::Error => "ERROR",
        }
    }

    /// Status derived from the ambient severity. Total over an absent
    /// severity: anything that is not an explicit non-error level counts as
    /// an error outcome.
    pub fn for_severity(severity: Option<Severity>) -> Self {
        match severity {
            Some(Severity::Debug) | Some(Severity::Info) | Some(Severity::Warn) => Self::Complete,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monitoring alert level with its numeric wire code.
///
/// | Code | Level |
/// |------|----------|
/// | 0    | OK       |
/// | 1    | WARNING  |
/// | 2    | CRITICAL |
/// | 3    | UNKNOWN  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl AlertLevel {
    /// Numeric code rendered in log lines.
    pub fn code(self) -> &'static str {
        match self {
            Self::Ok => "0",
            Self::Warning => "1",
            Self::Critical => "2",
            Self::Unknown => "3",
        }
    }

    /// Alert level derived from the ambient severity; an absent severity
    /// maps to `Unknown`.
    pub fn for_severity(severity: Option<Severity>) -> Self {
        match severity {
            Some(Severity::Debug) | Some(Severity::Info) => Self::Ok,
            Some(Severity::Warn) => Self::Warning,
            Some(Severity::Error) | Some(Severity::Fatal) => Self::Critical,
            None => Self::Unknown,
        }
    }
}
