//! Log façades: the per-kind entry points callers log through.
//!
//! A [`Logger`] is obtained per originating type (or per name) and hands out
//! one façade per record kind. Every façade call follows the same shape:
//! write the call's ambient values into the diagnostic context, hand the
//! event to the installed backend, and clear the context when the backend
//! returns — normally or by panic. The façade performs no retries; a failed
//! emit is the backend's concern.

use crate::backend::{active_backend, LogKind};
use crate::context::{CallScope, RequiredSpec};
use crate::severity::Severity;
use crate::spec::{AuditLogSpec, DebugLogSpec, ErrorLogSpec, MetricLogSpec, OptionalLogSpec};

/// Entry point handle carrying the originating type name.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    origin: &'static str,
}

impl Logger {
    /// Logger attributed to a type.
    pub fn for_type<T: ?Sized>() -> Self {
        Self {
            origin: std::any::type_name::<T>(),
        }
    }

    /// Logger attributed to an explicit name.
    pub const fn named(origin: &'static str) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> &'static str {
        self.origin
    }

    pub fn audit(&self) -> AuditLog {
        AuditLog {
            origin: self.origin,
        }
    }

    pub fn metric(&self) -> MetricLog {
        MetricLog {
            origin: self.origin,
        }
    }

    pub fn error(&self) -> ErrorLog {
        ErrorLog {
            origin: self.origin,
        }
    }

    pub fn debug(&self) -> DebugLog {
        DebugLog {
            origin: self.origin,
        }
    }
}

/// Façade for audit records.
#[derive(Debug, Clone, Copy)]
pub struct AuditLog {
    origin: &'static str,
}

impl AuditLog {
    /// Emit an audit record at an explicit severity.
    pub fn log(
        &self,
        severity: Severity,
        message: &str,
        spec: &AuditLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        let _scope = CallScope::enter(
            severity,
            self.origin,
            RequiredSpec::Audit(spec.clone()),
            optional.cloned(),
        );
        active_backend().emit(LogKind::Audit, severity, message, args);
    }

    pub fn info(
        &self,
        message: &str,
        spec: &AuditLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Info, message, spec, optional, args);
    }

    pub fn warn(
        &self,
        message: &str,
        spec: &AuditLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Warn, message, spec, optional, args);
    }

    pub fn error(
        &self,
        message: &str,
        spec: &AuditLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Error, message, spec, optional, args);
    }

    pub fn fatal(
        &self,
        message: &str,
        spec: &AuditLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Fatal, message, spec, optional, args);
    }
}

/// Façade for metric records.
#[derive(Debug, Clone, Copy)]
pub struct MetricLog {
    origin: &'static str,
}

impl MetricLog {
    /// Emit a metric record at an explicit severity.
    pub fn log(
        &self,
        severity: Severity,
        message: &str,
        spec: &MetricLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        let _scope = CallScope::enter(
            severity,
            self.origin,
            RequiredSpec::Metric(spec.clone()),
            optional.cloned(),
        );
        active_backend().emit(LogKind::Metric, severity, message, args);
    }

    pub fn info(
        &self,
        message: &str,
        spec: &MetricLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Info, message, spec, optional, args);
    }

    pub fn warn(
        &self,
        message: &str,
        spec: &MetricLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Warn, message, spec, optional, args);
    }

    pub fn error(
        &self,
        message: &str,
        spec: &MetricLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Error, message, spec, optional, args);
    }

    pub fn fatal(
        &self,
        message: &str,
        spec: &MetricLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Fatal, message, spec, optional, args);
    }
}

/// Façade for error records.
#[derive(Debug, Clone, Copy)]
pub struct ErrorLog {
    origin: &'static str,
}

impl ErrorLog {
    /// Emit an error record at an explicit severity.
    pub fn log(
        &self,
        severity: Severity,
        message: &str,
        spec: &ErrorLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        let _scope = CallScope::enter(
            severity,
            self.origin,
            RequiredSpec::Error(spec.clone()),
            optional.cloned(),
        );
        active_backend().emit(LogKind::Error, severity, message, args);
    }

    pub fn error(
        &self,
        message: &str,
        spec: &ErrorLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Error, message, spec, optional, args);
    }

    pub fn warn(
        &self,
        message: &str,
        spec: &ErrorLogSpec,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Warn, message, spec, optional, args);
    }
}

/// Façade for debug records.
///
/// The debug kind is the only one whose required spec is itself optional: a
/// call with no spec degrades to a freshly generated request identity at
/// resolution time.
#[derive(Debug, Clone, Copy)]
pub struct DebugLog {
    origin: &'static str,
}

impl DebugLog {
    /// Emit a debug record at an explicit severity.
    pub fn log(
        &self,
        severity: Severity,
        message: &str,
        spec: Option<&DebugLogSpec>,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        let _scope = CallScope::enter(
            severity,
            self.origin,
            RequiredSpec::Debug(spec.cloned()),
            optional.cloned(),
        );
        active_backend().emit(LogKind::Debug, severity, message, args);
    }

    pub fn debug(
        &self,
        message: &str,
        spec: Option<&DebugLogSpec>,
        optional: Option<&OptionalLogSpec>,
        args: &[&str],
    ) {
        self.log(Severity::Debug, message, spec, optional, args);
    }
}
