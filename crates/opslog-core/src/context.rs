//! Diagnostic call context: thread-scoped slots bridging a façade call to
//! its later formatting step.
//!
//! A façade call writes the ambient values for one log invocation (severity,
//! originating type, the required spec, the optional spec) into the current
//! thread's slots, invokes the backend, and clears the slots when it
//! returns. Cleanup is enforced by [`CallScope`], an RAII guard that clears
//! on drop, so the slots are emptied even when the backend panics. Slots are
//! `thread_local!`: concurrent callers on different threads never observe
//! each other's entries and no locking is involved.
//!
//! The process-scoped application identity lives outside the per-thread
//! slots, in a write-once process cell.

use std::cell::RefCell;

use once_cell::sync::OnceCell;

use crate::severity::Severity;
use crate::spec::{
    AppLogSpec, AuditLogSpec, DebugLogSpec, ErrorLogSpec, MetricLogSpec, OptionalLogSpec,
};

#[derive(Debug, Default)]
struct CallSlots {
    severity: Option<Severity>,
    origin: Option<&'static str>,
    audit: Option<AuditLogSpec>,
    metric: Option<MetricLogSpec>,
    error: Option<ErrorLogSpec>,
    debug: Option<DebugLogSpec>,
    optional: Option<OptionalLogSpec>,
}

impl CallSlots {
    fn is_empty(&self) -> bool {
        self.severity.is_none()
            && self.origin.is_none()
            && self.audit.is_none()
            && self.metric.is_none()
            && self.error.is_none()
            && self.debug.is_none()
            && self.optional.is_none()
    }
}

thread_local! {
    static CALL_SLOTS: RefCell<CallSlots> = RefCell::new(CallSlots::default());
}

/// The required spec written for one façade call.
#[derive(Debug)]
pub(crate) enum RequiredSpec {
    Audit(AuditLogSpec),
    Metric(MetricLogSpec),
    Error(ErrorLogSpec),
    // the debug kind tolerates a fully-absent spec
    Debug(Option<DebugLogSpec>),
}

/// RAII guard for one façade call's context entries.
///
/// Entering a scope writes the call's slots; dropping it clears every slot,
/// whether the call returned normally or unwound.
pub(crate) struct CallScope {
    _private: (),
}

impl CallScope {
    pub(crate) fn enter(
        severity: Severity,
        origin: &'static str,
        required: RequiredSpec,
        optional: Option<OptionalLogSpec>,
    ) -> Self {
        CALL_SLOTS.with(|slots| {
            let mut slots = slots.borrow_mut();
            slots.severity = Some(severity);
            slots.origin = Some(origin);
            slots.optional = optional;
            match required {
                RequiredSpec::Audit(spec) => slots.audit = Some(spec),
                RequiredSpec::Metric(spec) => slots.metric = Some(spec),
                RequiredSpec::Error(spec) => slots.error = Some(spec),
                RequiredSpec::Debug(spec) => slots.debug = spec,
            }
        });
        Self { _private: () }
    }
}

impl Drop for CallScope {
    fn drop(&mut self) {
        CALL_SLOTS.with(|slots| {
            *slots.borrow_mut() = CallSlots::default();
        });
    }
}

/// True when no façade call is in flight on the current thread.
///
/// Exposed so backends and tests can assert that context entries never leak
/// across calls.
pub fn is_empty() -> bool {
    CALL_SLOTS.with(|slots| slots.borrow().is_empty())
}

pub(crate) fn severity() -> Option<Severity> {
    CALL_SLOTS.with(|slots| slots.borrow().severity)
}

pub(crate) fn origin() -> Option<&'static str> {
    CALL_SLOTS.with(|slots| slots.borrow().origin)
}

pub(crate) fn audit_spec() -> Option<AuditLogSpec> {
    CALL_SLOTS.with(|slots| slots.borrow().audit.clone())
}

pub(crate) fn metric_spec() -> Option<MetricLogSpec> {
    CALL_SLOTS.with(|slots| slots.borrow().metric.clone())
}

pub(crate) fn error_spec() -> Option<ErrorLogSpec> {
    CALL_SLOTS.with(|slots| slots.borrow().error.clone())
}

pub(crate) fn debug_spec() -> Option<DebugLogSpec> {
    CALL_SLOTS.with(|slots| slots.borrow().debug.clone())
}

pub(crate) fn optional_spec() -> Option<OptionalLogSpec> {
    CALL_SLOTS.with(|slots| slots.borrow().optional.clone())
}

// ---------------------------------------------------------------------------
// Process-scoped application identity
// ---------------------------------------------------------------------------

static APP_SPEC: OnceCell<AppLogSpec> = OnceCell::new();

/// Install the process-wide application spec. The first installation wins;
/// returns false (and leaves the existing spec in place) on later attempts.
pub fn init_app_spec(spec: AppLogSpec) -> bool {
    let installed = APP_SPEC.set(spec).is_ok();
    if !installed {
        tracing::warn!("application log spec already initialized; ignoring replacement");
    }
    installed
}

/// The process-wide application spec, detecting one from the environment on
/// first access if none was installed.
pub fn app_spec() -> AppLogSpec {
    APP_SPEC.get_or_init(AppLogSpec::detect).clone()
}
