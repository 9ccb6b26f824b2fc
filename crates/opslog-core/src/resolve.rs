//! Default resolution: turn whatever the call context holds into fully
//! populated specifications.
//!
//! Resolution is checked independently per field group; the first present
//! value wins: caller-supplied → freshly generated (request ids) → static
//! default (see [`crate::defaults`]). The audit, metric and error kinds
//! require a spec to be present in the context at all; the debug kind
//! degrades to a defaulted request identity.

use chrono::Utc;

use crate::backend::LogKind;
use crate::context;
use crate::defaults;
use crate::error::{Error, Result};
use crate::groups::{CodeLocation, MessageInfo, RequestId, RequestTiming};
use crate::severity::{AlertLevel, RequestStatus, Severity};
use crate::spec::{
    AppLogSpec, AuditLogSpec, DebugLogSpec, ErrorLogSpec, MetricLogSpec, OptionalLogSpec,
};

/// Ambient severity of the active call, if any.
pub fn active_severity() -> Option<Severity> {
    context::severity()
}

/// Resolve the audit spec of the active call.
pub fn resolved_audit() -> Result<AuditLogSpec> {
    let mut spec = context::audit_spec().ok_or(Error::MissingRequiredSpec(LogKind::Audit))?;
    if spec.request_id_group().is_none() {
        spec = spec.with_request_id(RequestId::generate());
    }
    if spec.service().is_none() {
        spec = spec.with_service(defaults::service_identity());
    }
    if spec.response().is_none() {
        spec = spec.with_response(defaults::response_info());
    }
    let timing = resolve_timing(spec.timing());
    Ok(spec.with_timing(timing))
}

/// Resolve the metric spec of the active call.
pub fn resolved_metric() -> Result<MetricLogSpec> {
    let mut spec = context::metric_spec().ok_or(Error::MissingRequiredSpec(LogKind::Metric))?;
    if spec.request_id_group().is_none() {
        spec = spec.with_request_id(RequestId::generate());
    }
    if spec.service().is_none() {
        spec = spec.with_service(defaults::service_identity());
    }
    if spec.response().is_none() {
        spec = spec.with_response(defaults::response_info());
    }
    if spec.target().is_none() {
        spec = spec.with_target(defaults::target_service());
    }
    let timing = resolve_timing(spec.timing());
    Ok(spec.with_timing(timing))
}

/// Resolve the error spec of the active call.
pub fn resolved_error() -> Result<ErrorLogSpec> {
    let mut spec = context::error_spec().ok_or(Error::MissingRequiredSpec(LogKind::Error))?;
    if spec.request_id_group().is_none() {
        spec = spec.with_request_id(RequestId::generate());
    }
    if spec.service().is_none() {
        spec = spec.with_service(defaults::service_identity());
    }
    if spec.target().is_none() {
        spec = spec.with_target(defaults::target_service());
    }
    if spec.error().is_none() {
        spec = spec.with_error(defaults::error_info());
    }
    Ok(spec)
}

/// Resolve the debug spec of the active call; a fully-absent spec degrades
/// to a freshly generated request identity.
pub fn resolved_debug() -> DebugLogSpec {
    match context::debug_spec() {
        Some(spec) if spec.request_id_group().is_some() => spec,
        _ => DebugLogSpec::new(Some(RequestId::generate())),
    }
}

/// Resolve the optional spec of the active call, deriving message metadata
/// from the ambient severity and the code location from the façade caller's
/// type where absent.
pub fn resolved_optional() -> OptionalLogSpec {
    let severity = context::severity();
    let origin = context::origin();
    let mut spec = context::optional_spec().unwrap_or_default();

    if spec.message().map_or(true, MessageInfo::is_empty) {
        spec = spec.with_message(derived_message(severity));
    }
    if spec.code().map_or(true, CodeLocation::is_empty) {
        spec = spec.with_code(derived_code_location(origin));
    }
    if spec.custom().is_none() {
        spec = spec.with_custom(defaults::custom_fields());
    }
    if spec.misc().is_none() {
        spec = spec.with_misc(defaults::misc_fields());
    }
    spec
}

/// Resolve the process-scoped application spec.
pub fn resolved_app() -> AppLogSpec {
    context::app_spec()
}

/// Substitute an incomplete timing group and derive elapsed time.
///
/// A group missing either timestamp is replaced wholesale by the default
/// zero-width span at the current instant. Elapsed is derived as `end -
/// begin` only when the caller left it absent; a caller-supplied value,
/// inverted or not, passes through.
fn resolve_timing(timing: Option<&RequestTiming>) -> RequestTiming {
    let timing = match timing {
        Some(t) if t.begin().is_some() && t.end().is_some() => t.clone(),
        _ => defaults::request_timing(),
    };
    match (timing.begin(), timing.end(), timing.elapsed_ms()) {
        (Some(begin), Some(end), None) => {
            timing.with_elapsed_ms((end - begin).num_milliseconds())
        }
        _ => timing,
    }
}

fn derived_message(severity: Option<Severity>) -> MessageInfo {
    MessageInfo::new(
        Some(Utc::now()),
        Some(RequestStatus::for_severity(severity)),
        Some(AlertLevel::for_severity(severity)),
    )
}

fn derived_code_location(origin: Option<&'static str>) -> CodeLocation {
    // thread id is left absent; the backend knows the execution thread
    CodeLocation::new(None, Some(origin.unwrap_or("").to_string()))
}
