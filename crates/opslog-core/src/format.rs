//! Per-kind line formatters.
//!
//! Each formatter pulls the resolved specification for the active call (see
//! [`crate::resolve`]) plus two ambient values the backend supplies at
//! format time: the execution-thread name and the fully interpolated message
//! text. The output is a fixed-order list of plain-text fields joined by a
//! single `|`, with absent values rendered as empty columns, terminated by a
//! newline. Field order is part of the wire contract and must not change.
//!
//! Timestamps render in ISO 8601 with a numeric offset, always normalized to
//! UTC: `2015-06-03T13:21:58.000+0000`.

use chrono::{DateTime, Utc};

use crate::backend::LogKind;
use crate::error::Result;
use crate::resolve;
use crate::severity::Severity;

/// Field delimiter of every rendered line.
pub const LOG_DELIMITER: char = '|';

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Render a timestamp in the wire format; absent timestamps render empty.
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Interpolate `{}` placeholders with positional args.
///
/// Surplus placeholders stay literal; surplus args are ignored.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}

fn join_fields(values: &[&str]) -> String {
    let mut line = String::with_capacity(512);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(LOG_DELIMITER);
        }
        line.push_str(value);
    }
    line.push('\n');
    line
}

/// Render the audit line for the active call.
pub fn audit_line(thread_name: &str, message: &str) -> Result<String> {
    let app = resolve::resolved_app();
    let severity = resolve::active_severity();
    let optional = resolve::resolved_optional();
    let audit = resolve::resolved_audit()?;

    let begin = format_timestamp(audit.begin_timestamp());
    let end = format_timestamp(audit.end_timestamp());
    let response_code = audit.response_code().map(|c| c.to_string()).unwrap_or_default();
    let elapsed = audit.elapsed_ms().map(|ms| ms.to_string()).unwrap_or_default();

    Ok(join_fields(&[
        &begin,
        &end,
        audit.request_id().unwrap_or(""),
        app.service_instance_id(),
        thread_name,
        app.virtual_server_name(),
        audit.service_name().unwrap_or(""),
        audit.partner_name().unwrap_or(""),
        optional.status().map(|s| s.as_str()).unwrap_or(""),
        &response_code,
        audit.response_description().unwrap_or(""),
        app.instance_uuid(),
        severity.map(Severity::as_str).unwrap_or(""),
        optional.alert().map(|a| a.code()).unwrap_or(""),
        app.server_ip(),
        &elapsed,
        app.server_fqdn(),
        audit.client_ip().unwrap_or(""),
        optional.origin().unwrap_or(""),
        optional.unused().unwrap_or(""),
        optional.process_id().unwrap_or(""),
        optional.custom_field1().unwrap_or(""),
        optional.custom_field2().unwrap_or(""),
        optional.custom_field3().unwrap_or(""),
        optional.custom_field4().unwrap_or(""),
        message,
    ]))
}

/// Render the metric line for the active call.
pub fn metric_line(thread_name: &str, message: &str) -> Result<String> {
    let app = resolve::resolved_app();
    let severity = resolve::active_severity();
    let optional = resolve::resolved_optional();
    let metric = resolve::resolved_metric()?;

    let begin = format_timestamp(metric.begin_timestamp());
    let end = format_timestamp(metric.end_timestamp());
    let response_code = metric.response_code().map(|c| c.to_string()).unwrap_or_default();
    let elapsed = metric.elapsed_ms().map(|ms| ms.to_string()).unwrap_or_default();

    Ok(join_fields(&[
        &begin,
        &end,
        metric.request_id().unwrap_or(""),
        app.service_instance_id(),
        thread_name,
        app.virtual_server_name(),
        metric.service_name().unwrap_or(""),
        metric.partner_name().unwrap_or(""),
        metric.target_entity().unwrap_or(""),
        metric.target_service_name().unwrap_or(""),
        optional.status().map(|s| s.as_str()).unwrap_or(""),
        &response_code,
        metric.response_description().unwrap_or(""),
        app.instance_uuid(),
        severity.map(Severity::as_str).unwrap_or(""),
        optional.alert().map(|a| a.code()).unwrap_or(""),
        app.server_ip(),
        &elapsed,
        app.server_fqdn(),
        metric.client_ip().unwrap_or(""),
        optional.origin().unwrap_or(""),
        optional.unused().unwrap_or(""),
        optional.process_id().unwrap_or(""),
        metric.target_virtual_entity().unwrap_or(""),
        optional.custom_field1().unwrap_or(""),
        optional.custom_field2().unwrap_or(""),
        optional.custom_field3().unwrap_or(""),
        optional.custom_field4().unwrap_or(""),
        message,
    ]))
}

/// Render the error line for the active call.
pub fn error_line(thread_name: &str, message: &str) -> Result<String> {
    let severity = resolve::active_severity();
    let optional = resolve::resolved_optional();
    let error = resolve::resolved_error()?;

    let created = format_timestamp(optional.created());
    let error_code = error.error_code().map(|c| c.to_string()).unwrap_or_default();

    Ok(join_fields(&[
        &created,
        error.request_id().unwrap_or(""),
        thread_name,
        error.service_name().unwrap_or(""),
        error.partner_name().unwrap_or(""),
        error.target_entity().unwrap_or(""),
        error.target_service_name().unwrap_or(""),
        severity.map(Severity::as_str).unwrap_or(""),
        &error_code,
        error.error_description().unwrap_or(""),
        message,
    ]))
}

/// Render the debug line for the active call.
pub fn debug_line(message: &str) -> Result<String> {
    let optional = resolve::resolved_optional();
    let debug = resolve::resolved_debug();

    let created = format_timestamp(optional.created());

    Ok(join_fields(&[
        &created,
        debug.request_id().unwrap_or(""),
        message,
    ]))
}

/// Dispatch to the line format matching a marker name.
///
/// Console-style backends route events through this by marker; an
/// unrecognized marker renders a diagnostic placeholder line instead of
/// failing the write path.
pub fn console_line(marker: &str, thread_name: &str, message: &str) -> Result<String> {
    match LogKind::from_marker(marker) {
        Some(LogKind::Audit) => audit_line(thread_name, message),
        Some(LogKind::Metric) => metric_line(thread_name, message),
        Some(LogKind::Error) => error_line(thread_name, message),
        Some(LogKind::Debug) => debug_line(message),
        None => {
            tracing::warn!(marker, "no line format defined for marker");
            Ok(format!("no line format defined for marker: {marker}\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{CallScope, RequiredSpec};
    use crate::spec::{AuditLogSpec, DebugLogSpec, ErrorLogSpec, MetricLogSpec};
    use chrono::TimeZone;

    fn delimiter_count(line: &str) -> usize {
        line.matches(LOG_DELIMITER).count()
    }

    #[test]
    fn test_timestamp_wire_format() {
        let ts = Utc.with_ymd_and_hms(2015, 6, 3, 13, 21, 58).unwrap();
        assert_eq!(format_timestamp(Some(ts)), "2015-06-03T13:21:58.000+0000");
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn test_interpolate_substitutes_in_order() {
        assert_eq!(interpolate("a {} c {}", &["b", "d"]), "a b c d");
    }

    #[test]
    fn test_interpolate_surplus_placeholder_stays_literal() {
        assert_eq!(interpolate("a {} {}", &["b"]), "a b {}");
    }

    #[test]
    fn test_interpolate_surplus_args_ignored() {
        assert_eq!(interpolate("plain", &["unused"]), "plain");
    }

    #[test]
    fn test_audit_line_has_fixed_field_count() {
        let _scope = CallScope::enter(
            Severity::Info,
            "test::Origin",
            RequiredSpec::Audit(AuditLogSpec::default()),
            None,
        );
        let line = audit_line("main", "hello").unwrap();
        assert!(line.ends_with('\n'));
        // 26 fields -> 25 delimiters
        assert_eq!(delimiter_count(&line), 25);
    }

    #[test]
    fn test_metric_line_has_fixed_field_count() {
        let _scope = CallScope::enter(
            Severity::Info,
            "test::Origin",
            RequiredSpec::Metric(MetricLogSpec::default()),
            None,
        );
        let line = metric_line("main", "hello").unwrap();
        // 29 fields -> 28 delimiters
        assert_eq!(delimiter_count(&line), 28);
    }

    #[test]
    fn test_error_line_has_fixed_field_count() {
        let _scope = CallScope::enter(
            Severity::Error,
            "test::Origin",
            RequiredSpec::Error(ErrorLogSpec::default()),
            None,
        );
        let line = error_line("main", "boom").unwrap();
        // 11 fields -> 10 delimiters
        assert_eq!(delimiter_count(&line), 10);
    }

    #[test]
    fn test_debug_line_has_fixed_field_count() {
        let _scope = CallScope::enter(
            Severity::Debug,
            "test::Origin",
            RequiredSpec::Debug(Some(DebugLogSpec::default())),
            None,
        );
        let line = debug_line("tracing through").unwrap();
        // 3 fields -> 2 delimiters
        assert_eq!(delimiter_count(&line), 2);
    }

    #[test]
    fn test_field_count_is_deterministic() {
        let _scope = CallScope::enter(
            Severity::Info,
            "test::Origin",
            RequiredSpec::Audit(AuditLogSpec::default()),
            None,
        );
        let first = audit_line("main", "hello").unwrap();
        let second = audit_line("main", "hello").unwrap();
        assert_eq!(delimiter_count(&first), delimiter_count(&second));
    }

    #[test]
    fn test_console_dispatch_placeholder_for_unknown_marker() {
        let line = console_line("TRACE_LOG", "main", "msg").unwrap();
        assert_eq!(line, "no line format defined for marker: TRACE_LOG\n");
    }
}
