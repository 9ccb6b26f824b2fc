//! End-to-end façade tests: real façade calls through an installed capture
//! backend, asserting the rendered lines and the context lifecycle.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::thread::{self, ThreadId};

use chrono::{Duration, Utc};
use once_cell::sync::Lazy;

use opslog_core::{
    context_is_empty, format, init_app_spec, install_backend, AppIdentity, AppLogSpec,
    AuditLogSpec, ErrorLogSpec, LogBackend, LogKind, Logger, MessageInfo, MetricLogSpec,
    OptionalLogSpec, RequestId, RequestTiming, ResponseInfo, ServiceIdentity, Severity,
    TargetService,
};

thread_local! {
    /// Makes the capture backend fail its next emit on this thread.
    static PANIC_ON_EMIT: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

/// Backend that renders each event through the console dispatch and records
/// the line under the emitting thread.
#[derive(Default)]
struct CaptureBackend {
    lines: Mutex<HashMap<ThreadId, Vec<(LogKind, String)>>>,
}

impl LogBackend for CaptureBackend {
    fn emit(&self, kind: LogKind, _severity: Severity, message: &str, args: &[&str]) {
        if PANIC_ON_EMIT.with(|flag| flag.take()) {
            panic!("simulated backend failure");
        }
        let message = format::interpolate(message, args);
        let thread = thread::current();
        let thread_name = thread.name().unwrap_or("unnamed").to_string();
        let line = format::console_line(kind.marker(), &thread_name, &message)
            .expect("line must format during a facade call");
        self.lines
            .lock()
            .unwrap()
            .entry(thread.id())
            .or_default()
            .push((kind, line));
    }
}

static CAPTURE: Lazy<Arc<CaptureBackend>> = Lazy::new(|| Arc::new(CaptureBackend::default()));
static SETUP: Once = Once::new();

fn setup() {
    SETUP.call_once(|| {
        init_app_spec(AppLogSpec::new(AppIdentity::new(
            "test-instance",
            "9f1a60c2-0000-4000-8000-c0ffee000001",
            "vsrv-1",
            "10.0.0.1",
            "host.example.com",
        )));
        install_backend(CAPTURE.clone());
    });
}

/// Drain the lines captured on the current thread.
fn take_lines() -> Vec<(LogKind, String)> {
    CAPTURE
        .lines
        .lock()
        .unwrap()
        .remove(&thread::current().id())
        .unwrap_or_default()
}

fn fields(line: &str) -> Vec<&str> {
    line.trim_end_matches('\n').split('|').collect()
}

#[test]
fn audit_end_to_end() {
    setup();
    let logger = Logger::named("tests::AuditCaller");
    let begin = Utc::now();
    let spec = AuditLogSpec::default()
        .with_request_id(RequestId::new("abc"))
        .with_service(ServiceIdentity::new("svc1", "p1", "10.9.8.7"))
        .with_timing(RequestTiming::span(begin, begin + Duration::milliseconds(100)))
        .with_response(ResponseInfo::new(200, "OK"));

    logger.audit().info("request {} done", &spec, None, &["ord-1"]);

    let lines = take_lines();
    assert_eq!(lines.len(), 1);
    let (kind, line) = &lines[0];
    assert_eq!(*kind, LogKind::Audit);

    let fields = fields(line);
    assert_eq!(fields.len(), 26);
    assert_eq!(fields[2], "abc");
    assert_eq!(fields[3], "test-instance");
    assert_eq!(fields[5], "vsrv-1");
    assert_eq!(fields[6], "svc1");
    assert_eq!(fields[7], "p1");
    assert_eq!(fields[8], "COMPLETE");
    assert_eq!(fields[9], "200");
    assert_eq!(fields[10], "OK");
    assert_eq!(fields[12], "INFO");
    assert_eq!(fields[13], "0");
    assert_eq!(fields[14], "10.0.0.1");
    assert_eq!(fields[15], "100");
    assert_eq!(fields[16], "host.example.com");
    assert_eq!(fields[17], "10.9.8.7");
    assert_eq!(fields[18], "tests::AuditCaller");
    assert_eq!(fields[25], "request ord-1 done");

    assert!(context_is_empty());
}

#[test]
fn error_with_fully_null_spec_renders_defaults() {
    setup();
    let logger = Logger::named("tests::ErrorCaller");
    logger
        .error()
        .error("downstream failed", &ErrorLogSpec::default(), None, &[]);

    let lines = take_lines();
    assert_eq!(lines.len(), 1);
    let fields = fields(&lines[0].1);
    assert_eq!(fields.len(), 11);
    // fresh request id, UUID-shaped
    assert_eq!(fields[1].len(), 36);
    assert_eq!(fields[7], "ERROR");
    assert_eq!(fields[8], "900");
    assert_eq!(fields[9], "UNDEFINED ERROR");
    assert_eq!(fields[10], "downstream failed");

    assert!(context_is_empty());
}

#[test]
fn metric_line_carries_target_identity() {
    setup();
    let logger = Logger::named("tests::MetricCaller");
    let spec = MetricLogSpec::default()
        .with_request_id(RequestId::new("met-1"))
        .with_target(TargetService::new("inventory", "reserve", "inventory-vip"));

    logger.metric().info("reserve call", &spec, None, &[]);

    let fields_owned = take_lines();
    let fields = fields(&fields_owned[0].1);
    assert_eq!(fields.len(), 29);
    assert_eq!(fields[2], "met-1");
    assert_eq!(fields[8], "inventory");
    assert_eq!(fields[9], "reserve");
    assert_eq!(fields[23], "inventory-vip");

    assert!(context_is_empty());
}

#[test]
fn debug_line_without_spec_gets_generated_request_id() {
    setup();
    let logger = Logger::named("tests::DebugCaller");
    logger.debug().debug("poking around", None, None, &[]);

    let lines = take_lines();
    let fields = fields(&lines[0].1);
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[1].len(), 36);
    assert_eq!(fields[2], "poking around");

    assert!(context_is_empty());
}

#[test]
fn warn_and_fatal_map_to_status_and_alert() {
    setup();
    let logger = Logger::named("tests::SeverityCaller");
    let spec = AuditLogSpec::default();

    logger.audit().warn("warned", &spec, None, &[]);
    logger.audit().fatal("gave up", &spec, None, &[]);

    let lines = take_lines();
    assert_eq!(lines.len(), 2);

    let warn_fields = fields(&lines[0].1);
    assert_eq!(warn_fields[8], "COMPLETE");
    assert_eq!(warn_fields[12], "WARN");
    assert_eq!(warn_fields[13], "1");

    let fatal_fields = fields(&lines[1].1);
    assert_eq!(fatal_fields[8], "ERROR");
    assert_eq!(fatal_fields[12], "FATAL");
    assert_eq!(fatal_fields[13], "2");
}

#[test]
fn error_facade_warn_keeps_severity_and_optional_spec() {
    setup();
    let logger = Logger::named("tests::ErrorWarnCaller");
    let created = Utc::now() - Duration::seconds(5);
    let optional =
        OptionalLogSpec::default().with_message(MessageInfo::new(Some(created), None, None));

    logger
        .error()
        .warn("slow downstream", &ErrorLogSpec::default(), Some(&optional), &[]);

    let lines = take_lines();
    let fields = fields(&lines[0].1);
    // the sugar severity is preserved, not normalized to ERROR
    assert_eq!(fields[7], "WARN");
    // and the optional spec made it through to the formatter
    assert_eq!(fields[0], format::format_timestamp(Some(created)));
}

#[test]
fn repeated_calls_render_identical_field_counts() {
    setup();
    let logger = Logger::named("tests::DeterminismCaller");
    let spec = AuditLogSpec::default();

    logger.audit().info("one", &spec, None, &[]);
    logger.audit().info("two", &spec, None, &[]);

    let lines = take_lines();
    let first = lines[0].1.matches('|').count();
    let second = lines[1].1.matches('|').count();
    assert_eq!(first, 25);
    assert_eq!(first, second);
}

#[test]
fn concurrent_audit_calls_do_not_cross_contaminate() {
    setup();

    let worker = |request_id: &'static str| {
        thread::Builder::new()
            .name(format!("worker-{request_id}"))
            .spawn(move || {
                setup();
                let logger = Logger::named("tests::ConcurrentCaller");
                for _ in 0..50 {
                    let spec =
                        AuditLogSpec::default().with_request_id(RequestId::new(request_id));
                    logger.audit().info("concurrent", &spec, None, &[]);
                }
                let lines = take_lines();
                assert_eq!(lines.len(), 50);
                for (_, line) in lines {
                    let fields: Vec<&str> = line.trim_end_matches('\n').split('|').collect();
                    assert_eq!(fields[2], request_id);
                }
                assert!(context_is_empty());
            })
            .expect("spawn worker")
    };

    let first = worker("req-thread-one");
    let second = worker("req-thread-two");
    first.join().expect("first worker");
    second.join().expect("second worker");
}

#[test]
fn context_is_clean_after_backend_panic() {
    setup();
    let logger = Logger::named("tests::PanicCaller");

    PANIC_ON_EMIT.with(|flag| flag.set(true));
    let result = std::panic::catch_unwind(|| {
        logger
            .audit()
            .info("will fail", &AuditLogSpec::default(), None, &[]);
    });

    assert!(result.is_err());
    assert!(context_is_empty());
    assert!(take_lines().is_empty());
}
