//! Smoke tests driving real façade calls through an installed console
//! backend.

use chrono::{Duration, Utc};
use opslog_core::{
    context_is_empty, AuditLogSpec, ErrorInfo, ErrorLogSpec, Logger, MetricLogSpec, RequestId,
    RequestTiming, ResponseInfo, ServiceIdentity, TargetService,
};

#[test]
fn console_backend_carries_every_kind() {
    assert!(opslog_console::init());

    let logger = Logger::named("tests::ConsoleSmoke");
    let begin = Utc::now();

    let audit = AuditLogSpec::default()
        .with_request_id(RequestId::new("403cdad8-4de7-450d-b441-561001decdd6"))
        .with_service(ServiceIdentity::new("orders", "storefront", ""))
        .with_timing(RequestTiming::span(begin, begin + Duration::seconds(30)))
        .with_response(ResponseInfo::new(200, "OK"));
    logger.audit().info("audit message: {}", &audit, None, &["arg"]);
    assert!(context_is_empty());

    let metric = MetricLogSpec::default()
        .with_request_id(RequestId::new("403cdad8-4de7-450d-b441-561001decdd6"))
        .with_target(TargetService::new("inventory", "reserve", "inventory-vip"));
    logger.metric().warn("metric message", &metric, None, &[]);
    assert!(context_is_empty());

    let error = ErrorLogSpec::default().with_error(ErrorInfo::new(500, "DOWNSTREAM FAILURE"));
    logger.error().error("error message", &error, None, &[]);
    assert!(context_is_empty());

    logger.debug().debug("debug message", None, None, &[]);
    assert!(context_is_empty());

    // only the first installation wins
    assert!(!opslog_console::init());
}
