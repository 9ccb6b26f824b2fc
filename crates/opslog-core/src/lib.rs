//! # opslog-core
//!
//! Structured operational log records over a fixed vocabulary of kinds
//! (audit, metric, error, debug) composed from reusable field groups.
//!
//! The crate carries the per-call field values through a thread-scoped
//! diagnostic context so they do not have to be threaded through every
//! function signature, fills defaults and derived values for whatever the
//! caller omitted, and renders each record as a strictly-ordered,
//! `|`-delimited line per kind. Actual emission is delegated to an
//! installed [`backend::LogBackend`]; without one, logging degrades to a
//! no-op rather than failing the calling application.
//!
//! ```no_run
//! use opslog_core::{AuditLogSpec, Logger, RequestId, ResponseInfo, ServiceIdentity};
//!
//! let logger = Logger::named("orders::Checkout");
//! let spec = AuditLogSpec::default()
//!     .with_request_id(RequestId::new("724229c0-9945-11e5-bcde-0002a5d5c51b"))
//!     .with_service(ServiceIdentity::new("checkout", "storefront", "10.0.0.7"))
//!     .with_response(ResponseInfo::new(200, "OK"));
//! logger.audit().info("order placed: {}", &spec, None, &["ord-1129"]);
//! ```

pub mod backend;
pub mod context;
pub mod defaults;
pub mod error;
pub mod format;
pub mod groups;
pub mod log;
pub mod properties;
pub mod resolve;
pub mod severity;
pub mod spec;

// Re-export commonly used types at crate root
pub use backend::{backend_installed, install_backend, LogBackend, LogKind, NoOpBackend};
pub use context::{init_app_spec, is_empty as context_is_empty};
pub use error::{Error, Result};
pub use groups::{
    AppIdentity, CodeLocation, CustomFields, ErrorInfo, MessageInfo, MiscFields, RequestId,
    RequestTiming, ResponseInfo, ServiceIdentity, TargetService,
};
pub use log::{AuditLog, DebugLog, ErrorLog, Logger, MetricLog};
pub use severity::{AlertLevel, RequestStatus, Severity};
pub use spec::{
    AppLogSpec, AuditLogSpec, DebugLogSpec, ErrorLogSpec, MetricLogSpec, OptionalLogSpec,
};
