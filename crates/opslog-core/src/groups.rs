//! Field groups: small immutable value records, each capturing one aspect of
//! a log event.
//!
//! Groups are composed into per-kind log specifications (see [`crate::spec`])
//! and never reference one another. They are cheap value objects constructed
//! per call; updates go through `with_*` copy methods rather than mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::severity::{AlertLevel, RequestStatus};

// ---------------------------------------------------------------------------
// Request identity
// ---------------------------------------------------------------------------

/// Identifies a single transaction request across cooperating services.
///
/// Composite identifiers of the form `UUID-1:UUID-2` arrive when an upstream
/// component chains its own suffix onto the id it received; only the portion
/// before the first `:` is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestId {
    request_id: String,
}

impl RequestId {
    /// Create a request identity, dropping any `:`-chained suffix.
    pub fn new(request_id: impl Into<String>) -> Self {
        let request_id = request_id.into();
        let request_id = match request_id.split_once(':') {
            Some((head, _)) => head.to_string(),
            None => request_id,
        };
        Self { request_id }
    }

    /// Generate a fresh random request identity.
    pub fn generate() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

// ---------------------------------------------------------------------------
// Service identity
// ---------------------------------------------------------------------------

/// Identity of the service handling the request and of its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIdentity {
    service_name: String,
    partner_name: String,
    client_ip: String,
}

impl ServiceIdentity {
    pub fn new(
        service_name: impl Into<String>,
        partner_name: impl Into<String>,
        client_ip: impl Into<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            partner_name: partner_name.into(),
            client_ip: client_ip.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn partner_name(&self) -> &str {
        &self.partner_name
    }

    pub fn client_ip(&self) -> &str {
        &self.client_ip
    }
}

// ---------------------------------------------------------------------------
// Target service identity
// ---------------------------------------------------------------------------

/// Identity of the downstream entity a metric record measures a call to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetService {
    target_entity: String,
    target_service_name: String,
    target_virtual_entity: String,
}

impl TargetService {
    pub fn new(
        target_entity: impl Into<String>,
        target_service_name: impl Into<String>,
        target_virtual_entity: impl Into<String>,
    ) -> Self {
        Self {
            target_entity: target_entity.into(),
            target_service_name: target_service_name.into(),
            target_virtual_entity: target_virtual_entity.into(),
        }
    }

    pub fn target_entity(&self) -> &str {
        &self.target_entity
    }

    pub fn target_service_name(&self) -> &str {
        &self.target_service_name
    }

    pub fn target_virtual_entity(&self) -> &str {
        &self.target_virtual_entity
    }
}

// ---------------------------------------------------------------------------
// Request timing
// ---------------------------------------------------------------------------

/// Begin/end timestamps of the request plus the elapsed wall-clock time.
///
/// Elapsed time is derived as `end - begin` (milliseconds) during default
/// resolution when both timestamps are present and elapsed is absent. An
/// inverted pair yields a negative value and is passed through uncorrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTiming {
    begin: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    elapsed_ms: Option<i64>,
}

impl RequestTiming {
    pub fn new(
        begin: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        elapsed_ms: Option<i64>,
    ) -> Self {
        Self {
            begin,
            end,
            elapsed_ms,
        }
    }

    /// Timing spanning `begin..end` with elapsed left for derivation.
    pub fn span(begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(Some(begin), Some(end), None)
    }

    pub fn begin(&self) -> Option<DateTime<Utc>> {
        self.begin
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn elapsed_ms(&self) -> Option<i64> {
        self.elapsed_ms
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: i64) -> Self {
        self.elapsed_ms = Some(elapsed_ms);
        self
    }
}

// ---------------------------------------------------------------------------
// Response / error outcome
// ---------------------------------------------------------------------------

/// Numeric response code plus a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    code: i32,
    description: String,
}

impl ResponseInfo {
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Numeric error code plus a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    code: i32,
    description: String,
}

impl ErrorInfo {
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

// ---------------------------------------------------------------------------
// Message metadata
// ---------------------------------------------------------------------------

/// Per-message metadata: creation time, coarse outcome, alert level.
///
/// These fields are mostly derived: during default resolution an empty group
/// is filled from the ambient severity and the current time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    created: Option<DateTime<Utc>>,
    status: Option<RequestStatus>,
    alert: Option<AlertLevel>,
}

impl MessageInfo {
    pub fn new(
        created: Option<DateTime<Utc>>,
        status: Option<RequestStatus>,
        alert: Option<AlertLevel>,
    ) -> Self {
        Self {
            created,
            status,
            alert,
        }
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn status(&self) -> Option<RequestStatus> {
        self.status
    }

    pub fn alert(&self) -> Option<AlertLevel> {
        self.alert
    }

    /// True when none of the three fields carries a value; an empty group is
    /// replaced wholesale during default resolution.
    pub fn is_empty(&self) -> bool {
        self.created.is_none() && self.status.is_none() && self.alert.is_none()
    }
}

// ---------------------------------------------------------------------------
// Code location
// ---------------------------------------------------------------------------

/// Where in the code the record originated.
///
/// The thread identifier stays absent unless the caller supplies it; the
/// backend knows the execution thread and passes its name to the formatter
/// separately. The origin defaults to the façade caller's type name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLocation {
    thread_id: Option<String>,
    origin: Option<String>,
}

impl CodeLocation {
    pub fn new(thread_id: Option<String>, origin: Option<String>) -> Self {
        Self { thread_id, origin }
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.thread_id.is_none() && self.origin.is_none()
    }
}

// ---------------------------------------------------------------------------
// Custom / misc fields
// ---------------------------------------------------------------------------

/// Four free-form string slots reserved for deployment-specific values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFields {
    field1: String,
    field2: String,
    field3: String,
    field4: String,
}

impl CustomFields {
    pub fn new(
        field1: impl Into<String>,
        field2: impl Into<String>,
        field3: impl Into<String>,
        field4: impl Into<String>,
    ) -> Self {
        Self {
            field1: field1.into(),
            field2: field2.into(),
            field3: field3.into(),
            field4: field4.into(),
        }
    }

    pub fn field1(&self) -> &str {
        &self.field1
    }

    pub fn field2(&self) -> &str {
        &self.field2
    }

    pub fn field3(&self) -> &str {
        &self.field3
    }

    pub fn field4(&self) -> &str {
        &self.field4
    }
}

/// Remaining odds and ends of the line formats.
///
/// `unused` is a deprecated slot that renders as an empty column; it is kept
/// only because the line formats reserve a position for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscFields {
    process_id: String,
    unused: String,
}

impl MiscFields {
    pub fn new(process_id: impl Into<String>, unused: impl Into<String>) -> Self {
        Self {
            process_id: process_id.into(),
            unused: unused.into(),
        }
    }

    pub fn process_id(&self) -> &str {
        &self.process_id
    }

    pub fn unused(&self) -> &str {
        &self.unused
    }
}

// ---------------------------------------------------------------------------
// Application identity
// ---------------------------------------------------------------------------

/// Identity of the running application instance.
///
/// Fixed for the whole process lifetime once set; consumers only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
    service_instance_id: String,
    instance_uuid: String,
    virtual_server_name: String,
    server_ip: String,
    server_fqdn: String,
}

impl AppIdentity {
    pub fn new(
        service_instance_id: impl Into<String>,
        instance_uuid: impl Into<String>,
        virtual_server_name: impl Into<String>,
        server_ip: impl Into<String>,
        server_fqdn: impl Into<String>,
    ) -> Self {
        Self {
            service_instance_id: service_instance_id.into(),
            instance_uuid: instance_uuid.into(),
            virtual_server_name: virtual_server_name.into(),
            server_ip: server_ip.into(),
            server_fqdn: server_fqdn.into(),
        }
    }

    pub fn service_instance_id(&self) -> &str {
        &self.service_instance_id
    }

    pub fn instance_uuid(&self) -> &str {
        &self.instance_uuid
    }

    pub fn virtual_server_name(&self) -> &str {
        &self.virtual_server_name
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }

    pub fn server_fqdn(&self) -> &str {
        &self.server_fqdn
    }
}
