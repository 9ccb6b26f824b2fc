//! Per-kind log specifications: named bundles of field groups.
//!
//! A specification's component groups are independently nullable; "fully
//! resolved" means every required group is present, which is what the default
//! resolver (see [`crate::resolve`]) guarantees before a line is formatted.
//! Specifications are immutable value objects; `with_*` methods return a copy
//! with one group replaced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::groups::{
    AppIdentity, CodeLocation, CustomFields, ErrorInfo, MessageInfo, MiscFields, RequestId,
    RequestTiming, ResponseInfo, ServiceIdentity, TargetService,
};
use crate::severity::{AlertLevel, RequestStatus};

// ---------------------------------------------------------------------------
// Audit
// ---------------------------------------------------------------------------

/// Specification for an audit record: request identity, service identity,
/// request timing, and response outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLogSpec {
    request_id: Option<RequestId>,
    service: Option<ServiceIdentity>,
    timing: Option<RequestTiming>,
    response: Option<ResponseInfo>,
}

impl AuditLogSpec {
    pub fn new(
        request_id: Option<RequestId>,
        service: Option<ServiceIdentity>,
        timing: Option<RequestTiming>,
        response: Option<ResponseInfo>,
    ) -> Self {
        Self {
            request_id,
            service,
            timing,
            response,
        }
    }

    pub fn request_id_group(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn service(&self) -> Option<&ServiceIdentity> {
        self.service.as_ref()
    }

    pub fn timing(&self) -> Option<&RequestTiming> {
        self.timing.as_ref()
    }

    pub fn response(&self) -> Option<&ResponseInfo> {
        self.response.as_ref()
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_service(mut self, service: ServiceIdentity) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_timing(mut self, timing: RequestTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn with_response(mut self, response: ResponseInfo) -> Self {
        self.response = Some(response);
        self
    }

    // Delegating read accessors.

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_ref().map(RequestId::request_id)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service.as_ref().map(ServiceIdentity::service_name)
    }

    pub fn partner_name(&self) -> Option<&str> {
        self.service.as_ref().map(ServiceIdentity::partner_name)
    }

    pub fn client_ip(&self) -> Option<&str> {
        self.service.as_ref().map(ServiceIdentity::client_ip)
    }

    pub fn begin_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timing.as_ref().and_then(RequestTiming::begin)
    }

    pub fn end_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timing.as_ref().and_then(RequestTiming::end)
    }

    pub fn elapsed_ms(&self) -> Option<i64> {
        self.timing.as_ref().and_then(RequestTiming::elapsed_ms)
    }

    pub fn response_code(&self) -> Option<i32> {
        self.response.as_ref().map(ResponseInfo::code)
    }

    pub fn response_description(&self) -> Option<&str> {
        self.response.as_ref().map(ResponseInfo::description)
    }
}

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// Specification for a metric record: the audit groups plus the identity of
/// the downstream target service being measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricLogSpec {
    request_id: Option<RequestId>,
    service: Option<ServiceIdentity>,
    timing: Option<RequestTiming>,
    response: Option<ResponseInfo>,
    target: Option<TargetService>,
}

impl MetricLogSpec {
    pub fn new(
        request_id: Option<RequestId>,
        service: Option<ServiceIdentity>,
        timing: Option<RequestTiming>,
        response: Option<ResponseInfo>,
        target: Option<TargetService>,
    ) -> Self {
        Self {
            request_id,
            service,
            timing,
            response,
            target,
        }
    }

    pub fn request_id_group(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn service(&self) -> Option<&ServiceIdentity> {
        self.service.as_ref()
    }

    pub fn timing(&self) -> Option<&RequestTiming> {
        self.timing.as_ref()
    }

    pub fn response(&self) -> Option<&ResponseInfo> {
        self.response.as_ref()
    }

    pub fn target(&self) -> Option<&TargetService> {
        self.target.as_ref()
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_service(mut self, service: ServiceIdentity) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_timing(mut self, timing: RequestTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn with_response(mut self, response: ResponseInfo) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_target(mut self, target: TargetService) -> Self {
        self.target = Some(target);
        self
    }

    // Delegating read accessors.

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_ref().map(RequestId::request_id)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service.as_ref().map(ServiceIdentity::service_name)
    }

    pub fn partner_name(&self) -> Option<&str> {
        self.service.as_ref().map(ServiceIdentity::partner_name)
    }

    pub fn client_ip(&self) -> Option<&str> {
        self.service.as_ref().map(ServiceIdentity::client_ip)
    }

    pub fn begin_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timing.as_ref().and_then(RequestTiming::begin)
    }

    pub fn end_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timing.as_ref().and_then(RequestTiming::end)
    }

    pub fn elapsed_ms(&self) -> Option<i64> {
        self.timing.as_ref().and_then(RequestTiming::elapsed_ms)
    }

    pub fn response_code(&self) -> Option<i32> {
        self.response.as_ref().map(ResponseInfo::code)
    }

    pub fn response_description(&self) -> Option<&str> {
        self.response.as_ref().map(ResponseInfo::description)
    }

    pub fn target_entity(&self) -> Option<&str> {
        self.target.as_ref().map(TargetService::target_entity)
    }

    pub fn target_service_name(&self) -> Option<&str> {
        self.target.as_ref().map(TargetService::target_service_name)
    }

    pub fn target_virtual_entity(&self) -> Option<&str> {
        self.target.as_ref().map(TargetService::target_virtual_entity)
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Specification for an error record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorLogSpec {
    request_id: Option<RequestId>,
    service: Option<ServiceIdentity>,
    target: Option<TargetService>,
    error: Option<ErrorInfo>,
}

impl ErrorLogSpec {
    pub fn new(
        request_id: Option<RequestId>,
        service: Option<ServiceIdentity>,
        target: Option<TargetService>,
        error: Option<ErrorInfo>,
    ) -> Self {
        Self {
            request_id,
            service,
            target,
            error,
        }
    }

    pub fn request_id_group(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn service(&self) -> Option<&ServiceIdentity> {
        self.service.as_ref()
    }

    pub fn target(&self) -> Option<&TargetService> {
        self.target.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_service(mut self, service: ServiceIdentity) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_target(mut self, target: TargetService) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_error(mut self, error: ErrorInfo) -> Self {
        self.error = Some(error);
        self
    }

    // Delegating read accessors.

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_ref().map(RequestId::request_id)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service.as_ref().map(ServiceIdentity::service_name)
    }

    pub fn partner_name(&self) -> Option<&str> {
        self.service.as_ref().map(ServiceIdentity::partner_name)
    }

    pub fn target_entity(&self) -> Option<&str> {
        self.target.as_ref().map(TargetService::target_entity)
    }

    pub fn target_service_name(&self) -> Option<&str> {
        self.target.as_ref().map(TargetService::target_service_name)
    }

    pub fn error_code(&self) -> Option<i32> {
        self.error.as_ref().map(ErrorInfo::code)
    }

    pub fn error_description(&self) -> Option<&str> {
        self.error.as_ref().map(ErrorInfo::description)
    }
}

// ---------------------------------------------------------------------------
// Debug
// ---------------------------------------------------------------------------

/// Specification for a debug record: request identity only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugLogSpec {
    request_id: Option<RequestId>,
}

impl DebugLogSpec {
    pub fn new(request_id: Option<RequestId>) -> Self {
        Self { request_id }
    }

    pub fn request_id_group(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_ref().map(RequestId::request_id)
    }
}

// ---------------------------------------------------------------------------
// Optional
// ---------------------------------------------------------------------------

/// Cross-kind optional fields carried alongside every call: message
/// metadata, code location, custom slots and misc fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionalLogSpec {
    message: Option<MessageInfo>,
    code: Option<CodeLocation>,
    custom: Option<CustomFields>,
    misc: Option<MiscFields>,
}

impl OptionalLogSpec {
    pub fn new(
        message: Option<MessageInfo>,
        code: Option<CodeLocation>,
        custom: Option<CustomFields>,
        misc: Option<MiscFields>,
    ) -> Self {
        Self {
            message,
            code,
            custom,
            misc,
        }
    }

    pub fn message(&self) -> Option<&MessageInfo> {
        self.message.as_ref()
    }

    pub fn code(&self) -> Option<&CodeLocation> {
        self.code.as_ref()
    }

    pub fn custom(&self) -> Option<&CustomFields> {
        self.custom.as_ref()
    }

    pub fn misc(&self) -> Option<&MiscFields> {
        self.misc.as_ref()
    }

    pub fn with_message(mut self, message: MessageInfo) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_code(mut self, code: CodeLocation) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_custom(mut self, custom: CustomFields) -> Self {
        self.custom = Some(custom);
        self
    }

    pub fn with_misc(mut self, misc: MiscFields) -> Self {
        self.misc = Some(misc);
        self
    }

    // Delegating read accessors.

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.message.as_ref().and_then(MessageInfo::created)
    }

    pub fn status(&self) -> Option<RequestStatus> {
        self.message.as_ref().and_then(MessageInfo::status)
    }

    pub fn alert(&self) -> Option<AlertLevel> {
        self.message.as_ref().and_then(MessageInfo::alert)
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.code.as_ref().and_then(CodeLocation::thread_id)
    }

    pub fn origin(&self) -> Option<&str> {
        self.code.as_ref().and_then(CodeLocation::origin)
    }

    pub fn custom_field1(&self) -> Option<&str> {
        self.custom.as_ref().map(CustomFields::field1)
    }

    pub fn custom_field2(&self) -> Option<&str> {
        self.custom.as_ref().map(CustomFields::field2)
    }

    pub fn custom_field3(&self) -> Option<&str> {
        self.custom.as_ref().map(CustomFields::field3)
    }

    pub fn custom_field4(&self) -> Option<&str> {
        self.custom.as_ref().map(CustomFields::field4)
    }

    pub fn process_id(&self) -> Option<&str> {
        self.misc.as_ref().map(MiscFields::process_id)
    }

    pub fn unused(&self) -> Option<&str> {
        self.misc.as_ref().map(MiscFields::unused)
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Process-scoped specification carrying the application identity.
///
/// Unlike the per-call specifications above this one is created once at
/// process start and read for the process lifetime; its group is therefore
/// not nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppLogSpec {
    identity: AppIdentity,
}

impl AppLogSpec {
    pub fn new(identity: AppIdentity) -> Self {
        Self { identity }
    }

    /// Build the identity from the process environment via the property
    /// resolver chain (see [`crate::defaults::app_identity`]).
    pub fn detect() -> Self {
        Self::new(crate::defaults::app_identity())
    }

    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }

    pub fn service_instance_id(&self) -> &str {
        self.identity.service_instance_id()
    }

    pub fn instance_uuid(&self) -> &str {
        self.identity.instance_uuid()
    }

    pub fn virtual_server_name(&self) -> &str {
        self.identity.virtual_server_name()
    }

    pub fn server_ip(&self) -> &str {
        self.identity.server_ip()
    }

    pub fn server_fqdn(&self) -> &str {
        self.identity.server_fqdn()
    }
}
