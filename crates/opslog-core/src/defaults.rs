//! Centralized default values for field groups.
//!
//! **This module is the single source of truth** for the static defaults the
//! resolver substitutes for absent groups. Consumers should reference these
//! constructors instead of defining their own fallback values.

use chrono::Utc;

use crate::groups::{
    AppIdentity, CustomFields, ErrorInfo, MiscFields, RequestTiming, ResponseInfo, ServiceIdentity,
    TargetService,
};
use crate::properties::resolve_property;

/// Placeholder for identity fields with no known value.
pub const UNKNOWN_FIELD_VALUE: &str = "UNKNOWN";

/// Response/error code meaning "no outcome was recorded".
pub const UNDEFINED_CODE: i32 = 900;

/// Description paired with [`UNDEFINED_CODE`] on response groups.
pub const UNDEFINED_RESPONSE_DESCRIPTION: &str = "UNDEFINED";

/// Description paired with [`UNDEFINED_CODE`] on error groups.
pub const UNDEFINED_ERROR_DESCRIPTION: &str = "UNDEFINED ERROR";

/// Fallback service instance id when the environment provides none.
pub const DEFAULT_SERVICE_INSTANCE_ID: &str = "UNKNOWN_INSTANCE_ID";

/// Fallback server IP when the environment provides none.
pub const DEFAULT_SERVER_IP: &str = "UNKNOWN_IP_ADDRESS";

/// Fallback server FQDN when the environment provides none.
pub const DEFAULT_SERVER_FQDN: &str = "UNKNOWN_SERVER_FQDN";

/// Default service identity: unknown service, the process user as partner,
/// empty client IP.
pub fn service_identity() -> ServiceIdentity {
    ServiceIdentity::new(UNKNOWN_FIELD_VALUE, process_user_name(), "")
}

/// Default response outcome.
pub fn response_info() -> ResponseInfo {
    ResponseInfo::new(UNDEFINED_CODE, UNDEFINED_RESPONSE_DESCRIPTION)
}

/// Default error outcome.
pub fn error_info() -> ErrorInfo {
    ErrorInfo::new(UNDEFINED_CODE, UNDEFINED_ERROR_DESCRIPTION)
}

/// Default target service identity.
pub fn target_service() -> TargetService {
    TargetService::new(UNKNOWN_FIELD_VALUE, UNKNOWN_FIELD_VALUE, UNKNOWN_FIELD_VALUE)
}

/// Default custom field slots (all empty).
pub fn custom_fields() -> CustomFields {
    CustomFields::default()
}

/// Default misc fields (all empty).
pub fn misc_fields() -> MiscFields {
    MiscFields::default()
}

/// Default request timing: a zero-width span at the current instant, elapsed
/// left for derivation.
pub fn request_timing() -> RequestTiming {
    let now = Utc::now();
    RequestTiming::span(now, now)
}

/// Build the application identity from the process environment.
///
/// Instance naming settings go through the property resolver chain with the
/// alias names deployments historically use; host identity comes from the
/// environment directly. No network lookup is performed.
pub fn app_identity() -> AppIdentity {
    let service_instance_id = resolve_property(
        None,
        &["SERVICE_NAME", "ServiceInstanceId", "SERVICE_INSTANCE_ID"],
        DEFAULT_SERVICE_INSTANCE_ID,
    );
    let instance_uuid = resolve_property(None, &["InstanceUUID", "INSTANCE_UUID"], "");
    let virtual_server_name =
        resolve_property(None, &["VirtualServerName", "VIRTUAL_SERVER_NAME"], "");
    let server_ip = resolve_property(None, &["SERVER_IP", "HOST_IP"], DEFAULT_SERVER_IP);
    let server_fqdn = resolve_property(None, &["SERVER_FQDN", "HOSTNAME"], DEFAULT_SERVER_FQDN);

    AppIdentity::new(
        service_instance_id,
        instance_uuid,
        virtual_server_name,
        server_ip,
        server_fqdn,
    )
}

/// Name of the user the process runs as, `UNKNOWN` when undeterminable.
pub fn process_user_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| UNKNOWN_FIELD_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{remove_property, set_property};

    #[test]
    fn test_service_identity_default() {
        let identity = service_identity();
        assert_eq!(identity.service_name(), UNKNOWN_FIELD_VALUE);
        assert_eq!(identity.client_ip(), "");
        assert!(!identity.partner_name().is_empty());
    }

    #[test]
    fn test_outcome_defaults() {
        assert_eq!(response_info().code(), 900);
        assert_eq!(response_info().description(), "UNDEFINED");
        assert_eq!(error_info().code(), 900);
        assert_eq!(error_info().description(), "UNDEFINED ERROR");
    }

    #[test]
    fn test_default_timing_is_zero_width() {
        let timing = request_timing();
        assert_eq!(timing.begin(), timing.end());
        assert!(timing.elapsed_ms().is_none());
    }

    #[test]
    fn test_app_identity_honors_property_aliases() {
        set_property("ServiceInstanceId", "instance-7");
        set_property("InstanceUUID", "11111111-2222-3333-4444-555555555555");
        let identity = app_identity();
        assert_eq!(identity.service_instance_id(), "instance-7");
        assert_eq!(
            identity.instance_uuid(),
            "11111111-2222-3333-4444-555555555555"
        );
        remove_property("ServiceInstanceId");
        remove_property("InstanceUUID");
    }
}
