//! Resource detection and construction.
//!
//! A [`Resource`] describes the entity producing telemetry as a set of
//! attributes, and is attached to every provider built by the SDK modules.
//! The default builder merges the SDK-provided defaults, the
//! `OTEL_RESOURCE_ATTRIBUTES` and `OTEL_SERVICE_NAME` environment variables,
//! and the telemetry SDK description.
//!
//! ```
//! let resource = tel::sdk::resource::builder()
//!     .with_service_name("checkout")
//!     .with_attribute(tel::attribute::string("deployment.environment", "staging"))
//!     .build();
//! ```

pub use opentelemetry_sdk::resource::{
    EnvResourceDetector, ResourceBuilder, ResourceDetector, SdkProvidedResourceDetector,
    TelemetryResourceDetector,
};
pub use opentelemetry_sdk::Resource;

/// Starts a resource builder pre-populated with the SDK defaults and the
/// environment detectors.
pub fn builder() -> ResourceBuilder {
    Resource::builder()
}

/// Starts a resource builder with no attributes at all.
pub fn builder_empty() -> ResourceBuilder {
    Resource::builder_empty()
}

/// Returns a detector reading `OTEL_RESOURCE_ATTRIBUTES` and
/// `OTEL_SERVICE_NAME` from the process environment.
pub fn env_detector() -> EnvResourceDetector {
    EnvResourceDetector::new()
}

/// Returns a detector describing the telemetry SDK itself.
pub fn telemetry_detector() -> TelemetryResourceDetector {
    TelemetryResourceDetector
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::{Key, Value};

    #[test]
    fn builder_attributes_are_queryable() {
        let resource = builder_empty()
            .with_service_name("checkout")
            .with_attribute(crate::attribute::int("replica", 3))
            .build();
        assert_eq!(
            resource.get(&Key::from_static_str("service.name")),
            Some(Value::from("checkout"))
        );
        assert_eq!(
            resource.get(&Key::from_static_str("replica")),
            Some(Value::I64(3))
        );
    }

    #[test]
    fn empty_builder_has_no_defaults() {
        let resource = builder_empty().build();
        assert_eq!(resource.len(), 0);
    }
}
