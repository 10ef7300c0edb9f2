//! Zipkin exporter and B3 propagation bindings.
//!
//! Spans are posted to a Zipkin collector over HTTP in the v2 JSON format.
//! The collector address comes from the builder or from the
//! `OTEL_EXPORTER_ZIPKIN_ENDPOINT` environment variable, and the service
//! name shown in Zipkin comes from the provider's resource. The
//! [`B3Propagator`] carries span context in the `b3` headers used by
//! Zipkin-instrumented systems.
//!
//! ```no_run
//! let exporter = tel::export::zipkin::exporter_builder()
//!     .with_collector_endpoint("http://localhost:9411/api/v2/spans")
//!     .build()
//!     .unwrap();
//! let provider = tel::sdk::trace::provider_builder()
//!     .with_batch_exporter(exporter)
//!     .build();
//! # provider.shutdown().unwrap();
//! ```

pub use opentelemetry_zipkin::{
    B3Encoding, Propagator as B3Propagator, ZipkinExporter, ZipkinExporterBuilder,
};

/// Starts a Zipkin span exporter builder.
pub fn exporter_builder() -> ZipkinExporterBuilder {
    ZipkinExporter::builder()
}

/// Returns a B3 propagator using single-header encoding.
pub fn b3_propagator() -> B3Propagator {
    B3Propagator::new()
}

/// Returns a B3 propagator using the given header encoding.
pub fn b3_propagator_with_encoding(encoding: B3Encoding) -> B3Propagator {
    B3Propagator::with_encoding(encoding)
}
