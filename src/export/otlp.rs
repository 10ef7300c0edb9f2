//! OTLP exporter bindings.
//!
//! OTLP is the native OpenTelemetry wire protocol, carried over gRPC
//! (`otlp-grpc`) or HTTP with protobuf or JSON payloads (`otlp-http-proto`,
//! `otlp-http-json`). Endpoint, headers, timeout, and compression are
//! configurable both in code and through the standard
//! `OTEL_EXPORTER_OTLP_*` environment variables re-exported here.
//!
//! ```no_run
//! # #[cfg(feature = "otlp-grpc")] {
//! use tel::export::otlp::WithExportConfig;
//!
//! let exporter = tel::export::otlp::span_exporter_builder()
//!     .with_tonic()
//!     .with_endpoint("http://collector:4317")
//!     .build()
//!     .unwrap();
//! let provider = tel::sdk::trace::provider_builder()
//!     .with_batch_exporter(exporter)
//!     .build();
//! # provider.shutdown().unwrap();
//! # }
//! ```

pub use opentelemetry_otlp::{
    Compression, ExportConfig, ExporterBuildError, NoExporterBuilderSet, Protocol,
    WithExportConfig,
};

pub use opentelemetry_otlp::{
    OTEL_EXPORTER_OTLP_COMPRESSION, OTEL_EXPORTER_OTLP_ENDPOINT,
    OTEL_EXPORTER_OTLP_ENDPOINT_DEFAULT, OTEL_EXPORTER_OTLP_HEADERS, OTEL_EXPORTER_OTLP_PROTOCOL,
    OTEL_EXPORTER_OTLP_TIMEOUT, OTEL_EXPORTER_OTLP_TIMEOUT_DEFAULT,
};

#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub use opentelemetry_otlp::{
    SpanExporter, SpanExporterBuilder, OTEL_EXPORTER_OTLP_TRACES_COMPRESSION,
    OTEL_EXPORTER_OTLP_TRACES_ENDPOINT, OTEL_EXPORTER_OTLP_TRACES_HEADERS,
    OTEL_EXPORTER_OTLP_TRACES_TIMEOUT,
};

#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub use opentelemetry_otlp::{
    MetricExporter, MetricExporterBuilder, OTEL_EXPORTER_OTLP_METRICS_COMPRESSION,
    OTEL_EXPORTER_OTLP_METRICS_ENDPOINT, OTEL_EXPORTER_OTLP_METRICS_HEADERS,
    OTEL_EXPORTER_OTLP_METRICS_TIMEOUT,
};

#[cfg(feature = "logs")]
#[cfg_attr(docsrs, doc(cfg(feature = "logs")))]
pub use opentelemetry_otlp::{
    LogExporter, LogExporterBuilder, OTEL_EXPORTER_OTLP_LOGS_COMPRESSION,
    OTEL_EXPORTER_OTLP_LOGS_ENDPOINT, OTEL_EXPORTER_OTLP_LOGS_HEADERS,
    OTEL_EXPORTER_OTLP_LOGS_TIMEOUT,
};

#[cfg(feature = "otlp-grpc")]
#[cfg_attr(docsrs, doc(cfg(feature = "otlp-grpc")))]
pub use opentelemetry_otlp::{TonicExporterBuilder, WithTonicConfig};

#[cfg(any(feature = "otlp-http-proto", feature = "otlp-http-json"))]
#[cfg_attr(
    docsrs,
    doc(cfg(any(feature = "otlp-http-proto", feature = "otlp-http-json")))
)]
pub use opentelemetry_otlp::{HttpExporterBuilder, WithHttpConfig};

/// Starts an OTLP span exporter builder.
///
/// Select a transport with `with_tonic` or `with_http` before configuring
/// and building.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn span_exporter_builder() -> SpanExporterBuilder<NoExporterBuilderSet> {
    SpanExporter::builder()
}

/// Starts an OTLP metric exporter builder.
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub fn metric_exporter_builder() -> MetricExporterBuilder<NoExporterBuilderSet> {
    MetricExporter::builder()
}

/// Starts an OTLP log exporter builder.
#[cfg(feature = "logs")]
#[cfg_attr(docsrs, doc(cfg(feature = "logs")))]
pub fn log_exporter_builder() -> LogExporterBuilder<NoExporterBuilderSet> {
    LogExporter::builder()
}

/// Builds a gRPC span exporter from the environment defaults.
#[cfg(all(feature = "otlp-grpc", feature = "trace"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "otlp-grpc", feature = "trace"))))]
pub fn span_exporter_grpc() -> Result<SpanExporter, ExporterBuildError> {
    SpanExporter::builder().with_tonic().build()
}

/// Builds an HTTP span exporter from the environment defaults.
#[cfg(all(
    any(feature = "otlp-http-proto", feature = "otlp-http-json"),
    feature = "trace"
))]
#[cfg_attr(
    docsrs,
    doc(cfg(all(
        any(feature = "otlp-http-proto", feature = "otlp-http-json"),
        feature = "trace"
    )))
)]
pub fn span_exporter_http() -> Result<SpanExporter, ExporterBuildError> {
    SpanExporter::builder().with_http().build()
}

/// Builds a gRPC metric exporter from the environment defaults.
#[cfg(all(feature = "otlp-grpc", feature = "metrics"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "otlp-grpc", feature = "metrics"))))]
pub fn metric_exporter_grpc() -> Result<MetricExporter, ExporterBuildError> {
    MetricExporter::builder().with_tonic().build()
}

/// Builds an HTTP metric exporter from the environment defaults.
#[cfg(all(
    any(feature = "otlp-http-proto", feature = "otlp-http-json"),
    feature = "metrics"
))]
#[cfg_attr(
    docsrs,
    doc(cfg(all(
        any(feature = "otlp-http-proto", feature = "otlp-http-json"),
        feature = "metrics"
    )))
)]
pub fn metric_exporter_http() -> Result<MetricExporter, ExporterBuildError> {
    MetricExporter::builder().with_http().build()
}

/// Builds a gRPC log exporter from the environment defaults.
#[cfg(all(feature = "otlp-grpc", feature = "logs"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "otlp-grpc", feature = "logs"))))]
pub fn log_exporter_grpc() -> Result<LogExporter, ExporterBuildError> {
    LogExporter::builder().with_tonic().build()
}

/// Builds an HTTP log exporter from the environment defaults.
#[cfg(all(
    any(feature = "otlp-http-proto", feature = "otlp-http-json"),
    feature = "logs"
))]
#[cfg_attr(
    docsrs,
    doc(cfg(all(
        any(feature = "otlp-http-proto", feature = "otlp-http-json"),
        feature = "logs"
    )))
)]
pub fn log_exporter_http() -> Result<LogExporter, ExporterBuildError> {
    LogExporter::builder().with_http().build()
}
