//! Standard-output exporter bindings.
//!
//! These exporters print human-readable telemetry to stdout. They are meant
//! for local development and examples, not production pipelines.

#[cfg(feature = "logs")]
#[cfg_attr(docsrs, doc(cfg(feature = "logs")))]
pub use opentelemetry_stdout::LogExporter;
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub use opentelemetry_stdout::MetricExporter;
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub use opentelemetry_stdout::SpanExporter;

/// Returns a span exporter writing to stdout.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn span_exporter() -> SpanExporter {
    SpanExporter::default()
}

/// Returns a metric exporter writing to stdout.
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub fn metric_exporter() -> MetricExporter {
    MetricExporter::default()
}

/// Returns a log exporter writing to stdout.
#[cfg(feature = "logs")]
#[cfg_attr(docsrs, doc(cfg(feature = "logs")))]
pub fn log_exporter() -> LogExporter {
    LogExporter::default()
}
