//! Logs SDK surface.
//!
//! [`SdkLoggerProvider`] emits log records through processors to a
//! [`LogExporter`]. Applications rarely call this API directly; instead they
//! connect their logging framework through one of the [`crate::bridge`]
//! appenders and let the bridge write records here.
//!
//! ```no_run
//! # #[cfg(feature = "stdout")] {
//! let exporter = opentelemetry_stdout::LogExporter::default();
//! let provider = tel::sdk::logs::provider_builder()
//!     .with_simple_exporter(exporter)
//!     .build();
//! # provider.shutdown().unwrap();
//! # }
//! ```

pub use opentelemetry::logs::{AnyValue, LogRecord, Logger, LoggerProvider, Severity};

pub use opentelemetry_sdk::logs::{
    BatchConfig, BatchConfigBuilder, BatchLogProcessor, LogExporter, LogProcessor,
    LoggerProviderBuilder, SdkLogRecord, SdkLogger, SdkLoggerProvider, SimpleLogProcessor,
};

#[cfg(feature = "testing")]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub use opentelemetry_sdk::logs::{InMemoryLogExporter, InMemoryLogExporterBuilder};

/// Starts a logger provider builder.
pub fn provider_builder() -> LoggerProviderBuilder {
    SdkLoggerProvider::builder()
}
