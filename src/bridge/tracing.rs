//! Bridge from [`tracing`] events to the logs SDK.
//!
//! The bridge is a [`tracing_subscriber`] layer: stack it into a registry and
//! every `tracing` event becomes an OpenTelemetry log record.
//!
//! ```
//! # #[cfg(feature = "stdout")] {
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let provider = tel::sdk::logs::provider_builder()
//!     .with_simple_exporter(opentelemetry_stdout::LogExporter::default())
//!     .build();
//! let subscriber =
//!     tracing_subscriber::registry().with(tel::bridge::tracing::bridge(&provider));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(order_id = 7, "order placed");
//! });
//! # provider.shutdown().unwrap();
//! # }
//! ```

use opentelemetry::logs::{Logger, LoggerProvider};

pub use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;

/// Returns a [`tracing_subscriber`] layer emitting through `provider`.
pub fn bridge<P, L>(provider: &P) -> OpenTelemetryTracingBridge<P, L>
where
    P: LoggerProvider<Logger = L> + Send + Sync,
    L: Logger + Send + Sync,
{
    OpenTelemetryTracingBridge::new(provider)
}
