//! Bridge from the [`log`] facade to the logs SDK.
//!
//! The bridge implements [`log::Log`], so it installs like any other `log`
//! backend:
//!
//! ```
//! # #[cfg(feature = "stdout")] {
//! let provider = tel::sdk::logs::provider_builder()
//!     .with_simple_exporter(opentelemetry_stdout::LogExporter::default())
//!     .build();
//! let bridge = tel::bridge::log::bridge(&provider);
//! if log::set_boxed_logger(Box::new(bridge)).is_ok() {
//!     log::set_max_level(log::LevelFilter::Info);
//! }
//! # provider.shutdown().unwrap();
//! # }
//! ```

use opentelemetry::logs::{Logger, LoggerProvider};

pub use opentelemetry_appender_log::OpenTelemetryLogBridge;

/// Returns a [`log::Log`] implementation emitting through `provider`.
pub fn bridge<P, L>(provider: &P) -> OpenTelemetryLogBridge<P, L>
where
    P: LoggerProvider<Logger = L> + Send + Sync,
    L: Logger + Send + Sync,
{
    OpenTelemetryLogBridge::new(provider)
}
