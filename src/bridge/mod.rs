//! Bridges connecting existing logging frameworks to the logs SDK.
//!
//! A bridge obtains a logger from an [`SdkLoggerProvider`] and forwards the
//! host framework's records to it, so instrumented code keeps using `log` or
//! `tracing` unchanged while the records flow out through OpenTelemetry
//! exporters.
//!
//! [`SdkLoggerProvider`]: crate::sdk::logs::SdkLoggerProvider

#[cfg(feature = "bridge-log")]
#[cfg_attr(docsrs, doc(cfg(feature = "bridge-log")))]
pub mod log;

#[cfg(feature = "bridge-tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "bridge-tracing")))]
pub mod tracing;
