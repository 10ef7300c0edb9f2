//! SDK surface: the concrete providers, processors, readers, and resource
//! machinery behind the API types in the crate root modules.
//!
//! Everything here forwards to [`opentelemetry_sdk`]. Construct providers
//! with the builders in the submodules, install them with the functions in
//! [`crate::global`], and shut them down before process exit so buffered
//! telemetry is flushed.

pub mod resource;

#[cfg(feature = "logs")]
#[cfg_attr(docsrs, doc(cfg(feature = "logs")))]
pub mod logs;
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub mod metric;
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub mod trace;

pub use opentelemetry_sdk::Resource;
