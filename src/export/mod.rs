//! Exporter bindings.
//!
//! Each submodule re-exports one exporter crate behind a feature flag of the
//! same name, so downstream crates pick wire formats without naming the
//! exporter crates in their own manifests.

#[cfg(feature = "otlp")]
#[cfg_attr(docsrs, doc(cfg(feature = "otlp")))]
pub mod otlp;

#[cfg(feature = "stdout")]
#[cfg_attr(docsrs, doc(cfg(feature = "stdout")))]
pub mod stdout;

#[cfg(feature = "zipkin")]
#[cfg_attr(docsrs, doc(cfg(feature = "zipkin")))]
pub mod zipkin;
