//! Text-map propagation of context across process boundaries.
//!
//! Propagators inject the active span context and baggage into a carrier
//! (typically HTTP headers) on the way out and extract them on the way in.
//! The W3C `traceparent`/`tracestate` and `baggage` header formats come
//! from the SDK; `composite` chains several propagators into one. With the
//! `jaeger` feature enabled, the legacy `uber-trace-id` header format is
//! available for services still running behind Jaeger's own clients.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use tel::propagation::{self, TextMapPropagator};
//!
//! let propagator = propagation::trace_context();
//! let mut headers = HashMap::new();
//! propagator.inject_context(&tel::Context::current(), &mut headers);
//! let _cx = propagator.extract(&headers);
//! ```

pub use opentelemetry::propagation::{
    Extractor, Injector, TextMapCompositePropagator, TextMapPropagator,
};
pub use opentelemetry_sdk::propagation::BaggagePropagator;
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub use opentelemetry_sdk::propagation::TraceContextPropagator;

/// Propagator for the W3C trace context format, carrying the
/// `traceparent` and `tracestate` headers.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn trace_context() -> TraceContextPropagator {
    TraceContextPropagator::new()
}

/// Propagator for the W3C `baggage` header.
pub fn baggage() -> BaggagePropagator {
    BaggagePropagator::new()
}

/// Chains the given propagators into a single one.
///
/// Injection and extraction run in the order the propagators were
/// provided; `fields` reports the de-duplicated union of their header
/// names.
pub fn composite(
    propagators: Vec<Box<dyn TextMapPropagator + Send + Sync>>,
) -> TextMapCompositePropagator {
    TextMapCompositePropagator::new(propagators)
}

/// Propagator for Jaeger's `uber-trace-id` header format.
#[cfg(feature = "jaeger")]
#[cfg_attr(docsrs, doc(cfg(feature = "jaeger")))]
pub use opentelemetry_jaeger_propagator::Propagator as JaegerPropagator;

/// Creates a Jaeger propagator using the default `uber-trace-id` header
/// and `uberctx-` baggage prefix.
#[cfg(feature = "jaeger")]
#[cfg_attr(docsrs, doc(cfg(feature = "jaeger")))]
pub fn jaeger() -> JaegerPropagator {
    JaegerPropagator::new()
}
