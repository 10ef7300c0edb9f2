//! A single-dependency facade over the OpenTelemetry Rust ecosystem.
//!
//! `tel` re-exports the public surface of the [`opentelemetry`] API crate,
//! the [`opentelemetry_sdk`] implementation, and the common exporter and
//! bridge crates behind one namespace. Every type exported here is an alias
//! of an upstream type, and every function immediately delegates to the
//! equivalent upstream call. Nothing is wrapped, buffered, retried, or
//! validated on the way through, so all upstream semantics, environment
//! variables (`OTEL_RESOURCE_ATTRIBUTES`, `OTEL_EXPORTER_OTLP_ENDPOINT`,
//! ...), and concurrency guarantees carry over unchanged.
//!
//! # Getting started
//!
//! ```
//! use tel::sdk::trace::SdkTracerProvider;
//! use tel::trace::{Span, Tracer};
//!
//! let provider = SdkTracerProvider::builder().build();
//! tel::global::set_tracer_provider(provider.clone());
//!
//! let tracer = tel::global::tracer("my-component");
//! let mut span = tracer.start("operation");
//! span.set_attribute(tel::attribute::string("net.peer.name", "localhost"));
//! span.end();
//!
//! provider.shutdown().unwrap();
//! ```
//!
//! # Crate layout
//!
//! * [`attribute`] - keys, values, and key-value constructors.
//! * [`baggage`] - W3C baggage and its context helpers.
//! * [`propagation`] - text-map propagators (W3C trace context, baggage,
//!   and optionally Jaeger headers).
//! * [`trace`] - the tracing API surface.
//! * [`metric`] - the metrics API surface.
//! * [`global`] - process-wide default providers and propagator.
//! * [`sdk`] - the SDK: providers, processors, readers, and resources.
//! * [`export`] - exporter bridges (OTLP, stdout, Zipkin),
//!   each behind a cargo feature.
//! * [`bridge`] - migration bridges routing `log` and `tracing`
//!   instrumentation into the SDK, each behind a cargo feature.
//!
//! # Feature flags
//!
//! The signal features `trace`, `metrics`, and `logs` are on by default and
//! map directly onto the matching upstream features, as does
//! `internal-logs` for the upstream crates' self-diagnostics. Exporters and
//! bridges are opt-in: `otlp-grpc`, `otlp-http-proto`, `otlp-http-json`,
//! `stdout`, `zipkin`, `jaeger`, `bridge-log`, and
//! `bridge-tracing`. `testing` forwards to the SDK's in-memory exporters
//! and `full` turns everything on.

#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]
#![cfg_attr(test, deny(warnings))]

pub mod attribute;
pub mod baggage;
pub mod global;
pub mod propagation;

#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub mod metric;
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub mod trace;

pub mod bridge;
pub mod export;
pub mod sdk;

pub use opentelemetry::{Context, ContextGuard};
pub use opentelemetry::{InstrumentationScope, InstrumentationScopeBuilder};
pub use opentelemetry::{Key, KeyValue, StringValue, Value};

/// Semantic-convention attribute names and values, re-exported verbatim.
pub use opentelemetry_semantic_conventions as semconv;
