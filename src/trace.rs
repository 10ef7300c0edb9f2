//! Tracing API surface.
//!
//! Spans describe a single named unit of work. Obtain a [`Tracer`] from a
//! provider (usually via [`crate::global::tracer`]), start spans with it, and
//! attach the active span to a [`Context`] so downstream code and
//! propagators can see it.
//!
//! ```
//! use tel::global;
//! use tel::trace::{Span, Tracer};
//!
//! let tracer = global::tracer("my-component");
//! let mut span = tracer.start("operation");
//! span.set_attribute(tel::attribute::string("peer.service", "backend"));
//! span.end();
//! ```

use std::num::ParseIntError;

use opentelemetry::Context;

pub use opentelemetry::trace::{
    get_active_span, mark_span_as_active, Event, Link, SamplingDecision, SamplingResult, Span,
    SpanBuilder, SpanContext, SpanId, SpanKind, SpanRef, Status, TraceContextExt, TraceFlags,
    TraceId, TraceState, Tracer, TracerProvider,
};

pub use opentelemetry::trace::noop::NoopTracerProvider;

/// Trace flags with the sampled bit set.
pub const FLAGS_SAMPLED: TraceFlags = TraceFlags::SAMPLED;

/// Returns a copy of `cx` with `span` set as the active span.
pub fn context_with_span<S>(cx: &Context, span: S) -> Context
where
    S: Span + Send + Sync + 'static,
{
    cx.with_span(span)
}

/// Returns a copy of the current context with `span` set as the active span.
pub fn current_with_span<S>(span: S) -> Context
where
    S: Span + Send + Sync + 'static,
{
    Context::current_with_span(span)
}

/// Returns a copy of `cx` holding a span whose context is the given remote
/// span context.
///
/// Use this on the server side of a propagation boundary when the extracted
/// span context should parent locally created spans.
pub fn context_with_remote_span_context(cx: &Context, span_context: SpanContext) -> Context {
    cx.with_remote_span_context(span_context)
}

/// Returns a reference to the span bound to `cx`.
///
/// When no span is set, the returned span is a no-op whose span context is
/// invalid.
pub fn span_from_context(cx: &Context) -> SpanRef<'_> {
    cx.span()
}

/// Returns the span context of the span bound to `cx`.
pub fn span_context_from_context(cx: &Context) -> SpanContext {
    cx.span().span_context().clone()
}

/// Builds a [`SpanContext`] from its parts.
pub fn new_span_context(
    trace_id: TraceId,
    span_id: SpanId,
    trace_flags: TraceFlags,
    is_remote: bool,
    trace_state: TraceState,
) -> SpanContext {
    SpanContext::new(trace_id, span_id, trace_flags, is_remote, trace_state)
}

/// Parses a [`TraceId`] from its 32 character lowercase hex representation.
pub fn trace_id_from_hex(hex: &str) -> Result<TraceId, ParseIntError> {
    TraceId::from_hex(hex)
}

/// Parses a [`SpanId`] from its 16 character lowercase hex representation.
pub fn span_id_from_hex(hex: &str) -> Result<SpanId, ParseIntError> {
    SpanId::from_hex(hex)
}

/// Returns a tracer provider whose tracers record nothing.
pub fn noop_tracer_provider() -> NoopTracerProvider {
    NoopTracerProvider::new()
}
