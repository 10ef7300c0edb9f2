#![cfg(feature = "trace")]

use opentelemetry_sdk::trace::InMemorySpanExporter;
use tel::trace::{Span, SpanKind, Status, TraceContextExt, Tracer, TracerProvider};
use tel::Context;

fn provider_with_exporter() -> (tel::sdk::trace::SdkTracerProvider, InMemorySpanExporter) {
    let exporter = InMemorySpanExporter::default();
    let provider = tel::sdk::trace::provider_builder()
        .with_simple_exporter(exporter.clone())
        .build();
    (provider, exporter)
}

#[test]
fn spans_reach_the_exporter() {
    let (provider, exporter) = provider_with_exporter();
    let tracer = provider.tracer("trace-test");

    let mut span = tracer
        .span_builder("handle-request")
        .with_kind(SpanKind::Server)
        .start(&tracer);
    span.set_attribute(tel::attribute::string("http.request.method", "GET"));
    span.set_status(Status::Ok);
    span.end();

    let finished = exporter.get_finished_spans().unwrap();
    assert_eq!(finished.len(), 1);
    let span = &finished[0];
    assert_eq!(span.name, "handle-request");
    assert_eq!(span.span_kind, SpanKind::Server);
    assert!(span
        .attributes
        .iter()
        .any(|kv| kv.key.as_str() == "http.request.method"));
}

#[test]
fn child_spans_inherit_the_parent_trace() {
    let (provider, exporter) = provider_with_exporter();
    let tracer = provider.tracer("trace-test");

    let parent = tracer.start("parent");
    let parent_cx = tel::trace::context_with_span(&Context::new(), parent);
    let mut child = tracer.start_with_context("child", &parent_cx);
    child.end();
    parent_cx.span().end();

    let finished = exporter.get_finished_spans().unwrap();
    assert_eq!(finished.len(), 2);
    let child = finished.iter().find(|s| s.name == "child").unwrap();
    let parent = finished.iter().find(|s| s.name == "parent").unwrap();
    assert_eq!(
        child.span_context.trace_id(),
        parent.span_context.trace_id()
    );
    assert_eq!(child.parent_span_id, parent.span_context.span_id());
}

#[test]
fn always_off_sampler_drops_everything() {
    let exporter = InMemorySpanExporter::default();
    let provider = tel::sdk::trace::provider_builder()
        .with_sampler(tel::sdk::trace::always_off_sampler())
        .with_simple_exporter(exporter.clone())
        .build();
    let tracer = provider.tracer("trace-test");

    tracer.start("dropped").end();

    assert!(exporter.get_finished_spans().unwrap().is_empty());
}

#[test]
fn remote_span_context_parents_local_spans() {
    let (provider, exporter) = provider_with_exporter();
    let tracer = provider.tracer("trace-test");

    let trace_id = tel::trace::trace_id_from_hex("4bf92f3577b34da6a3ce929d0e0e4736").unwrap();
    let span_id = tel::trace::span_id_from_hex("00f067aa0ba902b7").unwrap();
    let remote = tel::trace::new_span_context(
        trace_id,
        span_id,
        tel::trace::FLAGS_SAMPLED,
        true,
        tel::trace::TraceState::default(),
    );
    let cx = tel::trace::context_with_remote_span_context(&Context::new(), remote);

    tracer.start_with_context("server-side", &cx).end();

    let finished = exporter.get_finished_spans().unwrap();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].span_context.trace_id(), trace_id);
    assert_eq!(finished[0].parent_span_id, span_id);
}
