#![cfg(feature = "trace")]

use std::collections::HashMap;

use tel::propagation::TextMapPropagator;
use tel::trace::{TraceContextExt, TraceState};
use tel::Context;

fn sampled_remote_context() -> Context {
    let span_context = tel::trace::new_span_context(
        tel::trace::trace_id_from_hex("4bf92f3577b34da6a3ce929d0e0e4736").unwrap(),
        tel::trace::span_id_from_hex("00f067aa0ba902b7").unwrap(),
        tel::trace::FLAGS_SAMPLED,
        true,
        TraceState::default(),
    );
    tel::trace::context_with_remote_span_context(&Context::new(), span_context)
}

#[test]
fn trace_context_header_round_trip() {
    let propagator = tel::propagation::trace_context();
    let cx = sampled_remote_context();

    let mut carrier = HashMap::new();
    propagator.inject_context(&cx, &mut carrier);
    assert_eq!(
        carrier.get("traceparent").map(String::as_str),
        Some("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01")
    );

    let extracted = propagator.extract(&carrier);
    let span_context = tel::trace::span_context_from_context(&extracted);
    assert_eq!(span_context, cx.span().span_context().clone());
}

#[test]
fn composite_carries_both_trace_and_baggage() {
    let propagator = tel::propagation::composite(vec![
        Box::new(tel::propagation::trace_context()),
        Box::new(tel::propagation::baggage()),
    ]);
    let cx = tel::baggage::context_with_baggage(
        &sampled_remote_context(),
        [tel::attribute::string("tenant", "acme")],
    );

    let mut carrier = HashMap::new();
    propagator.inject_context(&cx, &mut carrier);
    assert!(carrier.contains_key("traceparent"));
    assert_eq!(carrier.get("baggage").map(String::as_str), Some("tenant=acme"));

    let extracted = propagator.extract(&carrier);
    assert!(tel::trace::span_context_from_context(&extracted).is_valid());
    assert_eq!(
        tel::baggage::baggage_from_context(&extracted)
            .get("tenant")
            .map(|v| v.as_str()),
        Some("acme")
    );
}

#[test]
fn extract_without_headers_yields_invalid_context() {
    let propagator = tel::propagation::trace_context();
    let carrier: HashMap<String, String> = HashMap::new();
    let extracted = propagator.extract(&carrier);
    assert!(!tel::trace::span_context_from_context(&extracted).is_valid());
}
