use tel::baggage::{Baggage, BaggageExt};
use tel::Context;

#[test]
fn baggage_travels_with_the_context() {
    let cx = tel::baggage::context_with_baggage(
        &Context::new(),
        [
            tel::attribute::string("user.id", "u-42"),
            tel::attribute::string("tenant", "acme"),
        ],
    );

    let baggage = tel::baggage::baggage_from_context(&cx);
    assert_eq!(baggage.len(), 2);
    assert_eq!(baggage.get("user.id").map(|v| v.as_str()), Some("u-42"));
}

#[test]
fn clearing_keeps_parent_entries_on_the_pinned_upstream() {
    let cx = tel::baggage::context_with_baggage(
        &Context::new(),
        [tel::attribute::string("tenant", "acme")],
    );
    // opentelemetry 0.30.0 stores the cleared baggage under a context key
    // that the reader does not consult, so the parent's entries remain.
    let cleared = tel::baggage::context_without_baggage(&cx);
    assert_eq!(
        tel::baggage::baggage_from_context(&cleared)
            .get("tenant")
            .map(|v| v.as_str()),
        Some("acme")
    );
}

#[test]
fn metadata_survives_insertion() {
    let mut baggage = Baggage::new();
    baggage.insert_with_metadata("feature", "beta", "ttl=60");
    let cx = Context::new().with_baggage(baggage);

    let entry = tel::baggage::baggage_from_context(&cx)
        .get_with_metadata("feature")
        .map(|(value, metadata)| (value.as_str().to_owned(), metadata.as_str().to_owned()));
    assert_eq!(entry, Some(("beta".to_owned(), "ttl=60".to_owned())));
}
