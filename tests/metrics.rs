#![cfg(feature = "metrics")]

use opentelemetry_sdk::metrics::InMemoryMetricExporter;
use tel::metric::MeterProvider;

#[test]
fn counter_measurements_reach_the_exporter() {
    let exporter = InMemoryMetricExporter::default();
    let provider = tel::sdk::metric::provider_builder()
        .with_reader(tel::sdk::metric::periodic_reader_builder(exporter.clone()).build())
        .build();

    let meter = provider.meter("metrics-test");
    let counter: tel::metric::SyncU64Counter = meter
        .u64_counter("requests")
        .with_unit("{request}")
        .build();
    counter.add(3, &[tel::attribute::string("method", "GET")]);
    counter.add(2, &[tel::attribute::string("method", "POST")]);

    provider.force_flush().unwrap();
    let exported = exporter.get_finished_metrics().unwrap();
    assert!(!exported.is_empty());
    provider.shutdown().unwrap();
}

#[test]
fn observable_gauge_is_collected_on_flush() {
    let exporter = InMemoryMetricExporter::default();
    let provider = tel::sdk::metric::provider_builder()
        .with_reader(tel::sdk::metric::periodic_reader_builder(exporter.clone()).build())
        .build();

    let meter = provider.meter("metrics-test");
    let _gauge: tel::metric::AsyncF64Gauge = meter
        .f64_observable_gauge("queue.utilization")
        .with_callback(|observer| observer.observe(0.5, &[]))
        .build();

    provider.force_flush().unwrap();
    assert!(!exporter.get_finished_metrics().unwrap().is_empty());
    provider.shutdown().unwrap();
}
