//! Metrics SDK surface.
//!
//! [`SdkMeterProvider`] is the concrete [`crate::metric::MeterProvider`].
//! Measurements are collected by readers: a [`PeriodicReader`] pushes to a
//! [`PushMetricExporter`] on an interval, while pull-based readers collect
//! on scrape.
//!
//! ```no_run
//! # #[cfg(feature = "stdout")] {
//! let exporter = opentelemetry_stdout::MetricExporter::default();
//! let provider = tel::sdk::metric::provider_builder()
//!     .with_reader(tel::sdk::metric::periodic_reader_builder(exporter).build())
//!     .build();
//! tel::global::set_meter_provider(provider.clone());
//! # provider.shutdown().unwrap();
//! # }
//! ```

pub use opentelemetry_sdk::metrics::exporter::PushMetricExporter;
pub use opentelemetry_sdk::metrics::{
    MeterProviderBuilder, PeriodicReader, PeriodicReaderBuilder, SdkMeterProvider, Temporality,
};

#[cfg(feature = "testing")]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub use opentelemetry_sdk::metrics::{InMemoryMetricExporter, InMemoryMetricExporterBuilder};

/// Starts a meter provider builder.
pub fn provider_builder() -> MeterProviderBuilder {
    SdkMeterProvider::builder()
}

/// Starts a periodic reader builder pushing to `exporter`.
pub fn periodic_reader_builder<E>(exporter: E) -> PeriodicReaderBuilder<E>
where
    E: PushMetricExporter,
{
    PeriodicReader::builder(exporter)
}
