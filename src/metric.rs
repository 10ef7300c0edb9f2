//! Metrics API surface.
//!
//! Instruments are created from a [`Meter`], which in turn comes from a
//! [`MeterProvider`] (usually via [`crate::global::meter`]). The `Sync*`
//! aliases name instruments recorded inline at call sites; the `Async*`
//! aliases name observable instruments whose values are collected from a
//! callback at read time.
//!
//! ```
//! use tel::global;
//!
//! let meter = global::meter("my-component");
//! let requests = meter.u64_counter("requests").with_unit("{request}").build();
//! requests.add(1, &[tel::attribute::string("method", "GET")]);
//! ```

pub use opentelemetry::metrics::{
    AsyncInstrument, AsyncInstrumentBuilder, Counter, Gauge, Histogram, HistogramBuilder,
    InstrumentBuilder, Meter, MeterProvider, ObservableCounter, ObservableGauge,
    ObservableUpDownCounter, UpDownCounter,
};

/// A synchronous instrument recording monotonically increasing `u64` values.
pub type SyncU64Counter = Counter<u64>;
/// A synchronous instrument recording monotonically increasing `f64` values.
pub type SyncF64Counter = Counter<f64>;

/// A synchronous instrument recording `i64` deltas that may go up or down.
pub type SyncI64UpDownCounter = UpDownCounter<i64>;
/// A synchronous instrument recording `f64` deltas that may go up or down.
pub type SyncF64UpDownCounter = UpDownCounter<f64>;

/// A synchronous instrument recording a distribution of `u64` values.
pub type SyncU64Histogram = Histogram<u64>;
/// A synchronous instrument recording a distribution of `f64` values.
pub type SyncF64Histogram = Histogram<f64>;

/// A synchronous instrument recording the latest `u64` value.
pub type SyncU64Gauge = Gauge<u64>;
/// A synchronous instrument recording the latest `i64` value.
pub type SyncI64Gauge = Gauge<i64>;
/// A synchronous instrument recording the latest `f64` value.
pub type SyncF64Gauge = Gauge<f64>;

/// An observable instrument reporting monotonically increasing `u64` values.
pub type AsyncU64Counter = ObservableCounter<u64>;
/// An observable instrument reporting monotonically increasing `f64` values.
pub type AsyncF64Counter = ObservableCounter<f64>;

/// An observable instrument reporting `i64` sums that may go up or down.
pub type AsyncI64UpDownCounter = ObservableUpDownCounter<i64>;
/// An observable instrument reporting `f64` sums that may go up or down.
pub type AsyncF64UpDownCounter = ObservableUpDownCounter<f64>;

/// An observable instrument reporting the current `u64` value.
pub type AsyncU64Gauge = ObservableGauge<u64>;
/// An observable instrument reporting the current `i64` value.
pub type AsyncI64Gauge = ObservableGauge<i64>;
/// An observable instrument reporting the current `f64` value.
pub type AsyncF64Gauge = ObservableGauge<f64>;

/// Starts a builder for a [`SyncU64Counter`] on `meter`.
pub fn sync_u64_counter<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> InstrumentBuilder<'a, Counter<u64>> {
    meter.u64_counter(name)
}

/// Starts a builder for a [`SyncF64Counter`] on `meter`.
pub fn sync_f64_counter<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> InstrumentBuilder<'a, Counter<f64>> {
    meter.f64_counter(name)
}

/// Starts a builder for a [`SyncI64UpDownCounter`] on `meter`.
pub fn sync_i64_up_down_counter<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> InstrumentBuilder<'a, UpDownCounter<i64>> {
    meter.i64_up_down_counter(name)
}

/// Starts a builder for a [`SyncF64UpDownCounter`] on `meter`.
pub fn sync_f64_up_down_counter<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> InstrumentBuilder<'a, UpDownCounter<f64>> {
    meter.f64_up_down_counter(name)
}

/// Starts a builder for a [`SyncU64Histogram`] on `meter`.
pub fn sync_u64_histogram<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> HistogramBuilder<'a, Histogram<u64>> {
    meter.u64_histogram(name)
}

/// Starts a builder for a [`SyncF64Histogram`] on `meter`.
pub fn sync_f64_histogram<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> HistogramBuilder<'a, Histogram<f64>> {
    meter.f64_histogram(name)
}

/// Starts a builder for a [`SyncU64Gauge`] on `meter`.
pub fn sync_u64_gauge<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> InstrumentBuilder<'a, Gauge<u64>> {
    meter.u64_gauge(name)
}

/// Starts a builder for a [`SyncI64Gauge`] on `meter`.
pub fn sync_i64_gauge<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> InstrumentBuilder<'a, Gauge<i64>> {
    meter.i64_gauge(name)
}

/// Starts a builder for a [`SyncF64Gauge`] on `meter`.
pub fn sync_f64_gauge<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> InstrumentBuilder<'a, Gauge<f64>> {
    meter.f64_gauge(name)
}

/// Starts a builder for an [`AsyncU64Counter`] on `meter`.
pub fn async_u64_counter<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> AsyncInstrumentBuilder<'a, ObservableCounter<u64>, u64> {
    meter.u64_observable_counter(name)
}

/// Starts a builder for an [`AsyncF64Counter`] on `meter`.
pub fn async_f64_counter<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> AsyncInstrumentBuilder<'a, ObservableCounter<f64>, f64> {
    meter.f64_observable_counter(name)
}

/// Starts a builder for an [`AsyncI64UpDownCounter`] on `meter`.
pub fn async_i64_up_down_counter<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> AsyncInstrumentBuilder<'a, ObservableUpDownCounter<i64>, i64> {
    meter.i64_observable_up_down_counter(name)
}

/// Starts a builder for an [`AsyncF64UpDownCounter`] on `meter`.
pub fn async_f64_up_down_counter<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> AsyncInstrumentBuilder<'a, ObservableUpDownCounter<f64>, f64> {
    meter.f64_observable_up_down_counter(name)
}

/// Starts a builder for an [`AsyncU64Gauge`] on `meter`.
pub fn async_u64_gauge<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> AsyncInstrumentBuilder<'a, ObservableGauge<u64>, u64> {
    meter.u64_observable_gauge(name)
}

/// Starts a builder for an [`AsyncI64Gauge`] on `meter`.
pub fn async_i64_gauge<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> AsyncInstrumentBuilder<'a, ObservableGauge<i64>, i64> {
    meter.i64_observable_gauge(name)
}

/// Starts a builder for an [`AsyncF64Gauge`] on `meter`.
pub fn async_f64_gauge<'a>(
    meter: &'a Meter,
    name: &'static str,
) -> AsyncInstrumentBuilder<'a, ObservableGauge<f64>, f64> {
    meter.f64_observable_gauge(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global;

    #[test]
    fn aliases_name_instrument_instantiations() {
        let meter = global::meter("alias-check");
        let _: SyncU64Counter = meter.u64_counter("c").build();
        let _: SyncF64Histogram = meter.f64_histogram("h").build();
        let _: SyncI64UpDownCounter = meter.i64_up_down_counter("u").build();
        let _: AsyncF64Gauge = meter
            .f64_observable_gauge("g")
            .with_callback(|observer| observer.observe(1.0, &[]))
            .build();
    }

    #[test]
    fn forwarding_constructors_delegate_to_the_meter() {
        let meter = global::meter("forwarding-check");
        let counter = sync_u64_counter(&meter, "c").with_unit("{call}").build();
        counter.add(1, &[]);
        let _: SyncF64Histogram = sync_f64_histogram(&meter, "h").build();
        let _: AsyncU64Counter = async_u64_counter(&meter, "a")
            .with_callback(|observer| observer.observe(1, &[]))
            .build();
    }
}
