//! Tracing SDK surface.
//!
//! [`SdkTracerProvider`] is the concrete [`crate::trace::TracerProvider`].
//! Spans it creates flow through span processors to an exporter; use
//! [`TracerProviderBuilder::with_simple_exporter`] for synchronous export or
//! [`TracerProviderBuilder::with_batch_exporter`] for buffered background
//! export.
//!
//! ```
//! use tel::sdk::trace::Sampler;
//!
//! let provider = tel::sdk::trace::provider_builder()
//!     .with_sampler(Sampler::TraceIdRatioBased(0.25))
//!     .build();
//! tel::global::set_tracer_provider(provider.clone());
//! # provider.shutdown().unwrap();
//! ```

pub use opentelemetry_sdk::trace::{
    BatchConfig, BatchConfigBuilder, BatchSpanProcessor, BatchSpanProcessorBuilder, IdGenerator,
    RandomIdGenerator, Sampler, SdkTracer, SdkTracerProvider, ShouldSample, SimpleSpanProcessor,
    SpanData, SpanExporter, SpanLimits, SpanProcessor, TracerProviderBuilder,
};

#[cfg(feature = "testing")]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub use opentelemetry_sdk::trace::{InMemorySpanExporter, InMemorySpanExporterBuilder};

pub use opentelemetry::trace::{SamplingDecision, SamplingResult};

/// Starts a tracer provider builder.
pub fn provider_builder() -> TracerProviderBuilder {
    SdkTracerProvider::builder()
}

/// Starts a batch span processor builder for `exporter`.
///
/// The returned builder accepts a [`BatchConfig`] before being attached to a
/// provider with [`TracerProviderBuilder::with_span_processor`].
pub fn batch_processor_builder<E>(exporter: E) -> BatchSpanProcessorBuilder<E>
where
    E: SpanExporter + 'static,
{
    BatchSpanProcessor::builder(exporter)
}

/// Starts a batch configuration builder with the default queue and schedule
/// parameters.
pub fn batch_config_builder() -> BatchConfigBuilder {
    BatchConfigBuilder::default()
}

/// An always-on sampler.
pub fn always_on_sampler() -> Sampler {
    Sampler::AlwaysOn
}

/// An always-off sampler.
pub fn always_off_sampler() -> Sampler {
    Sampler::AlwaysOff
}

/// A sampler admitting the given ratio of trace ids.
///
/// `fraction` is clamped by the SDK to `[0.0, 1.0]`.
pub fn trace_id_ratio_sampler(fraction: f64) -> Sampler {
    Sampler::TraceIdRatioBased(fraction)
}

/// A sampler deferring to the parent span's sampling decision, falling back
/// to `delegate` for root spans.
pub fn parent_based_sampler(delegate: Sampler) -> Sampler {
    Sampler::ParentBased(Box::new(delegate))
}
