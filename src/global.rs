//! Process-wide default providers and propagator.
//!
//! Applications install their configured SDK providers here once at startup;
//! libraries then obtain tracers and meters through the same accessors
//! without holding a provider handle themselves. All registration and
//! lookup is delegated to [`opentelemetry::global`], including its
//! behavior before a provider is installed (no-op implementations).
//!
//! ```
//! use tel::sdk::trace::SdkTracerProvider;
//!
//! let provider = SdkTracerProvider::builder().build();
//! tel::global::set_tracer_provider(provider);
//!
//! let tracer = tel::global::tracer("my-library");
//! # drop(tracer);
//! ```

use opentelemetry::global;
use opentelemetry::propagation::TextMapPropagator;

#[cfg(feature = "metrics")]
use std::sync::Arc;

#[cfg(feature = "metrics")]
use opentelemetry::metrics::{Meter, MeterProvider};
#[cfg(feature = "trace")]
use opentelemetry::trace::{Span, Tracer, TracerProvider};
#[cfg(feature = "trace")]
use opentelemetry::InstrumentationScope;

#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub use opentelemetry::global::{BoxedSpan, BoxedTracer, GlobalTracerProvider};

/// Creates a named tracer from the global tracer provider.
///
/// Before a provider is installed with [`set_tracer_provider`] the returned
/// tracer performs no operations.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn tracer(name: &'static str) -> BoxedTracer {
    global::tracer(name)
}

/// Creates a tracer carrying the given instrumentation scope from the
/// global tracer provider.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn tracer_with_scope(scope: InstrumentationScope) -> BoxedTracer {
    global::tracer_with_scope(scope)
}

/// Returns a handle to the currently installed global tracer provider.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn tracer_provider() -> GlobalTracerProvider {
    global::tracer_provider()
}

/// Installs `provider` as the global tracer provider, returning the one it
/// replaced.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn set_tracer_provider<P, T, S>(provider: P) -> GlobalTracerProvider
where
    S: Span + Send + Sync + 'static,
    T: Tracer<Span = S> + Send + Sync + 'static,
    P: TracerProvider<Tracer = T> + Send + Sync + 'static,
{
    global::set_tracer_provider(provider)
}

/// Creates a named meter from the global meter provider.
///
/// Before a provider is installed with [`set_meter_provider`] the returned
/// meter performs no operations.
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub fn meter(name: &'static str) -> Meter {
    global::meter(name)
}

/// Creates a meter carrying the given instrumentation scope from the
/// global meter provider.
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub fn meter_with_scope(scope: opentelemetry::InstrumentationScope) -> Meter {
    global::meter_with_scope(scope)
}

/// Returns a handle to the currently installed global meter provider.
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub fn meter_provider() -> Arc<dyn MeterProvider + Send + Sync> {
    global::meter_provider()
}

/// Installs `provider` as the global meter provider.
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub fn set_meter_provider<P>(provider: P)
where
    P: MeterProvider + Send + Sync + 'static,
{
    global::set_meter_provider(provider)
}

/// Installs `propagator` as the global text-map propagator.
pub fn set_text_map_propagator<P>(propagator: P)
where
    P: TextMapPropagator + Send + Sync + 'static,
{
    global::set_text_map_propagator(propagator)
}

/// Runs `f` with a reference to the global text-map propagator.
///
/// If none has been installed, `f` receives a no-op propagator.
pub fn get_text_map_propagator<T, F>(f: F) -> T
where
    F: FnMut(&dyn TextMapPropagator) -> T,
{
    global::get_text_map_propagator(f)
}
