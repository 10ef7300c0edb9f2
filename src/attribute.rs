//! Keys, values, and typed key-value constructors.
//!
//! Attributes describe spans, metric data points, log records, and
//! resources. The types here are straight re-exports of the
//! [`opentelemetry`] attribute model; the free functions are shorthand for
//! [`KeyValue::new`] with the value coerced into the matching [`Value`]
//! variant:
//!
//! ```
//! use tel::attribute;
//!
//! let kvs = [
//!     attribute::string("http.method", "GET"),
//!     attribute::int("http.status_code", 200),
//!     attribute::bool("http.retried", false),
//!     attribute::float_slice("rpc.latencies", vec![0.13, 0.21]),
//! ];
//! # drop(kvs);
//! ```

pub use opentelemetry::{Array, Key, KeyValue, StringValue, Value};

/// Creates a key-value pair with a boolean value.
pub fn bool(key: impl Into<Key>, value: bool) -> KeyValue {
    KeyValue::new(key, value)
}

/// Creates a key-value pair with a 64-bit signed integer value.
pub fn int(key: impl Into<Key>, value: i64) -> KeyValue {
    KeyValue::new(key, value)
}

/// Creates a key-value pair with a 64-bit floating point value.
pub fn float(key: impl Into<Key>, value: f64) -> KeyValue {
    KeyValue::new(key, value)
}

/// Creates a key-value pair with a string value.
pub fn string(key: impl Into<Key>, value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(key, value.into())
}

/// Creates a key-value pair with a boolean-array value.
pub fn bool_slice(key: impl Into<Key>, value: Vec<bool>) -> KeyValue {
    KeyValue::new(key, Value::Array(Array::Bool(value)))
}

/// Creates a key-value pair with an integer-array value.
pub fn int_slice(key: impl Into<Key>, value: Vec<i64>) -> KeyValue {
    KeyValue::new(key, Value::Array(Array::I64(value)))
}

/// Creates a key-value pair with a floating point-array value.
pub fn float_slice(key: impl Into<Key>, value: Vec<f64>) -> KeyValue {
    KeyValue::new(key, Value::Array(Array::F64(value)))
}

/// Creates a key-value pair with a string-array value.
pub fn string_slice(key: impl Into<Key>, value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(key, Value::Array(Array::String(value)))
}

/// Creates a boolean [`Value`].
pub fn bool_value(value: bool) -> Value {
    Value::Bool(value)
}

/// Creates an integer [`Value`].
pub fn int_value(value: i64) -> Value {
    Value::I64(value)
}

/// Creates a floating point [`Value`].
pub fn float_value(value: f64) -> Value {
    Value::F64(value)
}

/// Creates a string [`Value`].
pub fn string_value(value: impl Into<StringValue>) -> Value {
    Value::String(value.into())
}
