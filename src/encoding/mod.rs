//! Payload encoders.
//!
//! - **json**: JSON text for `application/json` requests
//! - **query**: `qs`-style query strings for form-encoded requests
//!
//! Both write whole-number floats without a fractional part (`1.0` -> `1`),
//! matching how browsers print numbers.

pub mod json;
pub mod query;

pub use query::{stringify, ArrayFormat, QueryOptions};

use serde_json::{Number, Value};

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Returns the integer a float stands for, if it is a whole number.
fn whole_float(n: &Number) -> Option<i64> {
    if !n.is_f64() {
        return None;
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f.abs() < MAX_SAFE_FLOAT {
        Some(f as i64)
    } else {
        None
    }
}

/// Text of a number, with whole-number floats printed as integers.
pub(crate) fn number_text(n: &Number) -> String {
    match whole_float(n) {
        Some(i) => i.to_string(),
        None => n.to_string(),
    }
}

/// Rewrites whole-number floats anywhere in a value as integers.
pub(crate) fn collapse_whole_floats(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if let Some(i) = whole_float(n) {
                *value = Value::from(i);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(collapse_whole_floats),
        Value::Object(map) => map.values_mut().for_each(collapse_whole_floats),
        _ => {}
    }
}
