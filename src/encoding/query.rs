//! Query-string serialization for structured payloads.
//!
//! Turns a JSON value into `application/x-www-form-urlencoded` text the way
//! browser form libraries do: nested objects become bracketed keys and
//! arrays follow a configurable [`ArrayFormat`].

use super::number_text;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything outside the RFC 3986 unreserved set is percent-encoded.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// How multi-valued fields are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayFormat {
    /// `a=1&a=2`
    #[default]
    Repeat,
    /// `a[]=1&a[]=2`
    Brackets,
    /// `a[0]=1&a[1]=2`
    Indices,
    /// `a=1,2`
    Comma,
}

impl ArrayFormat {
    /// Returns the lowercase name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrayFormat::Repeat => "repeat",
            ArrayFormat::Brackets => "brackets",
            ArrayFormat::Indices => "indices",
            ArrayFormat::Comma => "comma",
        }
    }

    fn element_key(&self, prefix: &str, index: usize) -> String {
        match self {
            ArrayFormat::Repeat | ArrayFormat::Comma => prefix.to_string(),
            ArrayFormat::Brackets => format!("{}[]", prefix),
            ArrayFormat::Indices => format!("{}[{}]", prefix, index),
        }
    }
}

impl std::fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for [`stringify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Layout of array values.
    pub array_format: ArrayFormat,
    /// Percent-encode keys and values.
    pub encode: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            array_format: ArrayFormat::Repeat,
            encode: true,
        }
    }
}

impl QueryOptions {
    /// Options with the given array format and encoding enabled.
    pub fn with_array_format(array_format: ArrayFormat) -> Self {
        Self {
            array_format,
            ..Self::default()
        }
    }
}

/// Serializes a structured value into a query string.
///
/// Objects contribute one entry per field, in insertion order. A top-level
/// array uses its indices as keys. Scalars at the top level have no keys
/// and produce an empty string.
///
/// `null` is written as an empty value (`a=`); empty arrays and empty
/// objects produce nothing at all.
///
/// # Examples
///
/// ```
/// use request_pipeline::encoding::query::{stringify, QueryOptions};
/// use serde_json::json;
///
/// let body = stringify(&json!({"a": [1, 2], "b": "x y"}), &QueryOptions::default());
/// assert_eq!(body, "a=1&a=2&b=x%20y");
/// ```
pub fn stringify(value: &Value, options: &QueryOptions) -> String {
    let mut pairs = Vec::new();

    match value {
        Value::Object(map) => {
            for (key, field) in map {
                push_pairs(key.clone(), field, options, &mut pairs);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_pairs(index.to_string(), item, options, &mut pairs);
            }
        }
        _ => {}
    }

    pairs.join("&")
}

fn push_pairs(prefix: String, value: &Value, options: &QueryOptions, pairs: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, field) in map {
                push_pairs(format!("{}[{}]", prefix, key), field, options, pairs);
            }
        }
        Value::Array(items) if options.array_format == ArrayFormat::Comma => {
            if items.is_empty() {
                return;
            }
            let joined = items.iter().map(scalar_text).collect::<Vec<_>>().join(",");
            pairs.push(encode_pair(&prefix, &joined, options));
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let key = options.array_format.element_key(&prefix, index);
                push_pairs(key, item, options, pairs);
            }
        }
        scalar => pairs.push(encode_pair(&prefix, &scalar_text(scalar), options)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        // Only reachable for comma-joined arrays holding containers
        other => other.to_string(),
    }
}

fn encode_pair(key: &str, value: &str, options: &QueryOptions) -> String {
    if options.encode {
        format!(
            "{}={}",
            utf8_percent_encode(key, QUERY_SET),
            utf8_percent_encode(value, QUERY_SET)
        )
    } else {
        format!("{}={}", key, value)
    }
}
