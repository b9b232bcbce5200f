//! Per-method header defaults.

use super::{CONTENT_TYPE, FORM_URLENCODED_UTF8, X_REQUESTED_WITH, XML_HTTP_REQUEST};
use crate::models::request::{HttpMethod, RequestConfig};
use std::collections::HashMap;

/// Default headers merged into every outgoing request.
///
/// Headers in `common` apply to every method; a method bucket applies only
/// to that method and wins over `common`. Headers set on the request itself
/// always win over both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDefaults {
    common: HashMap<String, String>,
    per_method: HashMap<HttpMethod, HashMap<String, String>>,
}

impl HeaderDefaults {
    /// Creates an empty set of defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The defaults every client starts with.
    ///
    /// All requests carry `X-Requested-With: XMLHttpRequest`; POST requests
    /// additionally carry a form-urlencoded UTF-8 content type.
    pub fn standard() -> Self {
        let mut defaults = Self::new();
        defaults.set_common(X_REQUESTED_WITH, XML_HTTP_REQUEST);
        defaults.set_for(HttpMethod::POST, CONTENT_TYPE, FORM_URLENCODED_UTF8);
        defaults
    }

    /// Sets a default for every method.
    pub fn set_common(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.common.insert(name.into(), value.into());
    }

    /// Sets a default for one method.
    pub fn set_for(
        &mut self,
        method: HttpMethod,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.per_method
            .entry(method)
            .or_default()
            .insert(name.into(), value.into());
    }

    /// Removes a common default, ignoring ASCII case. Returns whether anything was removed.
    pub fn remove_common(&mut self, name: &str) -> bool {
        let before = self.common.len();
        self.common.retain(|k, _| !k.eq_ignore_ascii_case(name));
        before != self.common.len()
    }

    /// Removes a method default, ignoring ASCII case. Returns whether anything was removed.
    pub fn remove_for(&mut self, method: HttpMethod, name: &str) -> bool {
        match self.per_method.get_mut(&method) {
            Some(bucket) => {
                let before = bucket.len();
                bucket.retain(|k, _| !k.eq_ignore_ascii_case(name));
                before != bucket.len()
            }
            None => false,
        }
    }

    /// Headers applied to every method.
    pub fn common(&self) -> &HashMap<String, String> {
        &self.common
    }

    /// Headers applied to one method, if any were configured.
    pub fn for_method(&self, method: HttpMethod) -> Option<&HashMap<String, String>> {
        self.per_method.get(&method)
    }

    /// Checks whether no defaults are configured at all.
    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.per_method.values().all(HashMap::is_empty)
    }

    /// Merges the defaults into a request.
    ///
    /// A default is skipped when the request already carries a header of the
    /// same name under any ASCII case.
    pub fn apply(&self, request: &mut RequestConfig) {
        let method_bucket = self.per_method.get(&request.method).into_iter().flatten();

        for (name, value) in method_bucket.chain(self.common.iter()) {
            if request.has_header(name) {
                continue;
            }
            log::trace!("[{}] default header {}: {}", request.id, name, value);
            request.add_header(name.clone(), value.clone());
        }
    }
}
