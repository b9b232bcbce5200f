//! Request interceptors.
//!
//! An interceptor sees every outgoing request after header defaults have been
//! merged and before the request is handed to the transport. Interceptors run
//! in registration order; each one receives the result of the previous stage,
//! either a request to inspect or an error to handle.

pub mod normalizer;

pub use normalizer::BodyNormalizer;

use crate::client::error::RequestError;
use crate::models::request::RequestConfig;
use std::sync::Arc;

/// A hook invoked on every outgoing request.
pub trait RequestInterceptor: Send + Sync {
    /// Short name used in log records.
    fn name(&self) -> &str;

    /// Inspects or rewrites a request on its way out.
    fn on_request(&self, request: RequestConfig) -> Result<RequestConfig, RequestError>;

    /// Handles an error produced earlier in the pipeline.
    ///
    /// The default rejects with the same error, unchanged.
    fn on_request_error(&self, error: RequestError) -> Result<RequestConfig, RequestError> {
        Err(error)
    }
}

/// Handle returned by [`InterceptorChain::use_interceptor`], used to eject it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterceptorId(usize);

/// Ordered list of interceptors.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    entries: Vec<(InterceptorId, Arc<dyn RequestInterceptor>)>,
    next_id: usize,
}

impl InterceptorChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interceptor and returns its handle.
    pub fn use_interceptor<I>(&mut self, interceptor: I) -> InterceptorId
    where
        I: RequestInterceptor + 'static,
    {
        self.use_shared(Arc::new(interceptor))
    }

    /// Appends an interceptor that is shared with other chains.
    pub fn use_shared(&mut self, interceptor: Arc<dyn RequestInterceptor>) -> InterceptorId {
        let id = InterceptorId(self.next_id);
        self.next_id += 1;
        log::debug!("Registered request interceptor '{}'", interceptor.name());
        self.entries.push((id, interceptor));
        id
    }

    /// Removes an interceptor. Returns `false` if the handle is unknown.
    pub fn eject(&mut self, id: InterceptorId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        before != self.entries.len()
    }

    /// Removes every interceptor.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered interceptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the registered interceptors, in run order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, i)| i.name()).collect()
    }

    /// Threads a pipeline result through every interceptor.
    ///
    /// `Ok` values go to [`RequestInterceptor::on_request`], errors to
    /// [`RequestInterceptor::on_request_error`]. An interceptor may turn an
    /// error back into a request, or a request into an error.
    pub fn run(
        &self,
        mut result: Result<RequestConfig, RequestError>,
    ) -> Result<RequestConfig, RequestError> {
        for (_, interceptor) in &self.entries {
            result = match result {
                Ok(request) => {
                    log::trace!("[{}] interceptor '{}'", request.id, interceptor.name());
                    interceptor.on_request(request)
                }
                Err(error) => {
                    log::trace!("interceptor '{}' handling error: {}", interceptor.name(), error);
                    interceptor.on_request_error(error)
                }
            };
        }
        result
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("interceptors", &self.names())
            .finish()
    }
}
