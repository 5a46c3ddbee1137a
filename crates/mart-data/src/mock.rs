//! In-memory [`Transport`] for tests and backend doubles.

use crate::{Envelope, FetchError, Method, RequestSpec, Transport};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

type Handler = Box<dyn Fn(&RequestSpec) -> Result<Value, FetchError> + Send + Sync>;

struct Route {
    method: Method,
    path: String,
    handler: Handler,
}

/// A transport that answers from registered handlers and records every call.
///
/// Each call yields to the scheduler once before answering so callers can
/// observe a request as in flight.
#[derive(Default)]
pub struct MockTransport {
    routes: Vec<Route>,
    calls: Mutex<Vec<RequestSpec>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with the handler's result.
    pub fn on<F>(mut self, method: Method, path: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&RequestSpec) -> Result<Value, FetchError> + Send + Sync + 'static,
    {
        self.routes.push(Route {
            method,
            path: path.into(),
            handler: Box::new(handler),
        });
        self
    }

    /// Answer `method path` with a fixed payload.
    pub fn respond(self, method: Method, path: impl Into<String>, result: Value) -> Self {
        self.on(method, path, move |_| Ok(result.clone()))
    }

    /// Fail `method path` with a fixed error.
    pub fn fail(self, method: Method, path: impl Into<String>, error: FetchError) -> Self {
        self.on(method, path, move |_| Err(error.clone()))
    }

    /// Every request sent so far, in order.
    pub fn calls(&self) -> Vec<RequestSpec> {
        self.calls.lock().clone()
    }

    /// Number of requests sent to `method path`.
    pub fn call_count(&self, method: Method, path: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.method == method && c.url == path)
            .count()
    }

    /// Total number of requests sent.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, spec: RequestSpec) -> Result<Envelope, FetchError> {
        self.calls.lock().push(spec.clone());

        tokio::task::yield_now().await;

        let route = self
            .routes
            .iter()
            .find(|r| r.method == spec.method && r.path == spec.url)
            .ok_or_else(|| FetchError::Api {
                status: 404,
                code: "404".to_string(),
                message: format!("no route for {} {}", spec.method, spec.url),
            })?;

        (route.handler)(&spec).map(Envelope::success)
    }
}
