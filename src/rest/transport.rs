//! The transport seam consumed by every resource binding.

use std::collections::HashMap;

use crate::clients::{HttpResponse, RestClient, RestError};

/// Sends REST requests relative to `/admin/api/{version}/`.
///
/// Bindings only ever hold a shared reference to a transport. A transport may
/// either turn non-2xx responses into [`RestError::Http`] (as [`RestClient`]
/// does) or hand them back as values; bindings treat both the same way.
#[allow(async_fn_in_trait)]
pub trait RestTransport {
    /// Sends a GET request.
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError>;

    /// Sends a POST request with a JSON body.
    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError>;

    /// Sends a PUT request with a JSON body.
    async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError>;

    /// Sends a DELETE request.
    async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError>;
}

impl RestTransport for RestClient {
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        Self::get(self, path, query).await
    }

    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        Self::post(self, path, body, query).await
    }

    async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        Self::put(self, path, body, query).await
    }

    async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        Self::delete(self, path, query).await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    use super::RestTransport;
    use crate::clients::{HttpError, HttpMethod, HttpResponse, HttpResponseError, RestError};

    /// A request as the transport received it.
    #[derive(Clone, Debug)]
    pub struct RecordedCall {
        pub method: HttpMethod,
        pub path: String,
        pub body: Option<serde_json::Value>,
        pub query: Option<HashMap<String, String>>,
    }

    /// In-memory transport: replays queued responses and records each call.
    #[derive(Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, RestError>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a response with `code` and `body`, returned as a value.
        pub fn respond(self, code: u16, body: serde_json::Value) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(HttpResponse::new(code, HashMap::new(), body)));
            self
        }

        /// Queues a transport-level failure with status `code`.
        pub fn fail(self, code: u16, message: &str) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(RestError::Http(HttpError::Response(HttpResponseError {
                    code,
                    message: message.to_string(),
                    error_reference: Some("mock-request".to_string()),
                }))));
            self
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn last_call(&self) -> RecordedCall {
            self.calls
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request was sent")
        }

        fn record(
            &self,
            method: HttpMethod,
            path: &str,
            body: Option<serde_json::Value>,
            query: Option<HashMap<String, String>>,
        ) -> Result<HttpResponse, RestError> {
            self.calls.lock().unwrap().push(RecordedCall {
                method,
                path: path.to_string(),
                body,
                query,
            });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected request: no response queued")
        }
    }

    impl RestTransport for MockTransport {
        async fn get(
            &self,
            path: &str,
            query: Option<HashMap<String, String>>,
        ) -> Result<HttpResponse, RestError> {
            self.record(HttpMethod::Get, path, None, query)
        }

        async fn post(
            &self,
            path: &str,
            body: serde_json::Value,
            query: Option<HashMap<String, String>>,
        ) -> Result<HttpResponse, RestError> {
            self.record(HttpMethod::Post, path, Some(body), query)
        }

        async fn put(
            &self,
            path: &str,
            body: serde_json::Value,
            query: Option<HashMap<String, String>>,
        ) -> Result<HttpResponse, RestError> {
            self.record(HttpMethod::Put, path, Some(body), query)
        }

        async fn delete(
            &self,
            path: &str,
            query: Option<HashMap<String, String>>,
        ) -> Result<HttpResponse, RestError> {
            self.record(HttpMethod::Delete, path, None, query)
        }
    }
}
