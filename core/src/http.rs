//! HTTP transport seam.
//!
//! # Design
//! Requests and responses are plain data. `AccountsClient` builds an
//! `HttpRequest`, hands it to a `Transport`, and parses the returned
//! `HttpResponse`, so the decode path can be exercised without a network.
//!
//! A transport only reads the body of a 2xx response. Anything else comes
//! back with an empty body; the client fails with `ApiError::Status` before
//! looking at it. The underlying response handle is dropped inside
//! `execute`, so the connection is released on every path.
//!
//! Bodies are raw bytes. Whether they are UTF-8 or JSON is a decode
//! concern, not a transport one. `UreqTransport` reads the full body with
//! no size cap.

use std::time::Duration;

use crate::error::BoxError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one request and returns its response.
///
/// Implementations must report connect, TLS, and body-read failures as `Err`
/// and every received status (including 4xx/5xx) as `Ok`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a pooled `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// `timeout` bounds the whole exchange; `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call()?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Ok(HttpResponse {
                status,
                body: Vec::new(),
            });
        }

        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;
        Ok(HttpResponse { status, body })
    }
}
