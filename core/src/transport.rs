//! Execution of `HttpRequest` values against the network.
//!
//! # Design
//! The adapter talks to the HTTP client library through the `Transport`
//! trait, so the request/response mapping can be exercised against a fake
//! in unit tests and against `ureq` in production. `UreqTransport` keeps
//! the agent's defaults for pooling, redirects, TLS and timeouts; it only
//! disables status-as-error so non-2xx responses come back as data for the
//! `parse_*` methods to interpret.

use crate::error::ResourceError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a single HTTP round-trip.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ResourceError>;
}

/// Production transport backed by a `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ResourceError> {
        let result = match (&request.method, &request.body) {
            (HttpMethod::Get, _) => {
                with_headers(self.agent.get(&request.url), &request.headers).call()
            }
            (HttpMethod::Delete, _) => {
                with_headers(self.agent.delete(&request.url), &request.headers).call()
            }
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&request.url), &request.headers)
                    .send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                with_headers(self.agent.put(&request.url), &request.headers).send_empty()
            }
        };

        let mut response = result.map_err(|e| transport_error(&request.url, e))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| transport_error(&request.url, e))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<Any>(
    mut builder: ureq::RequestBuilder<Any>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<Any> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn transport_error(url: &str, error: ureq::Error) -> ResourceError {
    ResourceError::Transport {
        url: url.to_string(),
        message: error.to_string(),
    }
}
