//! HTTP transport types shared across the adapter.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! `ResourceClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network — a `Transport` implementation
//! is responsible for executing the actual I/O. This separation keeps the
//! request/response mapping deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! across the transport seam.

/// HTTP method for a request. The adapter only ever issues GET, PUT and
/// DELETE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ResourceClient::build_*` methods. A `Transport` executes this
/// request against the network and returns the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by a `Transport` after executing an `HttpRequest`, then
/// passed to `ResourceClient::parse_*` methods for status interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
