//! Stateless HTTP request builder and response parser for a remote
//! document endpoint.
//!
//! # Design
//! `ResourceClient` holds the endpoint URL, optional basic-auth
//! credentials and the configured request headers, and carries no mutable
//! state between calls. Each operation is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. A `Transport` executes the actual round-trip between
//! the two, keeping the mapping itself deterministic and free of I/O.
//!
//! Status handling mirrors the endpoint contract: exactly 200 is success
//! for every operation, and a 404 on read means the document is absent
//! rather than an error.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use md5::{Digest, Md5};

use crate::error::ResourceError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Outcome of interpreting a read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The endpoint returned 200. `id` is the content identity of `body`.
    Found { body: String, id: String },

    /// The endpoint returned 404 — the document does not exist.
    Absent,
}

/// Stateless request builder / response parser for one endpoint.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    url: String,
    auth: Option<(String, String)>,
    headers: Vec<(String, String)>,
}

impl ResourceClient {
    /// `auth` is a `(user, pass)` pair; `headers` are forwarded verbatim
    /// on every request, except that basic-auth credentials replace any
    /// `Authorization` entry.
    pub fn new(
        url: String,
        auth: Option<(String, String)>,
        headers: Vec<(String, String)>,
    ) -> Self {
        Self { url, auth, headers }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn build_read(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url.clone(),
            headers: self.request_headers(),
            body: None,
        }
    }

    pub fn build_write(&self, body: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            url: self.url.clone(),
            headers: self.request_headers(),
            body: Some(body.to_string()),
        }
    }

    pub fn build_delete(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.url.clone(),
            headers: self.request_headers(),
            body: None,
        }
    }

    /// 404 means the document is absent; 200 yields the body and its
    /// content identity; anything else is an error.
    pub fn parse_read(&self, response: HttpResponse) -> Result<ReadOutcome, ResourceError> {
        if response.status == 404 {
            return Ok(ReadOutcome::Absent);
        }
        check_status(&response)?;
        let id = content_id(&response.body);
        Ok(ReadOutcome::Found {
            body: response.body,
            id,
        })
    }

    /// The write response body is ignored; only the status matters.
    pub fn parse_write(&self, response: HttpResponse) -> Result<(), ResourceError> {
        check_status(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ResourceError> {
        check_status(&response)
    }

    /// Configured headers plus the basic-auth `Authorization` header when
    /// credentials are present. Credentials win over a conflicting
    /// `Authorization` entry from the header map.
    fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = self.headers.clone();
        if let Some((user, pass)) = &self.auth {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
            headers.push(("Authorization".to_string(), basic_auth_value(user, pass)));
        }
        headers
    }
}

/// Content identity of a document body: lowercase hex MD5 digest.
pub fn content_id(body: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(body.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// `Basic` credential value for an `Authorization` header.
fn basic_auth_value(user: &str, pass: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{user}:{pass}")))
}

/// Map any status other than 200 to `UnexpectedStatus`.
fn check_status(response: &HttpResponse) -> Result<(), ResourceError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ResourceError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
