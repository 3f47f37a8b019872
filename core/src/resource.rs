//! Managed-resource lifecycle over a remote HTTP document.
//!
//! # Design
//! `HttpResource` is the state object the host engine's
//! create/read/update/delete callbacks operate on. Each operation builds a
//! request through the stateless `ResourceClient`, executes it on the
//! given `Transport`, and folds the parsed outcome back into local state:
//! the body mirrors the last known remote content and the identity is the
//! content hash of that body, or `None` while the document is absent.

use crate::client::{content_id, ReadOutcome, ResourceClient};
use crate::config::{header_pairs, ResourceConfig};
use crate::error::ResourceError;
use crate::transport::Transport;

/// A remote HTTP document managed as a resource.
///
/// The URL and credentials are fixed at construction; replacing the URL
/// means constructing a new resource.
#[derive(Debug, Clone)]
pub struct HttpResource {
    client: ResourceClient,
    body: String,
    id: Option<String>,
}

impl HttpResource {
    /// Applies `HTTP_USER` / `HTTP_PASS` defaulting before validating that
    /// `url` and `body` are present.
    pub fn new(config: ResourceConfig) -> Result<Self, ResourceError> {
        let config = config.env_defaults();
        if config.url.is_empty() {
            return Err(ResourceError::MissingAttribute("url"));
        }
        if config.body.is_empty() {
            return Err(ResourceError::MissingAttribute("body"));
        }
        let auth = config.auth();
        let headers = header_pairs(&config.request_headers);
        Ok(Self {
            client: ResourceClient::new(config.url, auth, headers),
            body: config.body,
            id: None,
        })
    }

    /// Last known document body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Content identity of the last known body, `None` while absent.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn exists(&self) -> bool {
        self.id.is_some()
    }

    pub fn url(&self) -> &str {
        self.client.url()
    }

    /// PUT the configured body. On 200 the identity becomes the content
    /// hash of that body.
    pub fn create(&mut self, transport: &impl Transport) -> Result<(), ResourceError> {
        let request = self.client.build_write(&self.body);
        let response = transport.execute(&request)?;
        self.client.parse_write(response)?;
        self.id = Some(content_id(&self.body));
        Ok(())
    }

    /// GET the document. 404 clears the identity without error; 200
    /// overwrites the local body with the server content and refreshes the
    /// identity.
    pub fn read(&mut self, transport: &impl Transport) -> Result<(), ResourceError> {
        let request = self.client.build_read();
        let response = transport.execute(&request)?;
        match self.client.parse_read(response)? {
            ReadOutcome::Found { body, id } => {
                self.body = body;
                self.id = Some(id);
            }
            ReadOutcome::Absent => {
                self.id = None;
            }
        }
        Ok(())
    }

    /// Re-issue the PUT, same as `create`.
    pub fn update(&mut self, transport: &impl Transport) -> Result<(), ResourceError> {
        self.create(transport)
    }

    /// DELETE the document. On 200 the identity is cleared.
    pub fn delete(&mut self, transport: &impl Transport) -> Result<(), ResourceError> {
        let request = self.client.build_delete();
        let response = transport.execute(&request)?;
        self.client.parse_delete(response)?;
        self.id = None;
        Ok(())
    }

    /// Replace the configured body, e.g. when the host engine applies a
    /// changed plan before calling `update`.
    pub fn set_body(&mut self, body: String) {
        self.body = body;
    }
}
