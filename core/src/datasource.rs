//! Read-only data-source projection of a remote HTTP document.

use crate::client::{ReadOutcome, ResourceClient};
use crate::config::{header_pairs, DataSourceConfig};
use crate::error::ResourceError;
use crate::transport::Transport;

/// A remote HTTP document exposed as a read-only data source.
///
/// Shares the resource's read mapping: a 404 leaves the data source
/// absent without error, a 200 stores the body and its content identity.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: ResourceClient,
    body: String,
    id: Option<String>,
}

impl HttpDataSource {
    pub fn new(config: DataSourceConfig) -> Result<Self, ResourceError> {
        let config = config.env_defaults();
        if config.url.is_empty() {
            return Err(ResourceError::MissingAttribute("url"));
        }
        let auth = config.auth();
        let headers = header_pairs(&config.request_headers);
        Ok(Self {
            client: ResourceClient::new(config.url, auth, headers),
            body: String::new(),
            id: None,
        })
    }

    /// Body fetched by the last successful `read`; empty before then.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn exists(&self) -> bool {
        self.id.is_some()
    }

    pub fn url(&self) -> &str {
        self.client.url()
    }

    pub fn read(&mut self, transport: &impl Transport) -> Result<(), ResourceError> {
        let request = self.client.build_read();
        let response = transport.execute(&request)?;
        match self.client.parse_read(response)? {
            ReadOutcome::Found { body, id } => {
                self.body = body;
                self.id = Some(id);
            }
            ReadOutcome::Absent => {
                self.body.clear();
                self.id = None;
            }
        }
        Ok(())
    }
}
