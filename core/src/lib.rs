//! Adapter exposing a remote HTTP endpoint's content as a managed
//! resource and as a read-only data source.
//!
//! # Overview
//! Declarative configuration (URL, body, headers, basic-auth credentials)
//! is translated into HTTP GET/PUT/DELETE calls, and response codes and
//! bodies are mapped back into resource state. A document's identity is
//! the MD5 hex digest of its last known body.
//!
//! # Design
//! - `ResourceClient` is stateless: each operation is split into a
//!   `build_*` method producing an `HttpRequest` and a `parse_*` method
//!   consuming an `HttpResponse`, so the mapping never touches the
//!   network itself.
//! - The `Transport` trait executes the round-trip between the two;
//!   `UreqTransport` is the production implementation, and everything the
//!   mapping does not decide (pooling, redirects, TLS, timeouts) stays
//!   with the agent's defaults.
//! - `HttpResource` and `HttpDataSource` are the state objects the host
//!   engine's lifecycle callbacks operate on.
//! - No retries and no transient/permanent distinction: a non-200 status
//!   other than 404-on-read is surfaced verbatim with its status code.

pub mod client;
pub mod config;
pub mod datasource;
pub mod error;
pub mod http;
pub mod resource;
pub mod transport;

pub use client::{content_id, ReadOutcome, ResourceClient};
pub use config::{DataSourceConfig, ResourceConfig, HTTP_PASS_ENV, HTTP_USER_ENV};
pub use datasource::HttpDataSource;
pub use error::ResourceError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use resource::HttpResource;
pub use transport::{Transport, UreqTransport};
