//! Error types for the HTTP resource adapter.
//!
//! # Design
//! A 404 on read is not an error — the resource is simply absent, and the
//! lifecycle layer clears the identity instead. Every other non-200 status
//! lands in `UnexpectedStatus` with the raw status code and body for
//! debugging. Network-level failures carry the URL that was being
//! requested.

use std::fmt;

/// Errors returned by the adapter's operations.
#[derive(Debug)]
pub enum ResourceError {
    /// The server returned a status other than the one the operation
    /// expects (and other than 404 on read).
    UnexpectedStatus { status: u16, body: String },

    /// The request never produced a response: connection failure, DNS
    /// failure, malformed URL, or an unreadable response body.
    Transport { url: String, message: String },

    /// A required configuration attribute was missing or empty.
    MissingAttribute(&'static str),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::UnexpectedStatus { status, body } => {
                if body.is_empty() {
                    write!(f, "unexpected response code: {status}")
                } else {
                    write!(f, "unexpected response code: {status}: {body}")
                }
            }
            ResourceError::Transport { url, message } => {
                write!(f, "request to {url} failed: {message}")
            }
            ResourceError::MissingAttribute(name) => {
                write!(f, "required attribute `{name}` is missing or empty")
            }
        }
    }
}

impl std::error::Error for ResourceError {}
