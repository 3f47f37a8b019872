//! Declarative configuration for resources and data sources.
//!
//! # Design
//! The host engine hands the adapter plain attribute maps; both config
//! structs derive `Deserialize` so that handoff is a straight
//! deserialization. Credentials left unset fall back to the `HTTP_USER` /
//! `HTTP_PASS` environment variables. An unset or empty user disables
//! basic auth entirely — a password alone does nothing.

use std::collections::BTreeMap;
use std::env;

use serde::Deserialize;

/// Environment variable consulted when `http_user` is not configured.
pub const HTTP_USER_ENV: &str = "HTTP_USER";
/// Environment variable consulted when `http_pass` is not configured.
pub const HTTP_PASS_ENV: &str = "HTTP_PASS";

/// Configuration of a managed HTTP resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    pub url: String,
    #[serde(default)]
    pub http_user: Option<String>,
    #[serde(default)]
    pub http_pass: Option<String>,
    #[serde(default)]
    pub request_headers: BTreeMap<String, String>,
    pub body: String,
}

/// Configuration of a read-only data source: a resource minus the body.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceConfig {
    pub url: String,
    #[serde(default)]
    pub http_user: Option<String>,
    #[serde(default)]
    pub http_pass: Option<String>,
    #[serde(default)]
    pub request_headers: BTreeMap<String, String>,
}

impl ResourceConfig {
    /// Fill unset credentials from `HTTP_USER` / `HTTP_PASS`.
    pub fn env_defaults(self) -> Self {
        self.defaults_from(|name| env::var(name).ok())
    }

    fn defaults_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.http_user.is_none() {
            self.http_user = lookup(HTTP_USER_ENV);
        }
        if self.http_pass.is_none() {
            self.http_pass = lookup(HTTP_PASS_ENV);
        }
        self
    }

    pub(crate) fn auth(&self) -> Option<(String, String)> {
        resolve_auth(&self.http_user, &self.http_pass)
    }
}

impl DataSourceConfig {
    /// Fill unset credentials from `HTTP_USER` / `HTTP_PASS`.
    pub fn env_defaults(self) -> Self {
        self.defaults_from(|name| env::var(name).ok())
    }

    fn defaults_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.http_user.is_none() {
            self.http_user = lookup(HTTP_USER_ENV);
        }
        if self.http_pass.is_none() {
            self.http_pass = lookup(HTTP_PASS_ENV);
        }
        self
    }

    pub(crate) fn auth(&self) -> Option<(String, String)> {
        resolve_auth(&self.http_user, &self.http_pass)
    }
}

/// An empty user means no basic auth; a user without a password
/// authenticates with an empty password.
fn resolve_auth(user: &Option<String>, pass: &Option<String>) -> Option<(String, String)> {
    match user.as_deref() {
        Some(user) if !user.is_empty() => {
            Some((user.to_string(), pass.clone().unwrap_or_default()))
        }
        _ => None,
    }
}

pub(crate) fn header_pairs(headers: &BTreeMap<String, String>) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_config_deserializes_minimal_attributes() {
        let config: ResourceConfig = serde_json::from_str(
            r#"{"url":"http://localhost:3000/files/app.conf","body":"1.0.0"}"#,
        )
        .unwrap();
        assert_eq!(config.url, "http://localhost:3000/files/app.conf");
        assert_eq!(config.body, "1.0.0");
        assert!(config.http_user.is_none());
        assert!(config.http_pass.is_none());
        assert!(config.request_headers.is_empty());
    }

    #[test]
    fn resource_config_deserializes_all_attributes() {
        let config: ResourceConfig = serde_json::from_str(
            r#"{
                "url": "http://localhost:3000/files/app.conf",
                "http_user": "jane",
                "http_pass": "s3cret",
                "request_headers": {"X-Custom": "yes"},
                "body": "1.0.0"
            }"#,
        )
        .unwrap();
        assert_eq!(config.http_user.as_deref(), Some("jane"));
        assert_eq!(config.http_pass.as_deref(), Some("s3cret"));
        assert_eq!(config.request_headers.get("X-Custom").unwrap(), "yes");
    }

    #[test]
    fn resource_config_rejects_missing_url() {
        let result: Result<ResourceConfig, _> = serde_json::from_str(r#"{"body":"1.0.0"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn resource_config_rejects_missing_body() {
        let result: Result<ResourceConfig, _> =
            serde_json::from_str(r#"{"url":"http://localhost:3000/x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn data_source_config_has_no_body() {
        let config: DataSourceConfig =
            serde_json::from_str(r#"{"url":"http://localhost:3000/x"}"#).unwrap();
        assert_eq!(config.url, "http://localhost:3000/x");
    }

    #[test]
    fn defaults_fill_only_unset_credentials() {
        let config: ResourceConfig = serde_json::from_str(
            r#"{"url":"http://localhost:3000/x","http_user":"configured","body":"b"}"#,
        )
        .unwrap();
        let config = config.defaults_from(|name| match name {
            HTTP_USER_ENV => Some("from-env".to_string()),
            HTTP_PASS_ENV => Some("env-pass".to_string()),
            _ => None,
        });
        assert_eq!(config.http_user.as_deref(), Some("configured"));
        assert_eq!(config.http_pass.as_deref(), Some("env-pass"));
    }

    #[test]
    fn defaults_leave_credentials_unset_without_environment() {
        let config: DataSourceConfig =
            serde_json::from_str(r#"{"url":"http://localhost:3000/x"}"#).unwrap();
        let config = config.defaults_from(|_| None);
        assert!(config.http_user.is_none());
        assert!(config.http_pass.is_none());
    }

    #[test]
    fn empty_user_disables_auth() {
        assert_eq!(resolve_auth(&Some(String::new()), &Some("pass".to_string())), None);
        assert_eq!(resolve_auth(&None, &Some("pass".to_string())), None);
    }

    #[test]
    fn user_without_password_gets_empty_password() {
        assert_eq!(
            resolve_auth(&Some("jane".to_string()), &None),
            Some(("jane".to_string(), String::new()))
        );
    }
}
