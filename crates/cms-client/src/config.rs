//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Environment variable holding the backend origin.
pub const URL_ENV: &str = "STRAPI_URL";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "STRAPI_API_TOKEN";

/// Backend origin used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

/// Configuration for a [`CmsClient`](crate::CmsClient).
///
/// Values are fixed once the client is built; there is no process-wide
/// configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:1337`.
    pub base_url: Url,

    /// Bearer token sent on every request when present.
    pub api_token: Option<String>,

    /// `User-Agent` header value.
    pub user_agent: String,

    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            api_token: None,
            user_agent: default_user_agent(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given backend origin.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            ..Self::default()
        })
    }

    /// Read `STRAPI_URL` and `STRAPI_API_TOKEN` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = match non_empty(URL_ENV) {
            Some(url) => Self::new(url.trim())?,
            None => Self::default(),
        };
        config.api_token = non_empty(TOKEN_ENV);
        Ok(config)
    }

    /// Set the API token. A blank token clears it.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.api_token = (!token.trim().is_empty()).then_some(token);
        self
    }

    /// Set the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn default_user_agent() -> String {
    format!("cms-client/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:1337/");
        assert!(config.api_token.is_none());
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("cms-client/"));
    }

    #[test]
    fn test_from_lookup_with_no_variables() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:1337/");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_from_lookup_reads_url_and_token() {
        let config = ClientConfig::from_lookup(lookup(&[
            (URL_ENV, "https://cms.example.com"),
            (TOKEN_ENV, "secret"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://cms.example.com/");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_from_lookup_treats_empty_as_unset() {
        let config =
            ClientConfig::from_lookup(lookup(&[(URL_ENV, ""), (TOKEN_ENV, "  ")])).unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:1337/");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_from_lookup_rejects_bad_url() {
        let result = ClientConfig::from_lookup(lookup(&[(URL_ENV, "localhost without scheme")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("http://127.0.0.1:9000")
            .unwrap()
            .with_token("abc")
            .with_user_agent("menu-board")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.api_token.as_deref(), Some("abc"));
        assert_eq!(config.user_agent, "menu-board");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_with_empty_token_clears_it() {
        let config = ClientConfig::default().with_token("abc").with_token("");
        assert!(config.api_token.is_none());

        let config = ClientConfig::default().with_token(" \t ");
        assert!(config.api_token.is_none());
    }
}
