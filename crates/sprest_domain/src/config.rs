use std::time::Duration;

use derive_setters::Setters;
use url::Url;

use crate::ServerRelativeUrl;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

pub const USER_AGENT: &str = concat!("sprest/", env!("CARGO_PKG_VERSION"));

/// Connection settings for a single SharePoint site.
#[derive(Clone, Setters)]
#[setters(into)]
pub struct SharepointConfig {
    /// Absolute URL of the site, e.g. `https://contoso.sharepoint.com/sites/team/`.
    pub site_url: Url,
    /// Prefix prepended to every path handed to the client, typically the
    /// document library, e.g. `/sites/team/Shared Documents`.
    pub server_relative_url: ServerRelativeUrl,
    /// Pre-acquired OAuth bearer token.
    pub access_token: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl SharepointConfig {
    pub fn new(site_url: Url, access_token: impl Into<String>) -> Self {
        Self {
            site_url: as_directory(site_url),
            server_relative_url: ServerRelativeUrl::default(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Resolves an `_api/...` path against the site URL.
    pub fn api_url(&self, path: &str) -> Result<Url, ConfigError> {
        as_directory(self.site_url.clone())
            .join(path)
            .map_err(|source| ConfigError::InvalidUrl { value: path.to_string(), source })
    }

    /// Resolves a caller-supplied path against the configured prefix.
    pub fn resolve(&self, path: &str) -> ServerRelativeUrl {
        self.server_relative_url.join(path)
    }
}

impl std::fmt::Debug for SharepointConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharepointConfig")
            .field("site_url", &self.site_url.as_str())
            .field("server_relative_url", &self.server_relative_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),

    #[error("Invalid URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixture() -> SharepointConfig {
        SharepointConfig::new(
            Url::parse("https://contoso.sharepoint.com/sites/team").unwrap(),
            "token",
        )
        .server_relative_url("/sites/team/Shared Documents")
    }

    #[test]
    fn test_api_url_keeps_site_path() {
        let actual = fixture().api_url("_api/web/folders").unwrap();
        assert_eq!(
            actual.as_str(),
            "https://contoso.sharepoint.com/sites/team/_api/web/folders"
        );
    }

    #[test]
    fn test_api_url_when_site_url_replaced_by_setter() {
        let config = fixture().site_url(Url::parse("http://127.0.0.1:1234/sites/x").unwrap());
        let actual = config.api_url("_api/web/folders").unwrap();
        assert_eq!(actual.as_str(), "http://127.0.0.1:1234/sites/x/_api/web/folders");
    }

    #[test]
    fn test_resolve_prefixes_base() {
        let actual = fixture().resolve("/Reports");
        assert_eq!(actual.as_str(), "/sites/team/Shared Documents/Reports");
    }

    #[test]
    fn test_debug_redacts_token() {
        let actual = format!("{:?}", fixture());
        assert!(!actual.contains("\"token\""));
        assert!(actual.contains("<redacted>"));
    }
}
