use std::collections::HashMap;
use std::time::Duration;

use sprest_app::EnvironmentInfra;
use sprest_domain::{ConfigError, SharepointConfig};
use tracing::debug;
use url::Url;

pub const SITE_URL_VAR: &str = "SHAREPOINT_SITE_URL";
pub const SERVER_RELATIVE_URL_VAR: &str = "SHAREPOINT_SERVER_RELATIVE_URL";
pub const ACCESS_TOKEN_VAR: &str = "SHAREPOINT_ACCESS_TOKEN";
pub const TIMEOUT_SECS_VAR: &str = "SHAREPOINT_TIMEOUT_SECS";

/// Serves the site configuration the rest of the stack runs against.
pub struct SprestEnvironmentInfra {
    config: SharepointConfig,
}

impl SprestEnvironmentInfra {
    pub fn new(config: SharepointConfig) -> Self {
        Self { config }
    }

    /// Builds the configuration from process environment variables, after
    /// loading a `.env` file from the working directory when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_overrides(&HashMap::new())
    }

    /// Like [`Self::from_env`], with `overrides` taking precedence over both
    /// the process environment and `.env`.
    pub fn from_env_with_overrides(
        overrides: &HashMap<&'static str, String>,
    ) -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| {
            overrides
                .get(key)
                .cloned()
                .or_else(|| std::env::var(key).ok())
        })
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let site_url = value(SITE_URL_VAR).ok_or(ConfigError::Missing(SITE_URL_VAR))?;
        let site_url = Url::parse(site_url.trim())
            .map_err(|source| ConfigError::InvalidUrl { value: site_url.clone(), source })?;
        let access_token = value(ACCESS_TOKEN_VAR).ok_or(ConfigError::Missing(ACCESS_TOKEN_VAR))?;

        let mut config = SharepointConfig::new(site_url, access_token.trim());

        if let Some(prefix) = value(SERVER_RELATIVE_URL_VAR) {
            config = config.server_relative_url(prefix.trim());
        }

        if let Some(secs) = value(TIMEOUT_SECS_VAR) {
            let secs = secs.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: TIMEOUT_SECS_VAR,
                value: secs.clone(),
            })?;
            config = config.timeout(Duration::from_secs(secs));
        }

        debug!(config = ?config, "Resolved SharePoint configuration");
        Ok(Self::new(config))
    }
}

impl EnvironmentInfra for SprestEnvironmentInfra {
    fn get_config(&self) -> SharepointConfig {
        self.config.clone()
    }
}
