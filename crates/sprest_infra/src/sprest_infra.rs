use std::sync::Arc;

use bytes::Bytes;
use reqwest::Response;
use reqwest::header::HeaderMap;
use sprest_app::{EnvironmentInfra, HttpInfra};
use sprest_domain::SharepointConfig;
use url::Url;

use crate::env::SprestEnvironmentInfra;
use crate::http::SprestHttpInfra;

#[derive(Clone)]
pub struct SprestInfra {
    environment_service: Arc<SprestEnvironmentInfra>,
    http_service: Arc<SprestHttpInfra>,
}

impl SprestInfra {
    pub fn new(environment_service: SprestEnvironmentInfra) -> anyhow::Result<Self> {
        let config = environment_service.get_config();
        let http_service = Arc::new(SprestHttpInfra::new(&config)?);

        Ok(Self { environment_service: Arc::new(environment_service), http_service })
    }

    pub fn from_config(config: SharepointConfig) -> anyhow::Result<Self> {
        Self::new(SprestEnvironmentInfra::new(config))
    }
}

impl EnvironmentInfra for SprestInfra {
    fn get_config(&self) -> SharepointConfig {
        self.environment_service.get_config()
    }
}

#[async_trait::async_trait]
impl HttpInfra for SprestInfra {
    async fn http_post(
        &self,
        url: &Url,
        headers: HeaderMap,
        body: Bytes,
    ) -> anyhow::Result<Response> {
        self.http_service.http_post(url, headers, body).await
    }
}
