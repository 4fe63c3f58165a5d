use bytes::Bytes;
use reqwest::Response;
use reqwest::header::HeaderMap;
use sprest_domain::SharepointConfig;
use url::Url;

pub trait EnvironmentInfra: Send + Sync {
    fn get_config(&self) -> SharepointConfig;
}

/// Raw HTTP transport towards the SharePoint site. Implementations are
/// responsible for authentication and transport-level settings; callers
/// supply the per-request headers.
#[async_trait::async_trait]
pub trait HttpInfra: Send + Sync + 'static {
    async fn http_post(&self, url: &Url, headers: HeaderMap, body: Bytes)
    -> anyhow::Result<Response>;
}
