use anyhow::Context;
use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use sprest_app::HttpInfra;
use sprest_domain::SharepointConfig;
use tracing::debug;
use url::Url;

/// reqwest-backed transport. The bearer token, user agent and timeout are
/// baked into the client once; per-request headers come from the caller.
/// Redirects are returned as-is, never followed.
pub struct SprestHttpInfra {
    client: Client,
}

impl SprestHttpInfra {
    pub fn new(config: &SharepointConfig) -> anyhow::Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .context("Access token contains characters not allowed in a header")?;
        auth.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(default_headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .redirect(Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpInfra for SprestHttpInfra {
    async fn http_post(
        &self,
        url: &Url,
        headers: HeaderMap,
        body: Bytes,
    ) -> anyhow::Result<Response> {
        debug!(url = %url, body_len = body.len(), "POST request");
        let response = self
            .client
            .post(url.clone())
            .headers(headers)
            .body(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {url}"))?;
        debug!(url = %url, status = %response.status(), "POST response");
        Ok(response)
    }
}
