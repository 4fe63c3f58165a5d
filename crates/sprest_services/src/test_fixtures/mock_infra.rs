//! In-memory infrastructure for command service tests.
//!
//! Records every request it receives and answers with canned responses in
//! the order they were queued.

use std::collections::VecDeque;
use std::sync::Mutex;

use bytes::Bytes;
use reqwest::Response;
use reqwest::header::HeaderMap;
use sprest_app::{EnvironmentInfra, HttpInfra};
use sprest_domain::SharepointConfig;
use url::Url;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

enum Reply {
    Response { status: u16, body: String },
    TransportError(String),
}

pub struct MockSharepointInfra {
    config: SharepointConfig,
    requests: Mutex<Vec<RecordedRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl MockSharepointInfra {
    pub fn new() -> Self {
        let config = SharepointConfig::new(
            Url::parse("https://contoso.sharepoint.com/sites/team").unwrap(),
            "token",
        )
        .server_relative_url("/sites/team/Shared Documents");
        Self::with_config(config)
    }

    pub fn with_config(config: SharepointConfig) -> Self {
        Self {
            config,
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(VecDeque::new()),
        }
    }

    pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Response { status, body: body.into() });
        self
    }

    pub fn fail(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::TransportError(message.into()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Default for MockSharepointInfra {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentInfra for MockSharepointInfra {
    fn get_config(&self) -> SharepointConfig {
        self.config.clone()
    }
}

#[async_trait::async_trait]
impl HttpInfra for MockSharepointInfra {
    async fn http_post(
        &self,
        url: &Url,
        headers: HeaderMap,
        body: Bytes,
    ) -> anyhow::Result<Response> {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest { url: url.clone(), headers, body });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Response { status: 200, body: "{}".to_string() });

        match reply {
            Reply::Response { status, body } => Ok(http::Response::builder()
                .status(status)
                .body(body)
                .unwrap()
                .into()),
            Reply::TransportError(message) => Err(anyhow::anyhow!(message)),
        }
    }
}
