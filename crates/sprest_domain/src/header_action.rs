use derive_more::Display;
use http::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, IF_MATCH};

pub const ACCEPT_NOMETADATA: &str = "application/json;odata=nometadata";

const X_HTTP_METHOD: HeaderName = HeaderName::from_static("x-http-method");

/// Header presets for the kinds of request the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HeaderAction {
    /// Tunnels a DELETE through POST and skips the ETag concurrency check.
    DeleteResource,
    /// Plain JSON without OData metadata envelopes.
    JsonNoMetadata,
}

impl HeaderAction {
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_NOMETADATA));
        if let HeaderAction::DeleteResource = self {
            headers.insert(X_HTTP_METHOD, HeaderValue::from_static("DELETE"));
            headers.insert(IF_MATCH, HeaderValue::from_static("*"));
        }
        headers
    }
}
