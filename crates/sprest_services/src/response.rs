use anyhow::Context;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use sprest_domain::RecycleBinItemId;
use tracing::{debug, warn};

use crate::Error;

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "odata.error", alias = "error")]
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<ErrorMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    Localized { value: String },
    Plain(String),
}

impl ErrorMessage {
    fn into_text(self) -> String {
        match self {
            ErrorMessage::Localized { value } => value,
            ErrorMessage::Plain(value) => value,
        }
    }
}

/// Passes successful responses through; turns anything else into
/// [`Error::Sharepoint`] using the error payload SharePoint sends back.
pub(crate) async fn validate(response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await.unwrap_or_else(|error| {
        debug!(url = %url, error = %error, "Failed to read error response body");
        String::new()
    });
    let error = parse_error(status, &body);
    warn!(url = %url, status = %status, error = %error, "SharePoint rejected request");
    Err(error.into())
}

pub(crate) fn parse_error(status: StatusCode, body: &str) -> Error {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error);

    let (code, message) = match parsed {
        Some(ErrorBody { code, message }) => (code, message.map(ErrorMessage::into_text)),
        None => (None, None),
    };

    let message = message
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    Error::Sharepoint { status, code, message }
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> anyhow::Result<T> {
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;
    serde_json::from_str(&body)
        .with_context(|| format!("Failed to decode {}", std::any::type_name::<T>()))
}

#[derive(Deserialize)]
struct ValueResponse {
    value: Option<serde_json::Value>,
}

/// Reads the `{"value": "<guid>"}` payload of a recycle call. An empty string
/// means SharePoint had nothing to recycle.
pub(crate) async fn decode_recycle_id(response: Response) -> anyhow::Result<RecycleBinItemId> {
    let payload: ValueResponse = decode(response).await?;
    match payload.value {
        Some(serde_json::Value::String(value)) if value.is_empty() => Ok(RecycleBinItemId::nil()),
        Some(serde_json::Value::String(value)) => value
            .parse()
            .map_err(|source| Error::InvalidRecycleId { value, source }.into()),
        _ => Err(Error::MissingRecycleId.into()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn response(status: u16, body: &str) -> Response {
        http::Response::builder()
            .status(status)
            .body(body.to_string())
            .unwrap()
            .into()
    }

    fn message(error: Error) -> (Option<String>, String) {
        match error {
            Error::Sharepoint { code, message, .. } => (code, message),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_nometadata_error() {
        let body = r#"{"odata.error":{"code":"-2147024894, System.IO.FileNotFoundException","message":{"lang":"en-US","value":"File Not Found."}}}"#;

        let actual = message(parse_error(StatusCode::NOT_FOUND, body));

        let expected = (
            Some("-2147024894, System.IO.FileNotFoundException".to_string()),
            "File Not Found.".to_string(),
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_verbose_error() {
        let body = r#"{"error":{"code":"-2130575257, Microsoft.SharePoint.SPException","message":{"lang":"en-US","value":"A file or folder with the name already exists."}}}"#;

        let (code, actual) = message(parse_error(StatusCode::BAD_REQUEST, body));

        assert_eq!(code.as_deref(), Some("-2130575257, Microsoft.SharePoint.SPException"));
        assert_eq!(actual, "A file or folder with the name already exists.");
    }

    #[test]
    fn test_parse_plain_message_error() {
        let body = r#"{"error":{"code":"InvalidAuthenticationToken","message":"Access token has expired."}}"#;

        let (_, actual) = message(parse_error(StatusCode::UNAUTHORIZED, body));

        assert_eq!(actual, "Access token has expired.");
    }

    #[test]
    fn test_parse_non_json_body_falls_back_to_text() {
        let (code, actual) = message(parse_error(StatusCode::FORBIDDEN, "  Access denied  "));

        assert_eq!(code, None);
        assert_eq!(actual, "Access denied");
    }

    #[test]
    fn test_parse_empty_body_falls_back_to_reason() {
        let (_, actual) = message(parse_error(StatusCode::SERVICE_UNAVAILABLE, ""));

        assert_eq!(actual, "Service Unavailable");
    }

    #[tokio::test]
    async fn test_validate_passes_success() {
        let actual = validate(response(204, "")).await;
        assert!(actual.is_ok());
    }

    #[tokio::test]
    async fn test_validate_rejects_failure() {
        let actual = validate(response(500, "boom")).await.unwrap_err();
        let error = actual.downcast_ref::<Error>().unwrap();
        assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            error.to_string(),
            "SharePoint request failed with 500 Internal Server Error: boom"
        );
    }

    #[tokio::test]
    async fn test_decode_recycle_id() {
        let actual = decode_recycle_id(response(
            200,
            r#"{"value":"0f3c52d4-6f34-4f3b-b4c6-3d0c2c8f9a11"}"#,
        ))
        .await
        .unwrap();
        assert_eq!(actual.to_string(), "0f3c52d4-6f34-4f3b-b4c6-3d0c2c8f9a11");
    }

    #[tokio::test]
    async fn test_decode_recycle_id_empty_is_nil() {
        let actual = decode_recycle_id(response(200, r#"{"value":""}"#)).await.unwrap();
        assert!(actual.is_nil());
    }

    #[tokio::test]
    async fn test_decode_recycle_id_missing_value() {
        let actual = decode_recycle_id(response(200, r#"{}"#)).await.unwrap_err();
        assert!(matches!(
            actual.downcast_ref::<Error>(),
            Some(Error::MissingRecycleId)
        ));
    }

    #[tokio::test]
    async fn test_decode_recycle_id_malformed() {
        let actual = decode_recycle_id(response(200, r#"{"value":"nope"}"#))
            .await
            .unwrap_err();
        assert!(matches!(
            actual.downcast_ref::<Error>(),
            Some(Error::InvalidRecycleId { .. })
        ));
    }

    #[tokio::test]
    async fn test_decode_reports_type_on_bad_json() {
        let actual = decode::<sprest_domain::SharepointFolder>(response(200, "<html/>"))
            .await
            .unwrap_err();
        assert!(actual.to_string().starts_with("Failed to decode"));
    }
}
