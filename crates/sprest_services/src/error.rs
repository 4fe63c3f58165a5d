use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SharePoint request failed with {status}: {message}")]
    Sharepoint {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    #[error("{0} must not be empty")]
    EmptyArgument(&'static str),

    #[error("Recycle response did not contain an item identifier")]
    MissingRecycleId,

    #[error("Invalid recycle bin identifier '{value}'")]
    InvalidRecycleId {
        value: String,
        #[source]
        source: uuid::Error,
    },
}

impl Error {
    /// HTTP status reported by SharePoint, if the failure came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Sharepoint { status, .. } => Some(*status),
            _ => None,
        }
    }
}
