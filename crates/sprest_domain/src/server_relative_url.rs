use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// A SharePoint path relative to the site's web root, e.g.
/// `/sites/team/Shared Documents/Reports`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerRelativeUrl(String);

impl ServerRelativeUrl {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends `segment` verbatim. A slash shared by both sides of the seam
    /// is kept only once.
    pub fn join(&self, segment: &str) -> Self {
        match (self.0.ends_with('/'), segment.strip_prefix('/')) {
            (true, Some(rest)) => Self(format!("{}{}", self.0, rest)),
            _ => Self(format!("{}{}", self.0, segment)),
        }
    }

    /// Appends `name` as a child entry: `{self}/{name}`.
    pub fn child(&self, name: &str) -> Self {
        self.join(&format!("/{name}"))
    }

    /// Renders the path for use inside an OData string literal (`'...'`).
    pub fn odata_literal(&self) -> String {
        odata_escape(&self.0)
    }
}

impl From<&str> for ServerRelativeUrl {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Escapes a value for embedding between single quotes in an OData URL
/// segment. Quotes are doubled; characters that would otherwise terminate the
/// URL path are percent-encoded.
pub fn odata_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\'' => escaped.push_str("''"),
            '%' => escaped.push_str("%25"),
            '#' => escaped.push_str("%23"),
            '?' => escaped.push_str("%3F"),
            other => escaped.push(other),
        }
    }
    escaped
}
