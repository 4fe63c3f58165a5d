use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Folder metadata as returned by `_api/web/folders` with
/// `odata=nometadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SharepointFolder {
    pub name: String,
    pub server_relative_url: String,
    pub item_count: u64,
    pub exists: bool,
    pub unique_id: Option<String>,
    pub welcome_page: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    pub time_last_modified: Option<DateTime<Utc>>,
}
