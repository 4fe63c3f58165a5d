use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// File metadata as returned by `Files/add` with `odata=nometadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SharepointFile {
    pub name: String,
    pub server_relative_url: String,
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_length")]
    pub length: u64,
    pub e_tag: Option<String>,
    pub unique_id: Option<String>,
    pub major_version: u32,
    pub minor_version: u32,
    pub check_out_type: u32,
    pub exists: bool,
    pub time_created: Option<DateTime<Utc>>,
    pub time_last_modified: Option<DateTime<Utc>>,
}

// Edm.Int64 values are serialized as JSON strings by SharePoint.
fn deserialize_length<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Length {
        Number(u64),
        Text(String),
        Null,
    }

    match Length::deserialize(deserializer)? {
        Length::Number(n) => Ok(n),
        Length::Text(s) if s.trim().is_empty() => Ok(0),
        Length::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Length::Null => Ok(0),
    }
}
