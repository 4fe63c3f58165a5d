use std::str::FromStr;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an item sitting in the site's recycle bin. Returned when a
/// resource is recycled and required to restore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecycleBinItemId(Uuid);

impl RecycleBinItemId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// The all-zero identifier SharePoint reports when nothing was recycled.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl FromStr for RecycleBinItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_hyphenated() {
        let actual: RecycleBinItemId = "5a2f1c9e-3b1d-4c2a-9f11-2b8e9d0c7a41".parse().unwrap();
        assert_eq!(actual.to_string(), "5a2f1c9e-3b1d-4c2a-9f11-2b8e9d0c7a41");
    }

    #[test]
    fn test_parse_braced() {
        let actual: RecycleBinItemId = "{5A2F1C9E-3B1D-4C2A-9F11-2B8E9D0C7A41}".parse().unwrap();
        assert_eq!(actual.to_string(), "5a2f1c9e-3b1d-4c2a-9f11-2b8e9d0c7a41");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let actual = "not-a-guid".parse::<RecycleBinItemId>();
        assert!(actual.is_err());
    }

    #[test]
    fn test_nil() {
        let fixture = RecycleBinItemId::nil();
        assert!(fixture.is_nil());
        assert_eq!(fixture.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
