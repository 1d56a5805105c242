//! Newtype identifier for catalog records.
//!
//! Diamond ids appear in detail-page paths and in inquiry messages, so they
//! are kept as the exact strings the catalog data declares.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a diamond in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiamondId(String);

impl DiamondId {
    /// Create an id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DiamondId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DiamondId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DiamondId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for DiamondId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: DiamondId = "LJ-W-001".into();
        assert_eq!(id.as_str(), "LJ-W-001");
        assert_eq!(id.to_string(), "LJ-W-001");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = DiamondId::new("LJ-C-004");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"LJ-C-004\"");

        let back: DiamondId = serde_json::from_str("\"LJ-C-004\"").unwrap();
        assert_eq!(back, id);
    }
}
