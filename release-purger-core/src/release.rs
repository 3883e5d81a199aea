use serde::{Deserialize, Serialize};

/// A release as returned by `GET /repos/{owner}/{repo}/releases`
///
/// Only the fields the purger needs are decoded, everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    /// GitHub sends `null` for releases that were never named
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

impl Release {
    /// Name for display, empty for unnamed releases
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn is_draft(&self) -> bool {
        self.draft
    }
}
