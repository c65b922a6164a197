//! Dustkid listing wire shapes and the cross-referenced entry kept per level.

use std::collections::HashMap;

use serde::Deserialize;

/// One page of the Dustkid level listing.
#[derive(Debug, Deserialize)]
pub struct LevelsPage {
    /// Continuation cursor; JSON null terminates the listing. Dustkid has
    /// served both string and numeric cursors, so keep the raw value.
    #[serde(default)]
    pub next: serde_json::Value,

    /// Levels on this page, keyed by Dustkid's own id
    #[serde(default)]
    pub levels: HashMap<String, DustkidLevel>,
}

/// A level as Dustkid reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct DustkidLevel {
    /// Atlas id this level cross-references; 0 means no Atlas record
    #[serde(default)]
    pub atlas_id: i64,

    #[serde(default)]
    pub name: String,

    /// Empty string when the level was never published to Atlas
    #[serde(default)]
    pub author: String,
}

/// Cross-reference entry after re-keying by Atlas id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionEntry {
    pub name: String,
    pub author: String,
}

impl From<DustkidLevel> for CompanionEntry {
    fn from(level: DustkidLevel) -> Self {
        Self {
            name: level.name,
            author: level.author,
        }
    }
}
