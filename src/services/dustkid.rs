//! Dustkid level listing import.
//!
//! Dustkid tracks every level it has seen, including ones never published
//! to Atlas, and serves the listing in cursor-addressed pages. The full
//! listing is pulled once per run and re-keyed by Atlas id so the
//! extractor can look levels up while walking the id range.

use std::collections::HashMap;

use reqwest::blocking::Client;

use crate::config::DUSTKID_PAGE_SIZE;
use crate::error::Result;
use crate::models::{CompanionEntry, DustkidLevel, LevelsPage};
use crate::utils::http::fetch_json;

/// Fetch the complete Dustkid listing and re-key it by Atlas id.
pub fn import_levels(client: &Client, levels_url: &str) -> Result<HashMap<u32, CompanionEntry>> {
    let mut merged: HashMap<String, DustkidLevel> = HashMap::new();
    let mut cursor: Option<String> = None;

    loop {
        let url = page_url(levels_url, cursor.as_deref());
        log::debug!("fetching dustkid page: {url}");

        let page: LevelsPage = fetch_json(client, &url)?;
        merged.extend(page.levels);

        match cursor_token(&page.next) {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    log::info!("dustkid listing complete: {} levels", merged.len());
    Ok(reindex_by_atlas_id(merged))
}

/// Listing page URL for a cursor; the first page uses an empty cursor.
fn page_url(levels_url: &str, cursor: Option<&str>) -> String {
    format!(
        "{levels_url}?count={DUSTKID_PAGE_SIZE}&prev={}",
        cursor.unwrap_or_default()
    )
}

/// Render the `next` field into a cursor token; null terminates.
fn cursor_token(next: &serde_json::Value) -> Option<String> {
    match next {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Re-key the merged listing by Atlas id.
///
/// Entries with `atlas_id == 0` have no Atlas record and are dropped. The
/// source data is assumed consistent, so a duplicated Atlas id keeps the
/// last entry seen.
fn reindex_by_atlas_id(merged: HashMap<String, DustkidLevel>) -> HashMap<u32, CompanionEntry> {
    let mut by_atlas_id = HashMap::with_capacity(merged.len());

    for level in merged.into_values() {
        let atlas_id = match u32::try_from(level.atlas_id) {
            Ok(0) | Err(_) => continue,
            Ok(id) => id,
        };
        by_atlas_id.insert(atlas_id, CompanionEntry::from(level));
    }

    by_atlas_id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(atlas_id: i64, name: &str, author: &str) -> DustkidLevel {
        DustkidLevel {
            atlas_id,
            name: name.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn test_reindex_drops_zero_cross_references() {
        let merged = HashMap::from([
            ("10".to_string(), level(0, "noise", "someone")),
            ("11".to_string(), level(250, "Kept Back", "bob")),
        ]);

        let by_atlas_id = reindex_by_atlas_id(merged);
        assert_eq!(by_atlas_id.len(), 1);
        assert_eq!(by_atlas_id[&250].name, "Kept Back");
        assert!(!by_atlas_id.values().any(|e| e.name == "noise"));
    }

    #[test]
    fn test_reindex_keeps_unpublished_authors_empty() {
        let merged = HashMap::from([("12".to_string(), level(300, "Draft", ""))]);

        let by_atlas_id = reindex_by_atlas_id(merged);
        assert_eq!(by_atlas_id[&300].author, "");
    }

    #[test]
    fn test_reindex_skips_negative_ids() {
        let merged = HashMap::from([("13".to_string(), level(-5, "broken", "x"))]);
        assert!(reindex_by_atlas_id(merged).is_empty());
    }

    #[test]
    fn test_cursor_token_terminates_on_null() {
        assert_eq!(cursor_token(&serde_json::Value::Null), None);
        assert_eq!(
            cursor_token(&serde_json::json!("abc")),
            Some("abc".to_string())
        );
        assert_eq!(cursor_token(&serde_json::json!(4096)), Some("4096".to_string()));
    }

    #[test]
    fn test_first_page_url_has_empty_cursor() {
        let url = page_url("https://dustkid.com/levels.php", None);
        assert_eq!(url, "https://dustkid.com/levels.php?count=1024&prev=");

        let url = page_url("https://dustkid.com/levels.php", Some("xyz"));
        assert!(url.ends_with("&prev=xyz"));
    }
}
