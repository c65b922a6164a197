//! Run orchestration: session gate, Dustkid import, per-level loop.

use std::collections::{BTreeMap, HashMap};

use chrono::{Local, NaiveDate};
use reqwest::blocking::Client;
use scraper::Html;

use crate::config;
use crate::error::Result;
use crate::models::{CompanionEntry, Config, LevelRecord, LevelStatus};
use crate::services::session::SessionContext;
use crate::services::{classify, dustkid, extract};
use crate::utils::http::fetch_page;

/// Final dataset: one record per processed level, ordered by id.
pub type Dataset = BTreeMap<u32, LevelRecord>;

/// Scrape the configured id range into a dataset.
///
/// Strictly sequential: each level is fully fetched and processed before
/// the next fetch starts. Any error aborts the run with nothing written.
pub fn run(config: &Config, client: &Client) -> Result<Dataset> {
    let session = SessionContext::establish(client, config.session_credential())?;
    log::info!(
        "session mode: {}",
        if session.is_admin { "admin" } else { "anonymous" }
    );

    let companion = dustkid::import_levels(client, config::DUSTKID_LEVELS_URL)?;
    log::info!(
        "{} dustkid levels cross-referenced by atlas id",
        companion.len()
    );

    let today = Local::now().date_naive();
    let mut dataset = Dataset::new();

    for id in config.range.start..=config.range.end {
        println!("level {id}");

        let document = fetch_page(client, &config::level_url(id), session.credential())?;
        if let Some(record) = process_level(id, &document, &session, &companion, today)? {
            dataset.insert(id, record);
        }
    }

    Ok(dataset)
}

/// Classify one fetched page and build its record.
///
/// Returns `None` for unpublished ids; they are classified but never
/// materialized. Each call builds its record from scratch.
pub fn process_level(
    id: u32,
    document: &Html,
    session: &SessionContext,
    companion: &HashMap<u32, CompanionEntry>,
    today: NaiveDate,
) -> Result<Option<LevelRecord>> {
    let status = classify::classify(document, session)?;
    if status == LevelStatus::Unpublished {
        return Ok(None);
    }

    let details = if session.is_admin || status == LevelStatus::Visible {
        extract::extract_details(document, today)?
    } else {
        // Anonymous view of a hidden level is all placeholder content;
        // dustkid is the only remaining source for title and author.
        extract::fallback_details(id, companion)
    };

    Ok(Some(details.into_record(id, status)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn visible_page() -> Html {
        Html::parse_document(VISIBLE_PAGE)
    }

    const VISIBLE_PAGE: &str = r#"<html>
<head>
<title>Kept Back - a Dustforce map</title>
<meta property="og:title" content="Kept Back - a Dustforce map">
</head>
<body>
<div class="map-info-stats">
  <div class="pull-left"><span>1204 plays</span></div>
  <div class="pull-left">
    <a href="/profile/123">bobisdead123</a>
    <span>uploaded by</span>
    <span>created Mar 1, 2023</span>
  </div>
  <span id="rating-likes" class="rating likes widget score-7 small grey votes-12 total-84"></span>
  <span id="rating-difficulty" class="rating difficulty widget score-3 small grey votes-11 total-33"></span>
</div>
<div class="tag-area">
  <a href="/tag/platforming">platforming</a>
  <a href="/tag/hard">hard</a>
</div>
</body>
</html>"#;

    fn unpublished_page() -> Html {
        Html::parse_document(
            r#"<html><head>
<meta property="og:title" content="Atlas - the Dustforce map sharing server">
</head><body></body></html>"#,
        )
    }

    fn hidden_page_anonymous() -> Html {
        Html::parse_document(
            r#"<html><head>
<meta property="og:title" content=" - a Dustforce map">
</head><body></body></html>"#,
        )
    }

    #[test]
    fn test_visible_level_produces_a_full_record() {
        let companion = HashMap::new();
        let record = process_level(
            100,
            &visible_page(),
            &SessionContext::anonymous(),
            &companion,
            fixed_today(),
        )
        .unwrap()
        .expect("visible level must produce a record");

        assert_eq!(record.id, 100);
        assert_eq!(record.name, "Kept Back");
        assert_eq!(record.author, "bobisdead123");
        assert_eq!(record.date, "2023-03-01");
        assert_eq!(record.status, LevelStatus::Visible);
        assert_eq!(record.likes_score, Some(7));
        assert_eq!(record.likes_count, Some(12));
        assert_eq!(record.likes_total_score, Some(84));
        assert_eq!(record.difficulty_score, Some(3));
        assert_eq!(record.difficulty_count, Some(11));
        assert_eq!(record.difficulty_total_score, Some(33));
        assert_eq!(
            record.tags,
            Some(vec!["platforming".to_string(), "hard".to_string()])
        );
    }

    #[test]
    fn test_unpublished_level_is_skipped() {
        let companion = HashMap::new();
        let record = process_level(
            101,
            &unpublished_page(),
            &SessionContext::anonymous(),
            &companion,
            fixed_today(),
        )
        .unwrap();

        assert!(record.is_none());
    }

    #[test]
    fn test_hidden_level_falls_back_to_companion_data() {
        let companion = HashMap::from([(
            102,
            CompanionEntry {
                name: "Ghost Level".to_string(),
                author: String::new(),
            },
        )]);

        let record = process_level(
            102,
            &hidden_page_anonymous(),
            &SessionContext::anonymous(),
            &companion,
            fixed_today(),
        )
        .unwrap()
        .expect("hidden level must still produce a record");

        assert_eq!(record.status, LevelStatus::Hidden);
        assert_eq!(record.name, "Ghost Level");
        assert_eq!(record.author, "N/A");
        assert_eq!(record.likes_score, None);
        assert_eq!(record.tags, None);
    }

    #[test]
    fn test_admin_extracts_hidden_levels_directly() {
        // Same page an admin would see for a hidden level: real markup
        // plus the moderator delete control.
        let html = VISIBLE_PAGE.replace(
            r#"<div class="map-info-stats">"#,
            r#"<div class="qa-q-view-buttons"><input name="q_dodelete"></div><div class="map-info-stats">"#,
        );
        let document = Html::parse_document(&html);
        let companion = HashMap::new();

        let record = process_level(
            103,
            &document,
            &SessionContext::admin_for_tests(),
            &companion,
            fixed_today(),
        )
        .unwrap()
        .expect("admin-visible hidden level must produce a record");

        assert_eq!(record.status, LevelStatus::Hidden);
        assert_eq!(record.name, "Kept Back");
        assert_eq!(record.likes_score, Some(7));
    }
}
