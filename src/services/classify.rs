//! Level page classification.
//!
//! Atlas renders different placeholder metadata depending on whether a
//! level is hidden or does not exist, and the placeholder shown for the
//! same underlying state changes with session privilege. The two rule
//! sets below must stay split by mode or hidden and unpublished levels
//! get conflated.

use scraper::Html;

use crate::config::{NAMELESS_MAP_TITLE, SITE_DEFAULT_TITLE};
use crate::error::{AppError, Result};
use crate::models::LevelStatus;
use crate::selectors;
use crate::services::session::SessionContext;

/// Classify a fetched level page as visible, hidden, or unpublished.
pub fn classify(document: &Html, session: &SessionContext) -> Result<LevelStatus> {
    let og_title = selectors::og_title();
    let content = document
        .select(&og_title)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .ok_or_else(|| AppError::page_shape("og:title", "metadata element missing"))?;

    let status = if session.is_admin {
        // Admin sessions see hidden levels' real pages; only the delete
        // control distinguishes them from visible ones.
        if content == SITE_DEFAULT_TITLE {
            LevelStatus::Unpublished
        } else {
            let delete_control = selectors::delete_control();
            if document.select(&delete_control).next().is_some() {
                LevelStatus::Hidden
            } else {
                LevelStatus::Visible
            }
        }
    } else if content == NAMELESS_MAP_TITLE {
        LevelStatus::Hidden
    } else if content == SITE_DEFAULT_TITLE {
        LevelStatus::Unpublished
    } else {
        LevelStatus::Visible
    };

    Ok(status)
}
