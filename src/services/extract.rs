//! Field extraction from a classified level page.
//!
//! Atlas embeds the rating numbers positionally in the class attribute of
//! each rating widget, so extraction is offset arithmetic over the class
//! token list rather than reading element text.

use std::collections::HashMap;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::config::NOT_AVAILABLE;
use crate::error::{AppError, Result};
use crate::models::{CompanionEntry, LevelRecord, LevelStatus};
use crate::selectors;
use crate::utils::date;

/// Offsets of the encoded integers inside a rating widget's class list.
struct RatingOffsets {
    score: usize,
    votes: usize,
    total: usize,
}

const RATING_OFFSETS: RatingOffsets = RatingOffsets {
    score: 3,
    votes: 6,
    total: 7,
};

/// Current score, vote count, and accumulated total of one rating widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingTriple {
    pub score: i64,
    pub votes: i64,
    pub total: i64,
}

/// Everything extracted for one level before it becomes a record.
#[derive(Debug, Clone)]
pub struct LevelDetails {
    pub title: String,
    pub author: String,
    pub date: String,
    pub likes: Option<RatingTriple>,
    pub difficulty: Option<RatingTriple>,
    pub tags: Option<Vec<String>>,
}

impl LevelDetails {
    /// Finalize the extraction into an output record.
    pub fn into_record(self, id: u32, status: LevelStatus) -> LevelRecord {
        let (likes_score, likes_count, likes_total_score) = split_rating(self.likes);
        let (difficulty_score, difficulty_count, difficulty_total_score) =
            split_rating(self.difficulty);

        LevelRecord {
            id,
            name: self.title,
            author: self.author,
            date: self.date,
            status,
            likes_score,
            likes_count,
            likes_total_score,
            difficulty_score,
            difficulty_count,
            difficulty_total_score,
            tags: self.tags,
        }
    }
}

fn split_rating(rating: Option<RatingTriple>) -> (Option<i64>, Option<i64>, Option<i64>) {
    match rating {
        Some(r) => (Some(r.score), Some(r.votes), Some(r.total)),
        None => (None, None, None),
    }
}

/// Extract every field directly from the page.
///
/// Valid for visible levels in any mode and for hidden levels under an
/// admin session; those pages carry the full markup.
pub fn extract_details(document: &Html, today: NaiveDate) -> Result<LevelDetails> {
    let page_title = selectors::page_title();
    let title_text: String = document
        .select(&page_title)
        .next()
        .ok_or_else(|| AppError::page_shape("title", "title element missing"))?
        .text()
        .collect();
    let title = title_text
        .split_once(" - ")
        .map(|(head, _)| head.trim().to_string())
        .ok_or_else(|| {
            AppError::page_shape("title", format!("no delimiter in {title_text:?}"))
        })?;

    let info_selector = selectors::map_info_stats();
    let info = document
        .select(&info_selector)
        .next()
        .ok_or_else(|| AppError::page_shape("map-info-stats", "info block missing"))?;

    let pull_left = selectors::pull_left();
    let blocks: Vec<_> = info.select(&pull_left).collect();
    let author_block = *blocks
        .get(1)
        .ok_or_else(|| AppError::page_shape("pull-left", "author block missing"))?;

    let anchor = selectors::anchor();
    let author_text: String = author_block
        .select(&anchor)
        .next()
        .ok_or_else(|| AppError::page_shape("pull-left", "author link missing"))?
        .text()
        .collect();
    // Empty author link means the account was deleted.
    let author = if author_text.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        author_text
    };

    let span = selectors::span();
    let spans: Vec<_> = author_block.select(&span).collect();
    let raw_date: String = spans
        .get(1)
        .ok_or_else(|| AppError::page_shape("pull-left", "creation date span missing"))?
        .text()
        .collect();
    let date = date::normalize(&raw_date, today)?;

    let rating_widget = selectors::rating_widget();
    let widgets: Vec<_> = info.select(&rating_widget).collect();
    let likes = parse_rating(widgets.first().copied(), "likes widget")?;
    let difficulty = parse_rating(widgets.get(1).copied(), "difficulty widget")?;

    let tag_area_selector = selectors::tag_area();
    let tag_area = document
        .select(&tag_area_selector)
        .next()
        .ok_or_else(|| AppError::page_shape("tag-area", "tag container missing"))?;
    let tags: Vec<String> = tag_area
        .select(&anchor)
        .map(|tag| tag.text().collect())
        .collect();

    Ok(LevelDetails {
        title,
        author,
        date,
        likes: Some(likes),
        difficulty: Some(difficulty),
        tags: Some(tags),
    })
}

/// Build details for a level whose page shows only placeholder content.
///
/// Only the Dustkid listing still knows the title and author; ratings and
/// tags stay at the sentinel. A level missing from the listing is a gap
/// between the two services and is reported but not fatal.
pub fn fallback_details(id: u32, companion: &HashMap<u32, CompanionEntry>) -> LevelDetails {
    let (title, author) = match companion.get(&id) {
        Some(entry) => {
            let author = if entry.author.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                entry.author.clone()
            };
            (entry.name.clone(), author)
        }
        None => {
            log::warn!("level {id}: no dustkid cross-reference, emitting sentinels");
            (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
        }
    };

    LevelDetails {
        title,
        author,
        date: NOT_AVAILABLE.to_string(),
        likes: None,
        difficulty: None,
        tags: None,
    }
}

fn parse_rating(widget: Option<ElementRef<'_>>, context: &str) -> Result<RatingTriple> {
    let widget = widget.ok_or_else(|| AppError::page_shape(context, "widget missing"))?;
    let tokens: Vec<&str> = widget
        .value()
        .attr("class")
        .map(|class| class.split_whitespace().collect())
        .unwrap_or_default();
    rating_from_tokens(&tokens, context)
}

/// Decode one rating widget's class-token list at the fixed offsets.
fn rating_from_tokens(tokens: &[&str], context: &str) -> Result<RatingTriple> {
    Ok(RatingTriple {
        score: token_int(tokens, RATING_OFFSETS.score, context)?,
        votes: token_int(tokens, RATING_OFFSETS.votes, context)?,
        total: token_int(tokens, RATING_OFFSETS.total, context)?,
    })
}

/// First integer substring of the class token at `index`.
fn token_int(tokens: &[&str], index: usize, context: &str) -> Result<i64> {
    let token = tokens.get(index).ok_or_else(|| {
        AppError::page_shape(context, format!("class token {index} missing"))
    })?;
    let digits = Regex::new(r"\d+").unwrap();
    let matched = digits.find(token).ok_or_else(|| {
        AppError::page_shape(context, format!("no digits in class token {token:?}"))
    })?;
    matched
        .as_str()
        .parse()
        .map_err(|e| AppError::page_shape(context, format!("bad integer in {token:?}: {e}")))
}
