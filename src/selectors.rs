//! CSS selectors for the Atlas page elements the scraper reads.
//!
//! All selectors here are static and known-good, so parse failures are
//! programming errors.

use scraper::Selector;

/// Moderator item in the admin nav, only rendered for privileged sessions
pub fn admin_nav_item() -> Selector {
    Selector::parse("li.qa-nav-main-item.qa-nav-main-admin").unwrap()
}

/// og:title metadata carrying the placeholder text used for classification
pub fn og_title() -> Selector {
    Selector::parse(r#"meta[property="og:title"]"#).unwrap()
}

/// Moderator-only "delete this submission" control on hidden levels
pub fn delete_control() -> Selector {
    Selector::parse(r#"div.qa-q-view-buttons input[name="q_dodelete"]"#).unwrap()
}

/// Document title element
pub fn page_title() -> Selector {
    Selector::parse("title").unwrap()
}

/// Info block holding author, dates, and the rating widgets
pub fn map_info_stats() -> Selector {
    Selector::parse("div.map-info-stats").unwrap()
}

/// Left-floated sub-blocks of the info block; the second one holds the author
pub fn pull_left() -> Selector {
    Selector::parse("div.pull-left").unwrap()
}

/// Rating widgets carry an id attribute; likes first, then difficulty
pub fn rating_widget() -> Selector {
    Selector::parse("span[id]").unwrap()
}

/// Tag container below the level description
pub fn tag_area() -> Selector {
    Selector::parse("div.tag-area").unwrap()
}

/// Anchor elements, used inside the author block and the tag area
pub fn anchor() -> Selector {
    Selector::parse("a").unwrap()
}

/// Span elements, used inside the author block for the creation date
pub fn span() -> Selector {
    Selector::parse("span").unwrap()
}
