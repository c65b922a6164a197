//! Level record and status types.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::NOT_AVAILABLE;

/// Visibility of a level as classified from its Atlas page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LevelStatus {
    Visible,
    Hidden,
    Unpublished,
}

impl LevelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelStatus::Visible => "VISIBLE",
            LevelStatus::Hidden => "HIDDEN",
            LevelStatus::Unpublished => "UNPUBLISHED",
        }
    }
}

impl fmt::Display for LevelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One level's consolidated output row.
///
/// Rating and tag fields are `None` when the run had no way to recover
/// them (hidden levels viewed anonymously); they serialize as `"N/A"`.
#[derive(Debug, Clone, Serialize)]
pub struct LevelRecord {
    #[serde(rename = "LEVEL ID")]
    pub id: u32,

    #[serde(rename = "LEVEL NAME")]
    pub name: String,

    #[serde(rename = "AUTHOR")]
    pub author: String,

    #[serde(rename = "DATE")]
    pub date: String,

    #[serde(rename = "LEVEL STATUS")]
    pub status: LevelStatus,

    #[serde(rename = "HEART SCORE", serialize_with = "na_or_int")]
    pub likes_score: Option<i64>,

    #[serde(rename = "HEART TOTAL", serialize_with = "na_or_int")]
    pub likes_count: Option<i64>,

    #[serde(rename = "HEART TOTAL SCORE", serialize_with = "na_or_int")]
    pub likes_total_score: Option<i64>,

    #[serde(rename = "DIFFICULTY SCORE", serialize_with = "na_or_int")]
    pub difficulty_score: Option<i64>,

    #[serde(rename = "DIFFICULTY TOTAL", serialize_with = "na_or_int")]
    pub difficulty_count: Option<i64>,

    #[serde(rename = "DIFFICULTY TOTAL SCORE", serialize_with = "na_or_int")]
    pub difficulty_total_score: Option<i64>,

    #[serde(rename = "TAGS", serialize_with = "na_or_list")]
    pub tags: Option<Vec<String>>,
}

impl LevelRecord {
    /// Project the record into the fixed CSV column order.
    pub fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.author.clone(),
            self.date.clone(),
            self.status.as_str().to_string(),
            na_or_string(self.likes_score),
            na_or_string(self.likes_count),
            na_or_string(self.likes_total_score),
            na_or_string(self.difficulty_score),
            na_or_string(self.difficulty_count),
            na_or_string(self.difficulty_total_score),
            match &self.tags {
                Some(tags) => format!("{tags:?}"),
                None => NOT_AVAILABLE.to_string(),
            },
        ]
    }
}

fn na_or_string(value: Option<i64>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn na_or_int<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(n) => serializer.serialize_i64(*n),
        None => serializer.serialize_str(NOT_AVAILABLE),
    }
}

fn na_or_list<S: Serializer>(value: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(tags) => tags.serialize(serializer),
        None => serializer.serialize_str(NOT_AVAILABLE),
    }
}
