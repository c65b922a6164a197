//! Normalization of Atlas's human-readable creation dates.
//!
//! Atlas renders a level's creation date in one of four forms depending on
//! its age: "created N days ago", "created 1 day ago", "created Mon D"
//! (current year), or "created Mon D, YYYY" (earlier years).

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{AppError, Result};

/// Convert a raw Atlas date string into `YYYY-MM-DD`.
///
/// `today` is the calendar date the page was fetched on; the short "Mon D"
/// form carries no year, so it is resolved against `today`'s year. Levels
/// created the same day the scrape runs can therefore be mis-dated.
pub fn normalize(raw: &str, today: NaiveDate) -> Result<String> {
    let text = raw.trim();

    if text.contains("day ago") || text.contains("days ago") {
        let count = text
            .replace("created", "")
            .replace("days ago", "")
            .replace("day ago", "");
        let days: i64 = count
            .trim()
            .parse()
            .map_err(|_| AppError::date(raw.to_string()))?;
        return Ok((today - Duration::days(days)).format("%Y-%m-%d").to_string());
    }

    let text = text.replace("created", "");
    let text = text.trim();

    let parsed = if text.contains(',') {
        let cleaned = text.replace(',', "");
        NaiveDate::parse_from_str(cleaned.trim(), "%b %d %Y")
    } else {
        NaiveDate::parse_from_str(&format!("{} {}", text, today.year()), "%b %d %Y")
    };

    parsed
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| AppError::date(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_days_ago() {
        let result = normalize("created 3 days ago", fixed_today()).unwrap();
        assert_eq!(result, "2025-06-07");
    }

    #[test]
    fn test_single_day_ago() {
        let result = normalize("created 1 day ago", fixed_today()).unwrap();
        assert_eq!(result, "2025-06-09");
    }

    #[test]
    fn test_current_year_short_form() {
        let result = normalize("created Apr 3", fixed_today()).unwrap();
        assert_eq!(result, "2025-04-03");
    }

    #[test]
    fn test_prior_year_form() {
        let result = normalize("created Mar 1, 2023", fixed_today()).unwrap();
        assert_eq!(result, "2023-03-01");
    }

    #[test]
    fn test_unrecognized_form_is_an_error() {
        let result = normalize("created moments ago", fixed_today());
        assert!(matches!(result, Err(AppError::Date(_))));
    }
}
