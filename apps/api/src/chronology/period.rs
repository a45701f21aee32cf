//! Period parser — turns free-text ranges like "May 2021 — Sep 2024" into a year.

use std::sync::LazyLock;

use regex::Regex;

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("year token pattern is valid"));

const PRESENT_MARKER: &str = "present";

fn year_tokens(period: &str) -> impl Iterator<Item = i32> + '_ {
    YEAR_TOKEN
        .find_iter(period)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
}

fn mentions_present(period: &str) -> bool {
    period.to_ascii_lowercase().contains(PRESENT_MARKER)
}

/// Year used to order entries: the last four-digit year in the period.
///
/// With no year at all, "Present" maps to `current_year` and anything else to 0,
/// so unparsable periods sort last. Never fails.
pub fn sort_year(period: &str, current_year: i32) -> i32 {
    match year_tokens(period).last() {
        Some(year) => year,
        None if mentions_present(period) => current_year,
        None => 0,
    }
}

/// First four-digit year in the period, or 0. Timeline nodes sit at the start of a range.
pub fn start_year(period: &str) -> i32 {
    year_tokens(period).next().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_year() {
        assert_eq!(sort_year("2019", 2025), 2019);
    }

    #[test]
    fn test_range_uses_last_year() {
        assert_eq!(sort_year("May 2021 — Sep 2024", 2025), 2024);
        assert_eq!(sort_year("2006 — 2010", 2025), 2010);
    }

    #[test]
    fn test_present_with_start_year_uses_that_year() {
        // A year before "Present" wins over the current year.
        assert_eq!(sort_year("2024 — Present", 2030), 2024);
    }

    #[test]
    fn test_present_without_year_is_current() {
        assert_eq!(sort_year("Present", 2025), 2025);
        assert_eq!(sort_year("present", 2025), 2025);
    }

    #[test]
    fn test_no_digits_is_zero() {
        assert_eq!(sort_year("sometime last spring", 2025), 0);
        assert_eq!(sort_year("", 2025), 0);
    }

    #[test]
    fn test_short_numbers_are_not_years() {
        assert_eq!(sort_year("Q3 '19", 2025), 0);
    }

    #[test]
    fn test_long_digit_runs_split_left_to_right() {
        // Non-overlapping four-digit tokens: "2010", "2013".
        assert_eq!(sort_year("20102013", 2025), 2013);
        assert_eq!(start_year("20102013"), 2010);
    }

    #[test]
    fn test_only_ascii_digits_form_years() {
        // U+0663 is ARABIC-INDIC DIGIT THREE.
        assert_eq!(sort_year("\u{0663}2015", 2025), 2015);
        assert_eq!(start_year("\u{0663}2015 — 2018"), 2015);
        assert_eq!(sort_year("\u{0662}\u{0660}\u{0661}\u{0665}", 2025), 0);
    }

    #[test]
    fn test_start_year() {
        assert_eq!(start_year("Sep 2010 — Dec 2013"), 2010);
        assert_eq!(start_year("Present"), 0);
    }
}
