//! Target-date resolution.
//!
//! Hearing dates are matched as substrings of rendered page text, so the
//! only thing that matters here is producing the exact `DD-MM-YYYY` string.

use chrono::{Days, Local, NaiveDate};

use crate::config::{CAUSE_LIST_DATE_FORMAT, HEARING_DATE_FORMAT};

/// Which day a search checks for a hearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSelector {
    #[default]
    Today,
    Tomorrow,
}

impl DateSelector {
    /// Lenient label parsing: `"tomorrow"` (any case) selects tomorrow,
    /// anything else falls back to today.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("tomorrow") {
            DateSelector::Tomorrow
        } else {
            DateSelector::Today
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateSelector::Today => "today",
            DateSelector::Tomorrow => "tomorrow",
        }
    }
}

/// Calendar date the selector refers to, relative to `today`.
pub fn target_date(selector: DateSelector, today: NaiveDate) -> NaiveDate {
    match selector {
        DateSelector::Today => today,
        // Only overflows at the end of chrono's representable range
        DateSelector::Tomorrow => today.checked_add_days(Days::new(1)).unwrap_or(today),
    }
}

/// `DD-MM-YYYY` string used for substring matching.
pub fn format_target_date(selector: DateSelector, today: NaiveDate) -> String {
    target_date(selector, today)
        .format(HEARING_DATE_FORMAT)
        .to_string()
}

/// `YYYY-MM-DD` string stored in a cause list.
pub fn format_cause_list_date(date: NaiveDate) -> String {
    date.format(CAUSE_LIST_DATE_FORMAT).to_string()
}

/// Today's date on the local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_has_leading_zeros() {
        assert_eq!(
            format_target_date(DateSelector::Today, date(2024, 3, 5)),
            "05-03-2024"
        );
    }

    #[test]
    fn test_tomorrow_month_rollover() {
        assert_eq!(
            format_target_date(DateSelector::Tomorrow, date(2024, 1, 31)),
            "01-02-2024"
        );
    }

    #[test]
    fn test_tomorrow_leap_year() {
        assert_eq!(
            format_target_date(DateSelector::Tomorrow, date(2024, 2, 28)),
            "29-02-2024"
        );
        assert_eq!(
            format_target_date(DateSelector::Tomorrow, date(2024, 2, 29)),
            "01-03-2024"
        );
        assert_eq!(
            format_target_date(DateSelector::Tomorrow, date(2023, 2, 28)),
            "01-03-2023"
        );
    }

    #[test]
    fn test_tomorrow_year_rollover() {
        assert_eq!(
            format_target_date(DateSelector::Tomorrow, date(2025, 12, 31)),
            "01-01-2026"
        );
    }

    #[test]
    fn test_selectors_differ_by_one_day() {
        let today = date(2026, 10, 16);
        let a = target_date(DateSelector::Today, today);
        let b = target_date(DateSelector::Tomorrow, today);
        assert_eq!((b - a).num_days(), 1);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(DateSelector::from_label("tomorrow"), DateSelector::Tomorrow);
        assert_eq!(DateSelector::from_label(" Tomorrow "), DateSelector::Tomorrow);
        assert_eq!(DateSelector::from_label("TOMORROW"), DateSelector::Tomorrow);
        assert_eq!(DateSelector::from_label("today"), DateSelector::Today);
        assert_eq!(DateSelector::from_label("next week"), DateSelector::Today);
        assert_eq!(DateSelector::from_label(""), DateSelector::Today);
    }

    #[test]
    fn test_cause_list_date_format() {
        assert_eq!(format_cause_list_date(date(2024, 7, 4)), "2024-07-04");
    }
}
