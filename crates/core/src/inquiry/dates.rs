use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;

/// Nights assumed when the text mentions only a single date.
const DEFAULT_STAY_NIGHTS: u64 = 2;

const MONTHS: [(&str, u32); 12] = [
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StayDates {
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
}

/// Collects every date-shaped mention in the text into one candidate set and
/// assigns the stay window from it: the earliest distinct date becomes
/// check-in and the second-earliest check-out, regardless of which pattern or
/// text position produced them.
#[derive(Clone, Debug)]
pub struct DateExtractor {
    numeric: Regex,
    month_name: Regex,
    labeled_checkin: Regex,
    labeled_checkout: Regex,
}

impl DateExtractor {
    pub fn new() -> Self {
        Self {
            numeric: Regex::new(r"(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{2,4})")
                .expect("numeric date pattern compiles"),
            month_name: Regex::new(
                r"(?i)(\d{1,2})(?:st|nd|rd|th)?\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s*(\d{2,4})?",
            )
            .expect("month-name date pattern compiles"),
            labeled_checkin: Regex::new(
                r"(?i)(?:from|check[\s\-]?in)\s*:?\s*(\d{1,2})[/.\-](\d{1,2})(?:[/.\-](\d{2,4}))?",
            )
            .expect("check-in date pattern compiles"),
            labeled_checkout: Regex::new(
                r"(?i)(?:to|check[\s\-]?out)\s*:?\s*(\d{1,2})[/.\-](\d{1,2})(?:[/.\-](\d{2,4}))?",
            )
            .expect("check-out date pattern compiles"),
        }
    }

    pub fn extract(&self, text: &str, reference_date: NaiveDate) -> StayDates {
        let mut candidates = BTreeSet::new();

        for captures in self.numeric.captures_iter(text) {
            let day = captures[1].parse().ok();
            let month = captures[2].parse().ok();
            let year = captures[3].parse().ok();
            if let (Some(day), Some(month)) = (day, month) {
                candidates.extend(build_date(day, month, year, reference_date));
            }
        }

        for captures in self.month_name.captures_iter(text) {
            let day = captures[1].parse().ok();
            let month = month_number(&captures[2]);
            let year = captures.get(3).and_then(|raw| raw.as_str().parse().ok());
            if let (Some(day), Some(month)) = (day, month) {
                candidates.extend(build_date(day, month, year, reference_date));
            }
        }

        for pattern in [&self.labeled_checkin, &self.labeled_checkout] {
            if let Some(captures) = pattern.captures(text) {
                let day = captures[1].parse().ok();
                let month = captures[2].parse().ok();
                let year = captures.get(3).and_then(|raw| raw.as_str().parse().ok());
                if let (Some(day), Some(month)) = (day, month) {
                    candidates.extend(build_date(day, month, year, reference_date));
                }
            }
        }

        let mut ordered = candidates.into_iter();
        match (ordered.next(), ordered.next()) {
            (Some(checkin), Some(checkout)) => {
                StayDates { checkin: Some(checkin), checkout: Some(checkout) }
            }
            (Some(checkin), None) => StayDates {
                checkin: Some(checkin),
                checkout: checkin.checked_add_days(Days::new(DEFAULT_STAY_NIGHTS)),
            },
            _ => StayDates::default(),
        }
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.to_ascii_lowercase();
    MONTHS.iter().find(|(short, _)| prefix.starts_with(short)).map(|(_, number)| *number)
}

/// Validates a candidate: day 1-31, month 1-12, and a real calendar date.
/// Two-digit years get +2000; a missing year takes the reference year.
fn build_date(day: u32, month: u32, year: Option<i32>, reference_date: NaiveDate) -> Option<NaiveDate> {
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }
    let year = match year {
        Some(year) if year < 100 => year + 2000,
        Some(year) => year,
        None => reference_date.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}
