//! Calendar dates stored as plain `YYYY-MM-DD` strings.
//!
//! Dates never pass through a timestamp, so a transaction recorded on a given
//! day stays on that day regardless of the local UTC offset.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

const ISO_FORMAT: &str = "%Y-%m-%d";
const ISO_LEN: usize = 10;

/// A zero-padded `YYYY-MM-DD` calendar date.
///
/// Ordering is lexicographic on the underlying string, which matches
/// chronological order for the fixed-width format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoDate(String);

impl IsoDate {
    /// Parses a strict `YYYY-MM-DD` string naming a real calendar day.
    pub fn parse(input: &str) -> Result<Self, LedgerError> {
        let trimmed = input.trim();
        let well_formed = trimmed.len() == ISO_LEN
            && trimmed
                .char_indices()
                .all(|(idx, ch)| {
                    if matches!(idx, 4 | 7) {
                        ch == '-'
                    } else {
                        ch.is_ascii_digit()
                    }
                });
        if !well_formed {
            return Err(LedgerError::InvalidDate(input.to_string()));
        }
        let date = NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
            .map_err(|_| LedgerError::InvalidDate(input.to_string()))?;
        Ok(Self::from(date))
    }

    /// The current calendar date in the local timezone.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> i32 {
        self.0.get(0..4).and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// Month component, 1-12.
    pub fn month(&self) -> u32 {
        self.0.get(5..7).and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// The `YYYY-MM` prefix used to bucket transactions by month.
    pub fn month_key(&self) -> &str {
        self.0.get(0..7).unwrap_or(&self.0)
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, ISO_FORMAT).ok()
    }

    /// Human readable form such as `Jan 5, 2026`.
    pub fn display(&self) -> String {
        self.to_naive()
            .map(|date| date.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| self.0.clone())
    }
}

impl From<NaiveDate> for IsoDate {
    fn from(date: NaiveDate) -> Self {
        Self(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        ))
    }
}

impl TryFrom<String> for IsoDate {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IsoDate> for String {
    fn from(date: IsoDate) -> Self {
        date.0
    }
}

impl FromStr for IsoDate {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short month/year label such as `Mar 2026`.
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{year:04}-{month:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strict_iso_dates() {
        let date = IsoDate::parse("2026-03-02").unwrap();
        assert_eq!(date.as_str(), "2026-03-02");
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 3);
        assert_eq!(date.month_key(), "2026-03");
    }

    #[test]
    fn rejects_malformed_or_impossible_dates() {
        for input in ["2026-3-2", "2026/03/02", "2026-02-30", "", "03-02-2026", "2026-13-01"] {
            assert!(
                matches!(IsoDate::parse(input), Err(LedgerError::InvalidDate(_))),
                "`{input}` should be rejected"
            );
        }
    }

    #[test]
    fn converts_calendar_dates_without_shifting() {
        let naive = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let date = IsoDate::from(naive);
        assert_eq!(date.as_str(), "2026-01-05");
        assert_eq!(date.to_naive(), Some(naive));
        assert_eq!(date.display(), "Jan 5, 2026");
    }

    #[test]
    fn ordering_is_chronological() {
        let earlier = IsoDate::parse("2025-12-31").unwrap();
        let later = IsoDate::parse("2026-01-01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn serializes_as_plain_string() {
        let date = IsoDate::parse("2026-01-10").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2026-01-10\"");
        let back: IsoDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<IsoDate>("\"2026-1-10\"").is_err());
    }

    #[test]
    fn month_label_is_short_form() {
        assert_eq!(month_label(2026, 3), "Mar 2026");
        assert_eq!(month_label(2026, 13), "2026-13");
    }
}
