//! Locale date order detection and display formatting of ISO dates
//!
//! Dates are stored and submitted as ISO `YYYY-MM-DD`. For display the
//! components are reordered to the local convention and joined with `/`.
//!
//! The convention is detected by formatting a sentinel date whose year,
//! month and day are all distinguishable with the locale's own date format
//! (`%x`) and reading back which component comes first.

use std::env;

use chrono::{Locale, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Display order of date components
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormatPreference {
    /// `2025/11/12`
    #[default]
    YearFirst,
    /// `11/12/2025`
    MonthFirst,
    /// `12/11/2025`
    DayFirst,
}

/// Configured date order: fixed, or probed from the process locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormatSetting {
    #[default]
    Auto,
    YearFirst,
    MonthFirst,
    DayFirst,
}

impl DateFormatSetting {
    /// Resolve to a concrete preference, probing the locale for `Auto`
    pub fn resolve(self) -> DateFormatPreference {
        match self {
            DateFormatSetting::Auto => DateFormatPreference::detect(),
            DateFormatSetting::YearFirst => DateFormatPreference::YearFirst,
            DateFormatSetting::MonthFirst => DateFormatPreference::MonthFirst,
            DateFormatSetting::DayFirst => DateFormatPreference::DayFirst,
        }
    }
}

/// Sentinel components: no two render the same, in two or four digits
const SENTINEL_YEAR: i32 = 2000;
const SENTINEL_MONTH: u32 = 11;
const SENTINEL_DAY: u32 = 22;

impl DateFormatPreference {
    /// Detect the preference of the process locale (`LC_ALL`, `LC_TIME`, `LANG`).
    ///
    /// Unknown, `C` and `POSIX` locales fall back to year-first.
    pub fn detect() -> Self {
        match process_locale() {
            Some(name) => Self::from_locale(&name).unwrap_or_else(|| {
                tracing::debug!(locale = %name, "no date order for locale, using year-first");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Date order of a named locale such as `en_US` or `de_DE.UTF-8`
    pub fn from_locale(name: &str) -> Option<Self> {
        let name = normalize_locale_name(name);
        if name.is_empty() || name == "C" || name == "POSIX" {
            return None;
        }
        let locale = Locale::try_from(name.as_str()).ok()?;
        let sentinel = NaiveDate::from_ymd_opt(SENTINEL_YEAR, SENTINEL_MONTH, SENTINEL_DAY)?
            .and_hms_opt(0, 0, 0)?;
        let formatted = Utc
            .from_utc_datetime(&sentinel)
            .format_localized("%x", locale)
            .to_string();
        Self::classify(&formatted)
    }

    /// Classify a rendering of the sentinel date by its leading component
    pub fn classify(formatted: &str) -> Option<Self> {
        let year = formatted
            .find(&SENTINEL_YEAR.to_string())
            .or_else(|| formatted.find(&format!("{:02}", SENTINEL_YEAR % 100)))?;
        let month = formatted.find(&SENTINEL_MONTH.to_string())?;
        let day = formatted.find(&SENTINEL_DAY.to_string())?;

        let first = year.min(month).min(day);
        if first == year {
            Some(DateFormatPreference::YearFirst)
        } else if first == month {
            Some(DateFormatPreference::MonthFirst)
        } else {
            Some(DateFormatPreference::DayFirst)
        }
    }

    /// Reformat an ISO date for display; None if `iso` is not a calendar date
    pub fn format_iso(self, iso: &str) -> Option<String> {
        let date = parse_iso_date(iso.trim())?;
        let pattern = match self {
            DateFormatPreference::YearFirst => "%Y/%m/%d",
            DateFormatPreference::MonthFirst => "%m/%d/%Y",
            DateFormatPreference::DayFirst => "%d/%m/%Y",
        };
        Some(date.format(pattern).to_string())
    }

    pub fn name(self) -> &'static str {
        match self {
            DateFormatPreference::YearFirst => "year-first",
            DateFormatPreference::MonthFirst => "month-first",
            DateFormatPreference::DayFirst => "day-first",
        }
    }
}

/// Parse a canonical ISO `YYYY-MM-DD` date.
///
/// chrono alone also accepts unpadded fields and signed years; those are
/// refused.
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(text, ISO_DATE).ok()?;
    (date.format(ISO_DATE).to_string() == text).then_some(date)
}

const ISO_DATE: &str = "%Y-%m-%d";

fn process_locale() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
}

/// `de_DE.UTF-8@euro` -> `de_DE`, `en-US` -> `en_US`
fn normalize_locale_name(name: &str) -> String {
    name.split(|c: char| c == '.' || c == '@')
        .next()
        .unwrap_or_default()
        .replace('-', "_")
}
