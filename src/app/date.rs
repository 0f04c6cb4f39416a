use std::fmt;
use std::sync::LazyLock;

use chrono::{Local, NaiveDate, TimeDelta};
use regex::Regex;

use super::error::DateError;

/// Format used in episode titles.
pub(crate) const DATE_FORMAT: &str = "%d.%m.%Y";
/// Lenient variant for dates typed by hand, e.g. `5.1.2024`.
pub(crate) const DATE_FORMAT_NO_ZEROS: &str = "%-d.%-m.%Y";

static DATE_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("date shape is valid")
});

/// A broadcast day. Displays as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct CalendarDate(NaiveDate);

impl CalendarDate {
    #[cfg(test)]
    pub(crate) fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub(crate) fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub(crate) fn parse_padded(raw: &str) -> Option<Self> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().map(Self)
    }

    pub(crate) fn shifted(self, days: i64) -> Result<Self, DateError> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or_else(|| DateError::OutOfRange {
                date: self.to_string(),
                offset: days,
            })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

pub(crate) fn parse_target(text: &str, offset_days: i64) -> Result<CalendarDate, DateError> {
    if !DATE_SHAPE_RE.is_match(text) {
        return Err(DateError::Invalid(text.to_string()));
    }
    let parsed = [DATE_FORMAT, DATE_FORMAT_NO_ZEROS]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| DateError::Invalid(text.to_string()))?;
    CalendarDate(parsed).shifted(offset_days)
}

/// Today's date shifted by `offset_days`, used when no `-d` is given.
pub(crate) fn today_target(offset_days: i64) -> Result<CalendarDate, DateError> {
    CalendarDate::today().shifted(offset_days)
}
