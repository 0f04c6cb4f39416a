use std::sync::LazyLock;

use regex::Regex;

use super::date::CalendarDate;
use crate::config::TITLE_PATTERN;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TITLE_PATTERN).expect("title pattern is valid"));

/// Broadcast date of an evening edition, `None` for any other title.
pub(crate) fn extract_date(title: &str) -> Option<CalendarDate> {
    let captures = TITLE_RE.captures(title)?;
    let date = captures.name("date")?;
    CalendarDate::parse_padded(date.as_str())
}
