// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Zoned formatting and parsing with strftime patterns.
//!
//! Output is always English (`%A` is "Saturday", `%b` is "Jul") no matter
//! the host's locale. Each call builds its own format items; nothing is
//! cached between calls.

use crate::error::{FormatError, ParseError};
use crate::timezone::resolve_timezone;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::fmt::Write;

/// Formats `instant` as wall-clock time in `timezone`.
///
/// # Arguments
///
/// * `instant` - The instant to format
/// * `pattern` - A strftime pattern, e.g. `"%Y-%m-%d %H:%M:%S"`
/// * `timezone` - An IANA zone name or a common abbreviation
///
/// # Errors
///
/// Returns an error if the zone is unknown or the pattern is malformed.
pub fn format_instant(
    instant: DateTime<Utc>,
    pattern: &str,
    timezone: &str,
) -> Result<String, FormatError> {
    let tz = resolve_timezone(timezone)?;
    let items =
        pattern_items(pattern).ok_or_else(|| FormatError::InvalidPattern(pattern.to_string()))?;

    let mut formatted = String::new();
    write!(
        formatted,
        "{}",
        instant.with_timezone(&tz).format_with_items(items.iter())
    )
    .map_err(|_| FormatError::InvalidPattern(pattern.to_string()))?;

    Ok(formatted)
}

/// Parses `text` as wall-clock time in `timezone`.
///
/// If the pattern carries an offset (`%z`, `%:z`) the offset in the text
/// wins over `timezone`. Date-only patterns yield local midnight. A local
/// time that occurs twice (a fall-back transition) resolves to the earlier
/// instant.
///
/// # Errors
///
/// Returns an error if the zone is unknown, the pattern is malformed, the
/// text does not match, or the local time does not exist in the zone.
pub fn parse_instant(
    text: &str,
    pattern: &str,
    timezone: &str,
) -> Result<DateTime<Utc>, ParseError> {
    let tz = resolve_timezone(timezone)?;
    if pattern_items(pattern).is_none() {
        return Err(ParseError::InvalidPattern(pattern.to_string()));
    }

    if let Ok(with_offset) = DateTime::parse_from_str(text, pattern) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    let naive = match NaiveDateTime::parse_from_str(text, pattern) {
        Ok(naive) => naive,
        Err(err) => NaiveDate::parse_from_str(text, pattern)
            .map(|date| date.and_time(NaiveTime::MIN))
            .map_err(|_| ParseError::Mismatch {
                input: text.to_string(),
                pattern: pattern.to_string(),
                reason: err.to_string(),
            })?,
    };

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ParseError::NonexistentLocalTime {
            local: naive.to_string(),
            timezone: timezone.to_string(),
        })
}

/// Parses a strftime pattern, rejecting unknown specifiers.
fn pattern_items(pattern: &str) -> Option<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_items_rejects_unknown_specifier() {
        assert!(pattern_items("%Y-%Q").is_none());
        assert!(pattern_items("%Y-%m-%d").is_some());
    }

    #[test]
    fn test_pattern_items_accepts_literal_text() {
        assert!(pattern_items("updated at %H:%M").is_some());
        assert!(pattern_items("").is_some());
    }
}
