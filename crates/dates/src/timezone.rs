// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::UnknownTimezone;
use chrono_tz::Tz;

/// Common abbreviations and the zone each stands for.
///
/// Abbreviations name a region, not a fixed offset: `"PST"` resolves to
/// `America/Los_Angeles` and follows its daylight saving rules.
const ABBREVIATIONS: &[(&str, Tz)] = &[
    ("UTC", chrono_tz::UTC),
    ("GMT", chrono_tz::GMT),
    ("EST", chrono_tz::America::New_York),
    ("EDT", chrono_tz::America::New_York),
    ("CST", chrono_tz::America::Chicago),
    ("CDT", chrono_tz::America::Chicago),
    ("MST", chrono_tz::America::Denver),
    ("MDT", chrono_tz::America::Denver),
    ("PST", chrono_tz::America::Los_Angeles),
    ("PDT", chrono_tz::America::Los_Angeles),
    ("AKST", chrono_tz::America::Anchorage),
    ("AKDT", chrono_tz::America::Anchorage),
    ("HST", chrono_tz::Pacific::Honolulu),
    ("BST", chrono_tz::Europe::London),
    ("CET", chrono_tz::Europe::Paris),
    ("CEST", chrono_tz::Europe::Paris),
    ("EET", chrono_tz::Europe::Athens),
    ("EEST", chrono_tz::Europe::Athens),
    ("IST", chrono_tz::Asia::Kolkata),
    ("JST", chrono_tz::Asia::Tokyo),
    ("AEST", chrono_tz::Australia::Sydney),
    ("AEDT", chrono_tz::Australia::Sydney),
];

/// Resolves a time zone by abbreviation or IANA name.
///
/// Abbreviations are matched case-insensitively and take precedence, so
/// `"EST"` means US Eastern time (with DST) rather than the fixed
/// `EST` zone in the IANA database.
///
/// # Errors
///
/// Returns `UnknownTimezone` if `name` matches neither table.
pub fn resolve_timezone(name: &str) -> Result<Tz, UnknownTimezone> {
    let trimmed = name.trim();

    if let Some((_, tz)) = ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| abbreviation.eq_ignore_ascii_case(trimmed))
    {
        return Ok(*tz);
    }

    trimmed
        .parse::<Tz>()
        .map_err(|_| UnknownTimezone(name.to_string()))
}
