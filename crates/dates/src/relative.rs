// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Relative time phrasing ("5 minutes ago", "Yesterday").
//!
//! ## Invariants
//!
//! - The phrase always describes elapsed time; an instant in the future is
//!   measured from now to that instant and still reads "... ago"
//! - Components are calendar differences in the chosen zone, not ratios of
//!   a total number of seconds
//! - The largest non-zero unit wins; lower units are never consulted once a
//!   higher one matches

use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Calendar components separating two instants.
///
/// Whole months are taken first, using clamped month arithmetic
/// (January 31 plus one month is the last day of February), then split
/// into years and months. What remains is split into weeks, days, hours,
/// minutes and seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CalendarDelta {
    /// Computes the components between `a` and `b` in the calendar of `tz`.
    /// Argument order does not matter.
    ///
    /// Whole months are counted on wall-clock dates in `tz`. Everything
    /// below a month is real elapsed time, so a daylight saving transition
    /// never adds or removes an hour.
    #[must_use]
    pub fn between(a: DateTime<Utc>, b: DateTime<Utc>, tz: Tz) -> Self {
        let (earliest, latest) = if a <= b { (a, b) } else { (b, a) };
        let start = earliest.with_timezone(&tz).naive_local();
        let end = latest.with_timezone(&tz).naive_local();

        let total_months = whole_months_between(start, end);
        let anchor = month_anchor(earliest, start, total_months, tz).min(latest);
        let mut remaining = (latest - anchor).num_seconds().max(0);

        let weeks = remaining / SECONDS_PER_WEEK;
        remaining %= SECONDS_PER_WEEK;
        let days = remaining / SECONDS_PER_DAY;
        remaining %= SECONDS_PER_DAY;
        let hours = remaining / SECONDS_PER_HOUR;
        remaining %= SECONDS_PER_HOUR;
        let minutes = remaining / SECONDS_PER_MINUTE;
        let seconds = remaining % SECONDS_PER_MINUTE;

        Self {
            years: i64::from(total_months / 12),
            months: i64::from(total_months % 12),
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Renders the components as a short phrase.
    ///
    /// With `numeric_dates` a single unit reads "1 week ago"; without it,
    /// "Last week". Plural counts are always numeric.
    #[must_use]
    pub fn phrase(&self, numeric_dates: bool) -> String {
        let units: [(i64, &str, &str); 6] = [
            (self.years, "year", "Last year"),
            (self.months, "month", "Last month"),
            (self.weeks, "week", "Last week"),
            (self.days, "day", "Yesterday"),
            (self.hours, "hour", "An hour ago"),
            (self.minutes, "minute", "A minute ago"),
        ];

        for (count, unit, word) in units {
            if count >= 2 {
                return format!("{count} {unit}s ago");
            }
            if count >= 1 {
                return if numeric_dates {
                    format!("1 {unit} ago")
                } else {
                    word.to_string()
                };
            }
        }

        if self.seconds >= 3 {
            format!("{} seconds ago", self.seconds)
        } else {
            String::from("just now")
        }
    }
}

/// Returns the instant `months` calendar months after `earliest`.
///
/// A local time skipped by a spring-forward transition is shifted by the
/// same wall-clock distance from `earliest` instead.
fn month_anchor(
    earliest: DateTime<Utc>,
    start: NaiveDateTime,
    months: u32,
    tz: Tz,
) -> DateTime<Utc> {
    if months == 0 {
        return earliest;
    }

    let Some(local) = start.checked_add_months(Months::new(months)) else {
        return earliest;
    };

    tz.from_local_datetime(&local)
        .earliest()
        .map(|anchor| anchor.with_timezone(&Utc))
        .or_else(|| earliest.checked_add_signed(local - start))
        .unwrap_or(earliest)
}

/// Returns the largest month count `n` with `start + n months <= end`.
fn whole_months_between(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let span = (i64::from(end.year()) - i64::from(start.year())) * 12
        + i64::from(end.month0())
        - i64::from(start.month0());
    let mut months = u32::try_from(span).unwrap_or(0);

    while months > 0
        && start
            .checked_add_months(Months::new(months))
            .is_none_or(|shifted| shifted > end)
    {
        months -= 1;
    }

    months
}

/// Describes how long ago `instant` was, measured against the current time
/// in the UTC calendar.
#[must_use]
pub fn time_ago_since(instant: DateTime<Utc>, numeric_dates: bool) -> String {
    time_ago_between(instant, Utc::now(), numeric_dates)
}

/// Shorthand for [`time_ago_since`] with numeric phrasing.
#[must_use]
pub fn time_ago(instant: DateTime<Utc>) -> String {
    time_ago_since(instant, true)
}

/// Describes the time between `instant` and `now` in the UTC calendar.
#[must_use]
pub fn time_ago_between(instant: DateTime<Utc>, now: DateTime<Utc>, numeric_dates: bool) -> String {
    time_ago_between_in(instant, now, numeric_dates, chrono_tz::UTC)
}

/// Describes the time between `instant` and `now` in the calendar of `tz`.
///
/// The zone matters near month ends and daylight saving transitions,
/// where the same pair of instants can be a different number of calendar
/// months or days apart.
#[must_use]
pub fn time_ago_between_in(
    instant: DateTime<Utc>,
    now: DateTime<Utc>,
    numeric_dates: bool,
    tz: Tz,
) -> String {
    let delta = CalendarDelta::between(instant, now, tz);
    tracing::trace!(?delta, %instant, %now, "Computed calendar delta");
    delta.phrase(numeric_dates)
}
