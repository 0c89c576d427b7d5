// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Extraction of update times from the feed's timestamp text.
//!
//! The feed does not send ISO 8601. Its `Timestamp` values carry an epoch
//! value somewhere inside arbitrary text, e.g. `/Date(1700000000)/`.
//!
//! ## Invariants
//!
//! - Only the first run of ASCII digits is considered
//! - The run is read as epoch seconds
//! - Failure to extract is never an error; callers choose a fallback

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("DIGIT_RUN regex to compile"));

/// Returns the first maximal run of ASCII digits in `raw`.
#[must_use]
pub fn first_digit_run(raw: &str) -> Option<&str> {
    DIGIT_RUN.find(raw).map(|found| found.as_str())
}

/// Extracts the epoch-seconds instant embedded in `raw`.
///
/// Returns `None` when `raw` has no digits, when the first digit run does
/// not fit in an `i64`, or when it is outside the representable date range.
///
/// The digit run is interpreted as seconds. Whether the upstream feed
/// actually sends milliseconds has not been confirmed.
#[must_use]
pub fn extract_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let seconds: i64 = first_digit_run(raw)?.parse().ok()?;
    DateTime::from_timestamp(seconds, 0)
}

/// Extracts the instant embedded in `raw`, or returns `fallback`.
#[must_use]
pub fn timestamp_or(raw: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    if let Some(instant) = raw.and_then(extract_timestamp) {
        return instant;
    }

    tracing::trace!(raw = ?raw, %fallback, "No usable epoch in timestamp text");
    fallback
}
