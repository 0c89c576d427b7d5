// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text summary of a decoded response.

use crate::config::RenderOptions;
use chrono::{DateTime, Utc};
use spots_dates::{FormatError, format_instant, time_ago_between_in};
use spots_domain::{Level, Response, Structure};
use std::fmt::Write;

const UNNAMED: &str = "(unnamed)";

/// Renders one block per facility, listing physical levels only.
///
/// A facility whose timestamp cannot be read is shown as updated at `now`.
pub fn render_summary(
    response: &Response,
    options: &RenderOptions,
    now: DateTime<Utc>,
) -> Result<String, FormatError> {
    let mut out = String::new();

    let captured = format_instant(
        response.captured_at(),
        &options.date_format,
        &options.timezone_name,
    )?;
    push_line(
        &mut out,
        &format!(
            "{} structure(s), captured {captured}",
            response.structures().len()
        ),
    );

    for structure in response.structures() {
        render_structure(&mut out, structure, options, now)?;
    }

    Ok(out)
}

fn render_structure(
    out: &mut String,
    structure: &Structure,
    options: &RenderOptions,
    now: DateTime<Utc>,
) -> Result<(), FormatError> {
    let updated = structure.last_updated_at_or(now);
    let relative = time_ago_between_in(updated, now, options.numeric_dates, options.timezone);
    let absolute = format_instant(updated, &options.date_format, &options.timezone_name)?;

    push_line(
        out,
        &format!(
            "{}: {}",
            structure.name().unwrap_or(UNNAMED),
            counts(
                structure.available_count(),
                structure.total_capacity(),
                structure.occupied_count()
            )
        ),
    );
    push_line(out, &format!("  updated {relative} ({absolute})"));

    for level in structure.levels() {
        push_line(out, &level_line(level));
    }

    Ok(())
}

fn level_line(level: &Level) -> String {
    format!(
        "  - {}: {}",
        level.name().unwrap_or(UNNAMED),
        counts(
            level.available_count(),
            level.total_capacity(),
            level.occupied_count()
        )
    )
}

fn counts(available: Option<i64>, total: Option<i64>, occupied: Option<i64>) -> String {
    let available = available.map_or_else(|| String::from("?"), |n| n.to_string());
    let total = total.map_or_else(|| String::from("?"), |n| n.to_string());

    match occupied {
        Some(taken) => format!("{available} of {total} free ({taken} taken)"),
        None => format!("{available} of {total} free"),
    }
}

fn push_line(out: &mut String, line: &str) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{line}");
}
