// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date utilities for presenting availability data.
//!
//! - [`time_ago_since`] phrases how long ago an instant was ("3 minutes ago")
//! - [`format_instant`] and [`parse_instant`] convert between instants and
//!   text using a strftime pattern and a named time zone

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod format;
mod relative;
mod timezone;

#[cfg(test)]
mod tests;

pub use error::{FormatError, ParseError, UnknownTimezone};
pub use format::{format_instant, parse_instant};
pub use relative::{CalendarDelta, time_ago, time_ago_between, time_ago_between_in, time_ago_since};
pub use timezone::resolve_timezone;
