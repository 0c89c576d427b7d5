// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed model of the Spots parking availability feed.
//!
//! The feed is a JSON document listing parking structures, each with a
//! per-level breakdown. [`decode`] turns that document into a [`Response`];
//! nothing here performs I/O beyond reading an already-fetched payload.

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

mod decode;
mod error;
mod timestamp;
mod types;

#[cfg(test)]
mod tests;

pub use decode::{decode, decode_at, decode_reader, decode_slice, decode_value};
pub use error::DecodeError;
pub use timestamp::{extract_timestamp, first_digit_run, timestamp_or};
pub use types::{Level, Response, Structure};
