// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// A time zone name that is neither an IANA identifier nor a known
/// abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown time zone '{0}'")]
pub struct UnknownTimezone(pub String);

/// Errors that can occur while formatting an instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    UnknownTimezone(#[from] UnknownTimezone),

    /// The pattern contains an unsupported or malformed specifier.
    #[error("Invalid date pattern '{0}'")]
    InvalidPattern(String),
}

/// Errors that can occur while parsing text into an instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    UnknownTimezone(#[from] UnknownTimezone),

    /// The pattern contains an unsupported or malformed specifier.
    #[error("Invalid date pattern '{0}'")]
    InvalidPattern(String),

    /// The text does not match the pattern.
    #[error("'{input}' does not match pattern '{pattern}': {reason}")]
    Mismatch {
        input: String,
        pattern: String,
        reason: String,
    },

    /// The local time falls in a gap (e.g. a spring-forward transition).
    #[error("Local time {local} does not exist in {timezone}")]
    NonexistentLocalTime { local: String, timezone: String },
}
