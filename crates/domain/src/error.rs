// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur while decoding an availability document.
///
/// Locations use a JSON-path-like notation rooted at `$`, for example
/// `$.Structures[2].Levels[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The document is not well-formed JSON.
    #[error("Malformed JSON: {message}")]
    Syntax {
        /// Line of the offending input (1-based).
        line: usize,
        /// Column of the offending input (1-based).
        column: usize,
        /// The parser's description of the problem.
        message: String,
    },
    /// The document could not be read.
    #[error("Failed to read document: {0}")]
    Io(String),
    /// A required key is absent or `null`.
    #[error("Missing required field '{field}' at {location}")]
    MissingField {
        /// The object the field was expected in.
        location: String,
        /// The wire name of the field.
        field: &'static str,
    },
    /// A structural position holds the wrong kind of JSON value.
    #[error("Expected {expected} at {location}, found {found}")]
    UnexpectedType {
        /// Where the value was found.
        location: String,
        /// The JSON kind that was required.
        expected: &'static str,
        /// The JSON kind that was present.
        found: &'static str,
    },
    /// A field inside a structure or level has the wrong type.
    #[error("Invalid field at {location}: {message}")]
    InvalidField {
        /// The object containing the field.
        location: String,
        /// Description of the mismatch.
        message: String,
    },
}

impl DecodeError {
    pub(crate) fn invalid_field(location: &str, err: &serde_json::Error) -> Self {
        Self::InvalidField {
            location: location.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Io => Self::Io(err.to_string()),
            Category::Syntax | Category::Eof => Self::Syntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
            Category::Data => Self::invalid_field("$", &err),
        }
    }
}
