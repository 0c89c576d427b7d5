// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::timestamp::timestamp_or;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A decoded availability document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Facilities in the order the feed listed them.
    structures: Vec<Structure>,
    /// When this response was decoded locally.
    captured_at: DateTime<Utc>,
}

impl Response {
    /// Creates a new `Response`.
    ///
    /// # Arguments
    ///
    /// * `structures` - Facilities in feed order
    /// * `captured_at` - The local time the payload was processed
    #[must_use]
    pub const fn new(structures: Vec<Structure>, captured_at: DateTime<Utc>) -> Self {
        Self {
            structures,
            captured_at,
        }
    }

    /// Returns the facilities in feed order.
    #[must_use]
    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    /// Returns the local processing time of this response.
    ///
    /// This is not a server timestamp; see [`Structure::last_updated_at`]
    /// for the per-facility update time.
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Consumes the response, returning the facilities.
    #[must_use]
    pub fn into_structures(self) -> Vec<Structure> {
        self.structures
    }
}

/// One parking facility.
///
/// ## Invariants
///
/// - `raw_levels` keeps the feed's order, including the leading aggregate row
/// - The aggregate row is never a physical level; use [`Structure::levels`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Structure {
    name: Option<String>,
    available_count: Option<i64>,
    total_capacity: Option<i64>,
    last_updated_raw: Option<String>,
    raw_levels: Vec<Level>,
}

impl Structure {
    /// Creates a new `Structure`.
    ///
    /// # Arguments
    ///
    /// * `name` - The facility name
    /// * `available_count` - Currently free spots
    /// * `total_capacity` - Total spots
    /// * `last_updated_raw` - The feed's timestamp text
    /// * `raw_levels` - Levels as listed by the feed, aggregate row first
    #[must_use]
    pub const fn new(
        name: Option<String>,
        available_count: Option<i64>,
        total_capacity: Option<i64>,
        last_updated_raw: Option<String>,
        raw_levels: Vec<Level>,
    ) -> Self {
        Self {
            name,
            available_count,
            total_capacity,
            last_updated_raw,
            raw_levels,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn available_count(&self) -> Option<i64> {
        self.available_count
    }

    #[must_use]
    pub const fn total_capacity(&self) -> Option<i64> {
        self.total_capacity
    }

    /// Returns the feed's timestamp text exactly as received.
    #[must_use]
    pub fn last_updated_raw(&self) -> Option<&str> {
        self.last_updated_raw.as_deref()
    }

    /// Returns every level row as received, aggregate row included.
    #[must_use]
    pub fn raw_levels(&self) -> &[Level] {
        &self.raw_levels
    }

    /// Returns the aggregate row the feed places first in `Levels`.
    #[must_use]
    pub fn sentinel_level(&self) -> Option<&Level> {
        self.raw_levels.first()
    }

    /// Returns the physical levels of this facility.
    ///
    /// The feed's first level row is an aggregate total and is dropped here.
    /// With zero or one raw rows the result is empty.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        self.raw_levels.get(1..).unwrap_or_default()
    }

    /// Returns when the feed last updated this facility.
    ///
    /// The first run of digits in the timestamp text is read as epoch
    /// seconds. When there is none, the current time is returned instead, so
    /// a missing and an unreadable timestamp look the same to callers.
    #[must_use]
    pub fn last_updated_at(&self) -> DateTime<Utc> {
        self.last_updated_at_or(Utc::now())
    }

    /// Like [`Structure::last_updated_at`], with an explicit fallback.
    #[must_use]
    pub fn last_updated_at_or(&self, fallback: DateTime<Utc>) -> DateTime<Utc> {
        timestamp_or(self.last_updated_raw(), fallback)
    }

    /// Returns the number of occupied spots, if both counts are known.
    #[must_use]
    pub fn occupied_count(&self) -> Option<i64> {
        occupied(self.available_count, self.total_capacity)
    }
}

/// One sub-area of a facility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Level {
    name: Option<String>,
    available_count: Option<i64>,
    total_capacity: Option<i64>,
}

impl Level {
    /// Creates a new `Level`.
    #[must_use]
    pub const fn new(
        name: Option<String>,
        available_count: Option<i64>,
        total_capacity: Option<i64>,
    ) -> Self {
        Self {
            name,
            available_count,
            total_capacity,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn available_count(&self) -> Option<i64> {
        self.available_count
    }

    #[must_use]
    pub const fn total_capacity(&self) -> Option<i64> {
        self.total_capacity
    }

    /// Returns the number of occupied spots, if both counts are known.
    #[must_use]
    pub fn occupied_count(&self) -> Option<i64> {
        occupied(self.available_count, self.total_capacity)
    }
}

fn occupied(available: Option<i64>, total: Option<i64>) -> Option<i64> {
    Some(total?.saturating_sub(available?).max(0))
}
