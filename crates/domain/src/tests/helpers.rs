// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

/// A fixed capture time for deterministic decoding.
pub fn capture_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_780_000_000, 0).unwrap()
}

/// A representative feed document with two facilities.
pub fn sample_document() -> Value {
    json!({
        "Structures": [
            {
                "Name": "North Garage",
                "CurrentCount": 120,
                "Capacity": 800,
                "Timestamp": "/Date(1700000000)/",
                "Levels": [
                    { "FriendlyName": "Total", "CurrentCount": 120, "Capacity": 800 },
                    { "FriendlyName": "Level 1", "CurrentCount": 20, "Capacity": 200 },
                    { "FriendlyName": "Level 2", "CurrentCount": 100, "Capacity": 600 }
                ]
            },
            {
                "Name": "Library Lot",
                "CurrentCount": null,
                "Timestamp": "pending",
                "Levels": [
                    { "FriendlyName": "Total" }
                ]
            }
        ]
    })
}
