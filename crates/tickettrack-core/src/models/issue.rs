//! Issue data model

use crate::{Error, Result};
use chrono::{DateTime, TimeDelta, Utc};

/// Layout of the tracker's `created` field, e.g. `2024-03-01T09:15:42.000+0100`
pub const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// An issue found by a search. Lives only until it is handed to the consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub project: String,
    pub created: DateTime<Utc>,
}

impl Issue {
    pub fn new(key: String, summary: String, project: String, created: DateTime<Utc>) -> Self {
        Self {
            key,
            summary,
            project,
            created,
        }
    }

    /// Parse a `created` value in [`CREATED_FORMAT`] and normalise it to UTC.
    ///
    /// Only the exact layout is accepted: three fractional digits and an
    /// offset without a colon.
    pub fn parse_created(value: &str) -> Result<DateTime<Utc>> {
        let invalid = |reason: String| Error::Timestamp {
            value: value.to_string(),
            reason,
        };

        if !has_created_shape(value.as_bytes()) {
            return Err(invalid(
                "expected YYYY-MM-DDTHH:MM:SS.sss±HHMM".to_string(),
            ));
        }

        DateTime::parse_from_str(value, CREATED_FORMAT)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| invalid(e.to_string()))
    }

    /// Time elapsed between creation and `now`. Negative for future timestamps.
    pub fn age_at(&self, now: DateTime<Utc>) -> TimeDelta {
        now.signed_duration_since(self.created)
    }
}

/// `YYYY-MM-DDTHH:MM:SS.sss±HHMM`, 28 bytes
fn has_created_shape(b: &[u8]) -> bool {
    const DIGITS: [usize; 21] = [
        0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15, 17, 18, 20, 21, 22, 24, 25, 26, 27,
    ];

    b.len() == 28
        && b[4] == b'-'
        && b[7] == b'-'
        && b[10] == b'T'
        && b[13] == b':'
        && b[16] == b':'
        && b[19] == b'.'
        && (b[23] == b'+' || b[23] == b'-')
        && DIGITS.iter().all(|&i| b[i].is_ascii_digit())
}
