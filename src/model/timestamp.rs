//! Timestamp decoding
//!
//! Timestamps are written as RFC 3339 in UTC. On read, offset-less ISO 8601
//! values (`2024-05-01T12:00:00.123456`) are also accepted and taken as
//! local time, which is how older announcement files record them.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an RFC 3339 or offset-less ISO 8601 timestamp into UTC
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(s, NAIVE_FORMAT).ok()?;
    // Nonexistent local times (DST gap) fall back to reading the value as UTC
    let ts = match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => naive.and_utc(),
    };
    Some(ts)
}

/// `deserialize_with` adapter for [`parse`]
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid timestamp '{}'", raw))
    })
}
