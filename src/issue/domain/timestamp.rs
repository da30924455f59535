//! Fixed-width ISO-8601 timestamp encoding.
//!
//! Timestamps always carry six fractional digits and a `Z` suffix, so the
//! lexicographic order of encoded values equals their chronological order.
//! Use with `#[serde(with = "timestamp")]`.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serializer};

/// Reads the clock once, truncated to the precision the encoding keeps.
#[must_use]
pub fn capture(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(6)
}

/// Encodes a timestamp as `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
#[must_use]
pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Serializes a timestamp in the fixed-width encoding.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

/// Deserializes any RFC 3339 timestamp into UTC.
///
/// # Errors
///
/// Returns a deserialization error when the value is not RFC 3339.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
