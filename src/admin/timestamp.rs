//! Unix timestamp codec
//!
//! The admin API reports every `*_at` field as integer seconds since the epoch.
//! Use with `#[serde(with = "timestamp")]` or `#[serde(with = "timestamp::option")]`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Convert epoch seconds into a UTC instant
pub fn from_epoch_seconds(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

/// Render an instant as RFC 3339 in UTC (`2023-11-14T22:13:20Z`)
pub fn format_rfc3339(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render an optional instant, empty string when absent
pub fn format_optional(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_rfc3339).unwrap_or_default()
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(ts.timestamp())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = i64::deserialize(deserializer)?;
    from_epoch_seconds(secs)
        .ok_or_else(|| D::Error::custom(format!("timestamp {} is out of range", secs)))
}

/// Nullable variant: `null` or a missing field (with `#[serde(default)]`) maps to `None`
pub mod option {
    use super::*;

    pub fn serialize<S>(ts: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match ts {
            Some(ts) => serializer.serialize_some(&ts.timestamp()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            Some(secs) => from_epoch_seconds(secs).map(Some).ok_or_else(|| {
                D::Error::custom(format!("timestamp {} is out of range", secs))
            }),
            None => Ok(None),
        }
    }
}
