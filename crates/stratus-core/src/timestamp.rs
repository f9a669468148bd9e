//! Serde adapters for `awsJson1_1` timestamps.
//!
//! The JSON-RPC protocol sends timestamps as (possibly fractional) seconds
//! since the Unix epoch. Use these with `#[serde(with = "...")]`.
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Job {
//!     #[serde(with = "stratus_core::timestamp::epoch_seconds")]
//!     started_at: DateTime<Utc>,
//! }
//!
//! let job: Job = serde_json::from_str(r#"{"started_at":1700000000.5}"#).unwrap();
//! assert_eq!(job.started_at.timestamp_millis(), 1_700_000_000_500);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};

/// Convert epoch seconds to a UTC timestamp, keeping millisecond precision.
fn from_epoch_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = (secs * 1000.0).round() as i64;
    Utc.timestamp_millis_opt(millis).single()
}

/// Convert a UTC timestamp to epoch seconds.
#[allow(clippy::cast_precision_loss)]
fn to_epoch_seconds(value: &DateTime<Utc>) -> f64 {
    value.timestamp_millis() as f64 / 1000.0
}

struct EpochSecondsVisitor;

impl Visitor<'_> for EpochSecondsVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a number of seconds since the Unix epoch")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        from_epoch_seconds(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Utc.timestamp_opt(v, 0)
            .single()
            .ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {v}")))?;
        self.visit_i64(secs)
    }
}

/// Required timestamp as epoch seconds.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserializer, Serializer};

    /// Serialize as fractional epoch seconds.
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(super::to_epoch_seconds(value))
    }

    /// Deserialize from integer or fractional epoch seconds.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        deserializer.deserialize_any(super::EpochSecondsVisitor)
    }
}

/// Optional timestamp as epoch seconds. Pair with
/// `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod epoch_seconds_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "super::epoch_seconds")] DateTime<Utc>);

    /// Serialize as fractional epoch seconds, or `null`.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::epoch_seconds::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from epoch seconds or `null`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(v)| v))
    }
}
