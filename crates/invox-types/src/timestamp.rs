use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Creation/update time of a stored document.
///
/// Documents written by older clients carry timestamps in several shapes:
/// the store-native `{seconds, nanoseconds}` object, a bare epoch-millisecond
/// integer, or a string (RFC 3339, or an integer in string form). All of them
/// deserialize into one variant here and are normalized once, at the data
/// boundary, via [`Timestamp::to_datetime`]. Values that cannot be normalized
/// become `None` and render as a placeholder downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Store-native form: seconds since the epoch plus a nanosecond part.
    Object {
        seconds: i64,
        #[serde(default)]
        nanoseconds: u32,
    },
    /// Epoch milliseconds.
    Millis(i64),
    /// RFC 3339 string, or an epoch-millisecond integer in string form.
    Text(String),
}

impl Timestamp {
    /// Current wall-clock time in the store-native representation.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Timestamp::Object {
            seconds: dt.timestamp(),
            nanoseconds: dt.timestamp_subsec_nanos(),
        }
    }

    /// Normalize to a UTC datetime. Returns `None` for unparseable values.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Object {
                seconds,
                nanoseconds,
            } => Utc.timestamp_opt(*seconds, *nanoseconds).single(),
            Timestamp::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            Timestamp::Text(s) => {
                if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                    return Some(dt.with_timezone(&Utc));
                }
                s.parse::<i64>()
                    .ok()
                    .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            }
        }
    }
}
