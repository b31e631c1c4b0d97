//! Serde helpers for TL scalar encodings.
//!
//! TL `long` values do not survive a round trip through a JSON number in
//! every client, so the bridge may send them as decimal strings. Both forms
//! are accepted; strings are always written. Anything outside `i64` is
//! rejected instead of being rounded.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serializer};

struct LongVisitor;

impl<'de> Visitor<'de> for LongVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 64-bit integer as a JSON number or decimal string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::custom(format!("long out of range: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        Err(E::custom(format!("long must be an integer, got {}", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse::<i64>()
            .map_err(|_| E::custom(format!("invalid long: {:?}", v)))
    }
}

struct LongDe(i64);

impl<'de> Deserialize<'de> for LongDe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LongVisitor).map(LongDe)
    }
}

pub mod long {
    use super::*;

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(LongVisitor)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_some(&v.to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
            Ok(Option::<LongDe>::deserialize(deserializer)?.map(|l| l.0))
        }
    }

    pub mod vec {
        use super::*;

        pub fn serialize<S: Serializer>(values: &[i64], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(values.iter().map(|v| v.to_string()))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
            Ok(Vec::<LongDe>::deserialize(deserializer)?
                .into_iter()
                .map(|l| l.0)
                .collect())
        }
    }
}

/// TL `bytes` carried as lowercase hex.
pub mod hex_bytes {
    use super::*;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Amounts {
        #[serde(with = "super::long")]
        amount: i64,
        #[serde(default, with = "super::long::option")]
        tip: Option<i64>,
        #[serde(default, with = "super::long::vec")]
        suggested: Vec<i64>,
    }

    #[test]
    fn test_long_accepts_number_and_string() {
        let parsed: Amounts = serde_json::from_str(
            r#"{"amount": "9223372036854775807", "tip": 150, "suggested": ["1", 2]}"#,
        )
        .unwrap();
        assert_eq!(parsed.amount, i64::MAX);
        assert_eq!(parsed.tip, Some(150));
        assert_eq!(parsed.suggested, vec![1, 2]);
    }

    #[test]
    fn test_long_serializes_as_string() {
        let json = serde_json::to_value(Amounts {
            amount: 9_007_199_254_740_993,
            tip: None,
            suggested: vec![5],
        })
        .unwrap();
        assert_eq!(json["amount"], "9007199254740993");
        assert!(json["tip"].is_null());
        assert_eq!(json["suggested"][0], "5");
    }

    #[test]
    fn test_long_out_of_range_is_rejected() {
        let err = serde_json::from_str::<Amounts>(r#"{"amount": 18446744073709551615}"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<Amounts>(r#"{"amount": "12.5"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_optional_long_defaults() {
        let parsed: Amounts = serde_json::from_str(r#"{"amount": -42}"#).unwrap();
        assert_eq!(parsed.amount, -42);
        assert_eq!(parsed.tip, None);
        assert!(parsed.suggested.is_empty());
    }
}
