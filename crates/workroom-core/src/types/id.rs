//! The 24-character hex identifier used for all domain entities.
//!
//! Identifiers are twelve bytes: a four-byte big-endian creation timestamp
//! (seconds) followed by eight random bytes, rendered as lowercase hex.
//! Every identifier accepted on the wire is validated against this shape
//! before it reaches a repository. When the `sqlx` feature is enabled,
//! [`ObjectId`] also implements `sqlx::Type`, `sqlx::Encode`, and
//! `sqlx::Decode` for PostgreSQL `TEXT` columns.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use rand::Rng;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

/// Unique identifier for a domain entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Create a new identifier from the current time and fresh entropy.
    pub fn new() -> Self {
        let mut bytes = [0u8; 12];
        let seconds = Utc::now().timestamp().max(0) as u32;
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        rand::rng().fill_bytes(&mut bytes[4..]);
        Self(bytes)
    }

    /// Parse an identifier from its 24-character hex form.
    ///
    /// Uppercase hex digits are accepted; the canonical rendering is
    /// lowercase.
    pub fn parse_str(input: &str) -> Result<Self, AppError> {
        if input.len() != 24 || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AppError::validation(format!(
                "Invalid id '{input}': expected 24 hex characters"
            )));
        }
        let mut bytes = [0u8; 12];
        for (i, chunk) in input.as_bytes().chunks_exact(2).enumerate() {
            // chunks are guaranteed valid hex at this point
            let hi = (chunk[0] as char).to_digit(16).unwrap_or(0) as u8;
            let lo = (chunk[1] as char).to_digit(16).unwrap_or(0) as u8;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// Whether a string is a well-formed identifier.
    pub fn is_valid(input: &str) -> bool {
        input.len() == 24 && input.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// The raw twelve bytes.
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// The creation timestamp embedded in the identifier (unix seconds).
    pub fn timestamp_secs(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ObjectId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_str(&raw).map_err(D::Error::custom)
    }
}

#[cfg(feature = "sqlx")]
impl sqlx::Type<sqlx::Postgres> for ObjectId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "sqlx")]
impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ObjectId {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode(self.to_string(), buf)
    }
}

#[cfg(feature = "sqlx")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ObjectId {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Self::parse_str(raw).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_well_formed() {
        let id = ObjectId::new();
        let rendered = id.to_string();
        assert_eq!(rendered.len(), 24);
        assert!(ObjectId::is_valid(&rendered));
    }

    #[test]
    fn test_new_ids_differ() {
        assert_ne!(ObjectId::new(), ObjectId::new());
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = ObjectId::new();
        let parsed = ObjectId::parse_str(&id.to_string()).expect("should parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let id = ObjectId::parse_str("507F1F77BCF86CD799439011").expect("should parse");
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(ObjectId::parse_str("").is_err());
        assert!(ObjectId::parse_str("507f1f77bcf86cd79943901").is_err());
        assert!(ObjectId::parse_str("507f1f77bcf86cd7994390111").is_err());
        assert!(ObjectId::parse_str("507f1f77bcf86cd79943901z").is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(ObjectId::is_valid("507f1f77bcf86cd799439011"));
        assert!(!ObjectId::is_valid("not-an-id"));
        assert!(!ObjectId::is_valid("507f1f77-bcf8-6cd7-9943"));
    }

    #[test]
    fn test_timestamp_prefix() {
        let before = Utc::now().timestamp() as u32;
        let id = ObjectId::new();
        let after = Utc::now().timestamp() as u32;
        assert!(id.timestamp_secs() >= before);
        assert!(id.timestamp_secs() <= after);
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ObjectId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{id}\""));
        let parsed: ObjectId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<ObjectId>("\"zzz\"").is_err());
    }
}
