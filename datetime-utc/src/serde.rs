//! Serde helpers that write datetimes the way the column stores them
//!
//! ```
//! use datetime_utc::ZonedDateTime;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(with = "datetime_utc::serde::storage")]
//!     created_at: ZonedDateTime,
//!     #[serde(with = "datetime_utc::serde::storage_option")]
//!     deleted_at: Option<ZonedDateTime>,
//! }
//! ```
//!
//! Deserialized values are always UTC and tagged
//! [`Immutable`][crate::time::Representation::Immutable].

use crate::{error::ConversionError, time::ZonedDateTime, types::UtcDateTimeType};

fn to_storage_string(value: &ZonedDateTime) -> Result<String, ConversionError> {
    UtcDateTimeType::new(value.representation())
        .to_storage(&(*value).into())
        .map(Option::unwrap_or_default)
}

fn from_storage_string(value: &str) -> Result<ZonedDateTime, ConversionError> {
    UtcDateTimeType::immutable().parse(value)
}

/// `#[serde(with = ...)]` module for [`ZonedDateTime`] fields
pub mod storage {
    use crate::time::ZonedDateTime;
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    /// Serialize as a UTC storage string
    pub fn serialize<S>(value: &ZonedDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let string = super::to_storage_string(value).map_err(ser::Error::custom)?;
        serializer.serialize_str(&string)
    }

    /// Deserialize from a UTC storage string
    pub fn deserialize<'de, D>(deserializer: D) -> Result<ZonedDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        super::from_storage_string(&string).map_err(de::Error::custom)
    }
}

/// `#[serde(with = ...)]` module for `Option<ZonedDateTime>` fields
pub mod storage_option {
    use crate::time::ZonedDateTime;
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    /// Serialize as a UTC storage string, or none
    pub fn serialize<S>(value: &Option<ZonedDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => {
                let string = super::to_storage_string(value).map_err(ser::Error::custom)?;
                serializer.serialize_some(&string)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from a UTC storage string, or none
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ZonedDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|string| super::from_storage_string(&string).map_err(de::Error::custom))
            .transpose()
    }
}
