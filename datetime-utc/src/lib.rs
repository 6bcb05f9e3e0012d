#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! A datetime column type that is always normalized to UTC at the storage boundary.
//!
//! Values going to storage are converted (not relabelled) to UTC and rendered as
//! `YYYY-MM-DD HH:MM:SS`. Values coming back from storage are parsed with an explicit
//! UTC zone, so the process-wide `TZ` setting never leaks into the result.
//!
//! ```
//! use datetime_utc::{time::Zone, types::UtcDateTimeType, value::Value, ZonedDateTime};
//!
//! let moscow: Zone = "Europe/Moscow".parse().unwrap();
//! let local = chrono::NaiveDate::from_ymd_opt(2017, 9, 17)
//!     .unwrap()
//!     .and_hms_opt(23, 30, 45)
//!     .unwrap();
//! let value = ZonedDateTime::immutable(local, moscow).unwrap();
//!
//! let column = UtcDateTimeType::immutable();
//! let stored = column.to_storage(&Value::from(value)).unwrap();
//! assert_eq!(stored.as_deref(), Some("2017-09-17 20:30:45"));
//! ```

pub mod error;
pub mod registry;
pub mod serde;
pub mod time;
pub mod types;
pub mod value;

pub use error::ConversionError;
pub use registry::TypeRegistry;
pub use time::{Representation, Zone, ZonedDateTime};
pub use types::{ColumnType, UtcDateTimeType};
pub use value::Value;

/// Test utilities.
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

#[cfg(test)]
mod tests;
