//! Column types the mapping layer converts values through

mod utc_datetime;

pub use utc_datetime::UtcDateTimeType;

use crate::{error::ConversionError, value::Value};
use std::fmt::Debug;

/// This trait must be implemented by every type that can be registered with a
/// [`TypeRegistry`][crate::registry::TypeRegistry]. It is the minimum API the mapping
/// layer needs to move one value across the storage boundary in either direction.
///
/// Implementations hold no per-call state and may be shared freely between threads.
pub trait ColumnType: Debug + Send + Sync {
    /// The stable identifier this type is registered under
    fn name(&self) -> &'static str;

    /// Convert an application value to its stored form
    fn convert_to_storage(&self, value: &Value) -> Result<Value, ConversionError>;

    /// Convert a stored value back to its application form
    fn convert_from_storage(&self, value: &Value) -> Result<Value, ConversionError>;
}
