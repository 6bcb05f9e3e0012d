use super::ColumnType;
use crate::{
    error::ConversionError,
    time::{format_storage, parse_storage, Representation, ZonedDateTime, STORAGE_FORMAT_HINT},
    value::{datetime_type_name, Value},
};
use log::{debug, trace};

/// A datetime column that always stores UTC.
///
/// On the way to storage the value is converted to UTC (the instant is kept, the
/// wall-clock fields change) and rendered as `YYYY-MM-DD HH:MM:SS`. On the way back
/// strings are read as UTC wall-clock time, and datetimes in any other zone are
/// converted to UTC.
///
/// Each instance is specialized for one [`Representation`] and rejects datetimes of
/// the other one on the way to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtcDateTimeType {
    representation: Representation,
}

impl UtcDateTimeType {
    /// Registry name of the type specialized for immutable datetimes.
    pub const IMMUTABLE_TYPE_NAME: &'static str = "datetime_utc_immutable";

    /// Registry name of the type specialized for mutable datetimes.
    pub const MUTABLE_TYPE_NAME: &'static str = "datetime_utc";

    /// A type specialized for `representation`.
    pub fn new(representation: Representation) -> Self {
        UtcDateTimeType { representation }
    }

    /// The type registered as [`IMMUTABLE_TYPE_NAME`][Self::IMMUTABLE_TYPE_NAME].
    pub fn immutable() -> Self {
        Self::new(Representation::Immutable)
    }

    /// The type registered as [`MUTABLE_TYPE_NAME`][Self::MUTABLE_TYPE_NAME].
    pub fn mutable() -> Self {
        Self::new(Representation::Mutable)
    }

    /// The datetime representation this type accepts and produces.
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// The registry name of this type.
    pub fn name(&self) -> &'static str {
        match self.representation {
            Representation::Immutable => Self::IMMUTABLE_TYPE_NAME,
            Representation::Mutable => Self::MUTABLE_TYPE_NAME,
        }
    }

    /// Convert an application value to a storage string.
    ///
    /// # Errors
    ///
    /// * [`ConversionError::UnsupportedToStorage`] if `value` is neither null nor a
    ///   datetime of this type's representation, or is a datetime whose UTC year falls
    ///   outside 0000 to 9999
    pub fn to_storage(&self, value: &Value) -> Result<Option<String>, ConversionError> {
        match value {
            Value::Null => Ok(None),
            Value::DateTime(datetime) if datetime.representation() == self.representation => {
                match format_storage(&datetime.instant()) {
                    Some(stored) => Ok(Some(stored)),
                    None => {
                        debug!("{} has no storage rendering for {}", datetime, self.name());
                        Err(self.unsupported_to_storage(value))
                    }
                }
            }
            other => Err(self.unsupported_to_storage(other)),
        }
    }

    fn unsupported_to_storage(&self, value: &Value) -> ConversionError {
        ConversionError::UnsupportedToStorage {
            value_type: value.type_name().to_string(),
            type_name: self.name(),
            expected: vec!["null", datetime_type_name(self.representation)],
        }
    }

    /// Convert a stored value to a UTC datetime.
    ///
    /// A datetime that is already in UTC and of this type's representation is returned
    /// as is; any other datetime is converted to UTC.
    ///
    /// # Errors
    ///
    /// * [`ConversionError::InvalidFormat`] if `value` is a string that is not a
    ///   storage string
    /// * [`ConversionError::UnsupportedFromStorage`] if `value` is neither null, a
    ///   string nor a datetime
    #[allow(clippy::wrong_self_convention)]
    pub fn from_storage(&self, value: &Value) -> Result<Option<ZonedDateTime>, ConversionError> {
        match value {
            Value::Null => Ok(None),
            Value::DateTime(datetime)
                if datetime.is_utc() && datetime.representation() == self.representation =>
            {
                trace!("{} is already in UTC", datetime);
                Ok(Some(*datetime))
            }
            Value::DateTime(datetime) => {
                debug!("Converting {} to UTC for {}", datetime, self.name());
                Ok(Some(ZonedDateTime::from_utc(
                    datetime.instant(),
                    self.representation,
                )))
            }
            Value::String(string) => self.parse(string).map(Some),
            other => Err(ConversionError::UnsupportedFromStorage {
                value_type: other.type_name().to_string(),
                type_name: self.name(),
            }),
        }
    }

    /// Parse a storage string as UTC wall-clock time.
    ///
    /// # Errors
    ///
    /// * [`ConversionError::InvalidFormat`] if `value` does not match
    ///   `YYYY-MM-DD HH:MM:SS` exactly or names a calendar field out of range
    pub fn parse(&self, value: &str) -> Result<ZonedDateTime, ConversionError> {
        match parse_storage(value) {
            Some(instant) => Ok(ZonedDateTime::from_utc(instant, self.representation)),
            None => {
                debug!("Rejected stored value {:?} for {}", value, self.name());
                Err(ConversionError::InvalidFormat {
                    value: value.to_string(),
                    type_name: self.name(),
                    expected_format: STORAGE_FORMAT_HINT,
                })
            }
        }
    }
}

impl Default for UtcDateTimeType {
    fn default() -> Self {
        Self::immutable()
    }
}

impl ColumnType for UtcDateTimeType {
    fn name(&self) -> &'static str {
        UtcDateTimeType::name(self)
    }

    fn convert_to_storage(&self, value: &Value) -> Result<Value, ConversionError> {
        Ok(self.to_storage(value)?.into())
    }

    fn convert_from_storage(&self, value: &Value) -> Result<Value, ConversionError> {
        Ok(self.from_storage(value)?.into())
    }
}
