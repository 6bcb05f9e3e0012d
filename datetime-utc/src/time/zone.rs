//! The zone attached to an instant.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The zone used to render an instant as wall-clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Coordinated Universal Time.
    Utc,

    /// An [IANA](https://www.iana.org/time-zones) zone such as `Europe/Moscow`.
    Named(Tz),

    /// A fixed offset from UTC with no zone rules attached, such as `+03:00`.
    Fixed(FixedOffset),
}

/// An error expressing that a string names no known zone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown time zone: {input:?}")]
pub struct ZoneParseError {
    /// The rejected input.
    pub input: String,
}

impl Zone {
    /// Whether this zone *is* UTC, as opposed to merely having a zero offset.
    ///
    /// `+00:00` and `Europe/London` in winter are not UTC.
    pub fn is_utc(&self) -> bool {
        match self {
            Zone::Utc => true,
            Zone::Named(tz) => tz.name() == "UTC",
            Zone::Fixed(_) => false,
        }
    }

    /// The offset from UTC this zone has at `instant`.
    pub fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Utc => Utc.fix(),
            Zone::Named(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    pub(crate) fn wall_clock(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            Zone::Utc => instant.naive_utc(),
            Zone::Named(tz) => instant.with_timezone(tz).naive_local(),
            Zone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }

    /// Resolve wall-clock fields in this zone. Folds resolve to the earlier instant,
    /// gaps resolve to nothing.
    pub(crate) fn resolve(&self, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Utc => Some(local.and_utc()),
            Zone::Named(tz) => tz
                .from_local_datetime(local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Fixed(offset) => offset
                .from_local_datetime(local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl From<Tz> for Zone {
    fn from(tz: Tz) -> Self {
        Zone::Named(tz)
    }
}

impl From<FixedOffset> for Zone {
    fn from(offset: FixedOffset) -> Self {
        Zone::Fixed(offset)
    }
}

impl FromStr for Zone {
    type Err = ZoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "UTC" {
            return Ok(Zone::Utc);
        }

        if let Ok(tz) = s.parse::<Tz>() {
            return Ok(Zone::Named(tz));
        }

        s.parse::<FixedOffset>()
            .map(Zone::Fixed)
            .map_err(|_| ZoneParseError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Utc => f.write_str("UTC"),
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
