use crate::time::{Zone, ZonedDateTime};
use chrono::NaiveDateTime;
use chrono_tz::Tz;

pub(crate) const MOSCOW: Tz = Tz::Europe__Moscow;
pub(crate) const DENVER: Tz = Tz::America__Denver;

pub(crate) fn wall_clock(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// `value` read in `zone`, tagged immutable.
pub(crate) fn immutable_at(value: &str, zone: impl Into<Zone>) -> ZonedDateTime {
    ZonedDateTime::immutable(wall_clock(value), zone).unwrap()
}

/// `value` read in `zone`, tagged mutable.
pub(crate) fn mutable_at(value: &str, zone: impl Into<Zone>) -> ZonedDateTime {
    ZonedDateTime::mutable(wall_clock(value), zone).unwrap()
}
