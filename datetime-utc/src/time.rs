//! Instant-with-zone values and the storage format

mod zone;
mod zoned;

pub use zone::{Zone, ZoneParseError};
pub use zoned::{Representation, ZonedDateTime};

use chrono::{Datelike, DateTime, NaiveDateTime, Timelike, Utc};

/// The `chrono` pattern of a storage string: wall-clock UTC without fraction or zone.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// [`STORAGE_FORMAT`] as reported to humans in diagnostics.
pub const STORAGE_FORMAT_HINT: &str = "YYYY-MM-DD HH:MM:SS";

const STORAGE_LEN: usize = 19;

const MAX_STORAGE_YEAR: i32 = 9999;

/// Render a UTC instant as a storage string.
///
/// Sub-second precision is dropped and a leap second renders as `:59`. Returns `None`
/// for years outside 0000 to 9999, which have no four-digit rendering.
pub fn format_storage(instant: &DateTime<Utc>) -> Option<String> {
    if !(0..=MAX_STORAGE_YEAR).contains(&instant.year()) {
        return None;
    }

    let whole_second = instant.with_nanosecond(0)?;
    Some(whole_second.format(STORAGE_FORMAT).to_string())
}

/// Parse a storage string into a UTC instant.
///
/// The zone is always attached explicitly; neither `TZ` nor [`chrono::Local`] is
/// consulted. Returns `None` unless the input matches the format byte for byte and
/// every calendar field is in range.
pub fn parse_storage(value: &str) -> Option<DateTime<Utc>> {
    if !has_storage_shape(value.as_bytes()) {
        return None;
    }

    let naive = NaiveDateTime::parse_from_str(value, STORAGE_FORMAT).ok()?;

    // chrono accepts `:60` as a leap second
    if naive.nanosecond() >= 1_000_000_000 {
        return None;
    }

    Some(naive.and_utc())
}

fn has_storage_shape(bytes: &[u8]) -> bool {
    if bytes.len() != STORAGE_LEN {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn it_parses_a_well_formed_storage_string() {
        let parsed = parse_storage("2017-09-17 20:30:45").unwrap();
        let expected = NaiveDate::from_ymd_opt(2017, 9, 17)
            .unwrap()
            .and_hms_opt(20, 30, 45)
            .unwrap()
            .and_utc();

        assert_eq!(parsed, expected);
    }

    #[test]
    fn it_rejects_strings_that_are_not_exactly_the_format() {
        for input in [
            "",
            "invalid string",
            "2017-9-17 20:30:45",
            "2017-09-17T20:30:45",
            "2017-09-17 20:30:45Z",
            "2017-09-17 20:30:45.5",
            " 2017-09-17 20:30:45",
            "2017-09-17 20:30",
            "+017-09-17 20:30:45",
        ] {
            assert_eq!(parse_storage(input), None, "{input:?} should not parse");
        }
    }

    #[test]
    fn it_rejects_out_of_range_fields() {
        for input in [
            "2017-13-01 00:00:00",
            "2017-00-01 00:00:00",
            "2017-02-30 00:00:00",
            "2017-09-17 24:00:00",
            "2017-09-17 23:60:00",
            "2016-12-31 23:59:60",
        ] {
            assert_eq!(parse_storage(input), None, "{input:?} should not parse");
        }
    }

    #[test]
    fn it_drops_fractional_seconds_when_formatting() {
        let instant = NaiveDate::from_ymd_opt(2020, 2, 29)
            .unwrap()
            .and_hms_milli_opt(1, 2, 3, 999)
            .unwrap()
            .and_utc();

        assert_eq!(format_storage(&instant).as_deref(), Some("2020-02-29 01:02:03"));
    }

    #[test]
    fn it_formats_a_leap_second_as_the_second_before() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_000)
            .unwrap()
            .and_utc();

        let stored = format_storage(&leap).unwrap();
        assert_eq!(stored, "2016-12-31 23:59:59");
        assert!(parse_storage(&stored).is_some());
    }

    #[test]
    fn it_only_formats_four_digit_years() {
        let at_year = |year| {
            NaiveDate::from_ymd_opt(year, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc()
        };

        assert_eq!(format_storage(&at_year(0)).as_deref(), Some("0000-01-01 00:00:00"));
        assert_eq!(format_storage(&at_year(9999)).as_deref(), Some("9999-01-01 00:00:00"));
        assert_eq!(format_storage(&at_year(10000)), None);
        assert_eq!(format_storage(&at_year(-1)), None);
    }
}
