use crate::time::{Representation, Zone, ZonedDateTime};
use chrono::{DateTime, FixedOffset, Utc};
use proptest::{prelude::*, sample};

/// First second of year 1000.
const MIN_STORABLE_SECS: i64 = -30_610_224_000;

/// Last second of year 9999.
const MAX_STORABLE_SECS: i64 = 253_402_300_799;

/// Largest offset any zone has used, in seconds.
const MAX_OFFSET_SECS: i32 = 14 * 3600;

/// Any zone: UTC, any IANA zone, or a fixed offset of up to ±14 hours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SomeZone(pub Zone);

impl Arbitrary for SomeZone {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Zone::Utc),
            sample::select(chrono_tz::TZ_VARIANTS.to_vec()).prop_map(Zone::Named),
            (-MAX_OFFSET_SECS..=MAX_OFFSET_SECS)
                .prop_filter_map("offset out of range", |secs| {
                    FixedOffset::east_opt(secs).map(Zone::Fixed)
                }),
        ]
        .prop_map(SomeZone)
        .boxed()
    }
}

/// A whole-second instant whose UTC year has exactly four digits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SomeStorableInstant(pub DateTime<Utc>);

impl Arbitrary for SomeStorableInstant {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (MIN_STORABLE_SECS..=MAX_STORABLE_SECS)
            .prop_filter_map("timestamp out of range", |secs| {
                DateTime::from_timestamp(secs, 0)
            })
            .prop_map(SomeStorableInstant)
            .boxed()
    }
}

impl Arbitrary for Representation {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Representation::Immutable), Just(Representation::Mutable)].boxed()
    }
}

/// A storable instant in any zone, with any representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SomeZonedDateTime(pub ZonedDateTime);

impl Arbitrary for SomeZonedDateTime {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            any::<SomeStorableInstant>(),
            any::<SomeZone>(),
            any::<Representation>(),
        )
            .prop_map(|(SomeStorableInstant(instant), SomeZone(zone), representation)| {
                SomeZonedDateTime(ZonedDateTime::from_utc(instant, representation).with_zone(zone))
            })
            .boxed()
    }
}
