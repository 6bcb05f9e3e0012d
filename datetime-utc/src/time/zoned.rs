//! An instant together with the zone it is rendered in.

use super::Zone;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Which concrete representation a [`ZonedDateTime`] was produced as.
///
/// Application code that hands out datetimes for in-place modification tags them
/// [`Mutable`][Representation::Mutable]; everything else is
/// [`Immutable`][Representation::Immutable]. The tag only records provenance: a
/// [`ZonedDateTime`] itself never changes once built. Column types are specialized
/// for one representation and refuse the other.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Representation {
    /// Produced by code that never modifies a datetime after creating it.
    #[default]
    Immutable,

    /// Produced by code that may modify a datetime in place.
    Mutable,
}

/// A point in time plus the zone used to render it as wall-clock fields.
///
/// Two values are equal when they denote the same absolute instant, whatever zone or
/// representation they carry. Compare [`zone`][ZonedDateTime::zone] and
/// [`representation`][ZonedDateTime::representation] explicitly where those matter.
#[derive(Debug, Copy, Clone)]
pub struct ZonedDateTime {
    instant: DateTime<Utc>,
    zone: Zone,
    representation: Representation,
}

impl ZonedDateTime {
    /// Build a value from wall-clock fields in `zone`.
    ///
    /// Returns `None` if `local` does not exist in `zone` (a daylight-saving gap).
    /// Ambiguous wall-clock times resolve to the earlier instant.
    pub fn from_local(
        local: NaiveDateTime,
        zone: impl Into<Zone>,
        representation: Representation,
    ) -> Option<Self> {
        let zone = zone.into();
        zone.resolve(&local).map(|instant| ZonedDateTime {
            instant,
            zone,
            representation,
        })
    }

    /// Shorthand for [`from_local`][Self::from_local] with [`Representation::Immutable`].
    pub fn immutable(local: NaiveDateTime, zone: impl Into<Zone>) -> Option<Self> {
        Self::from_local(local, zone, Representation::Immutable)
    }

    /// Shorthand for [`from_local`][Self::from_local] with [`Representation::Mutable`].
    pub fn mutable(local: NaiveDateTime, zone: impl Into<Zone>) -> Option<Self> {
        Self::from_local(local, zone, Representation::Mutable)
    }

    /// Attach UTC to an instant.
    pub fn from_utc(instant: DateTime<Utc>, representation: Representation) -> Self {
        ZonedDateTime {
            instant,
            zone: Zone::Utc,
            representation,
        }
    }

    /// The absolute instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The attached zone.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The provenance tag.
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Wall-clock fields in the attached zone.
    pub fn naive_local(&self) -> NaiveDateTime {
        self.zone.wall_clock(&self.instant)
    }

    /// Whether the attached zone is UTC.
    pub fn is_utc(&self) -> bool {
        self.zone.is_utc()
    }

    /// The same instant rendered in `zone`.
    pub fn with_zone(&self, zone: impl Into<Zone>) -> Self {
        ZonedDateTime {
            zone: zone.into(),
            ..*self
        }
    }

    /// The same instant with a different provenance tag.
    pub fn with_representation(&self, representation: Representation) -> Self {
        ZonedDateTime {
            representation,
            ..*self
        }
    }

    /// The same instant rendered in UTC.
    pub fn to_utc(self) -> Self {
        self.with_zone(Zone::Utc)
    }
}

impl PartialEq for ZonedDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for ZonedDateTime {}

impl From<ZonedDateTime> for DateTime<Utc> {
    fn from(value: ZonedDateTime) -> Self {
        value.instant
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.naive_local().format(super::STORAGE_FORMAT),
            self.zone
        )
    }
}
