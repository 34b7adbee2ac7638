//! Narrow seam over the time-zone library.
//!
//! Everything that touches zone arithmetic goes through [`ZoneClock`] and
//! [`parse_zone`], so the underlying library (chrono-tz) can be swapped
//! without touching derivation or rendering code.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{DashboardError, DashboardResult};

/// Look up an IANA zone identifier such as "America/New_York".
pub fn parse_zone(zone: &str) -> DashboardResult<Tz> {
    Tz::from_str(zone).map_err(|_| DashboardError::InvalidZone(zone.to_string()))
}

/// Parse a wall-clock "HH:MM" string.
pub fn parse_hhmm(time: &str) -> DashboardResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| DashboardError::InvalidTime(time.to_string()))
}

/// Canonical list of zone identifiers, as shipped by the tz database.
pub fn zone_names() -> impl Iterator<Item = &'static str> {
    chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name())
}

pub trait ZoneClock {
    /// The current instant expressed in `zone`.
    fn now(&self, zone: Tz) -> DateTime<Tz>;

    /// Interpret a wall-clock time on a date in `zone`. Returns `None` when
    /// that local time does not exist (DST spring-forward gap); an ambiguous
    /// local time (fall-back) resolves to the earlier instant.
    fn combine(&self, date: NaiveDate, time: NaiveTime, zone: Tz) -> Option<DateTime<Tz>> {
        zone.from_local_datetime(&date.and_time(time)).earliest()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ZoneClock for SystemClock {
    fn now(&self, zone: Tz) -> DateTime<Tz> {
        Utc::now().with_timezone(&zone)
    }
}

/// Clock pinned to a fixed instant, for tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl ZoneClock for FixedClock {
    fn now(&self, zone: Tz) -> DateTime<Tz> {
        self.instant.with_timezone(&zone)
    }
}
