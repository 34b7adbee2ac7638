//! Working-status derivation.
//!
//! A member is "working" when the current instant, expressed in their zone,
//! falls strictly inside today's shift window. The window is today's date in
//! the member's zone combined with the stored "HH:MM" boundaries.
//!
//! Known limitation: an overnight shift (`end <= start`) never matches within
//! a single calendar day, so such members always read as off-shift.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

use crate::clock::{parse_hhmm, parse_zone, ZoneClock};
use crate::constants::MINUTES_PER_DAY;
use crate::error::DashboardResult;
use crate::models::{TeamMember, WorkingHours};

/// Snapshot of a member's derived state at one instant.
#[derive(Debug, Clone)]
pub struct MemberStatus {
    /// The current instant in the member's zone.
    pub local_time: DateTime<Tz>,
    pub working: bool,
}

/// Horizontal placement of a shift on a 24-hour track, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapBar {
    pub offset_pct: f64,
    pub width_pct: f64,
}

/// Derive a member's local time and working status from `clock`.
pub fn member_status(member: &TeamMember, clock: &impl ZoneClock) -> DashboardResult<MemberStatus> {
    let zone = parse_zone(&member.time_zone)?;
    let now = clock.now(zone);

    let start_time = parse_hhmm(&member.working_hours.start)?;
    let end_time = parse_hhmm(&member.working_hours.end)?;

    let today = now.date_naive();
    let start = clock.combine(today, start_time, zone);
    let end = clock.combine(today, end_time, zone);

    // Strictly exclusive at both boundaries; a boundary that falls in a DST
    // gap leaves the member off-shift for the day.
    let working = match (start, end) {
        (Some(start), Some(end)) => now > start && now < end,
        _ => false,
    };

    Ok(MemberStatus {
        local_time: now,
        working,
    })
}

/// Compute the shift's position on a 24-hour track. Width clamps to zero for
/// overnight windows rather than wrapping past midnight.
pub fn overlap_bar(hours: &WorkingHours) -> DashboardResult<OverlapBar> {
    let start = parse_hhmm(&hours.start)?;
    let end = parse_hhmm(&hours.end)?;

    let start_minutes = minutes_from_midnight(start);
    let duration = (minutes_from_midnight(end) - start_minutes).max(0);

    Ok(OverlapBar {
        offset_pct: start_minutes as f64 / MINUTES_PER_DAY as f64 * 100.0,
        width_pct: duration as f64 / MINUTES_PER_DAY as f64 * 100.0,
    })
}

fn minutes_from_midnight(time: chrono::NaiveTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn member(zone: &str, start: &str, end: &str) -> TeamMember {
        TeamMember::new(1, "Ada", zone, start, end)
    }

    fn clock_at_utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn test_working_inside_window() {
        // 14:00 UTC == 10:00 in New York (EDT): inside 09:00-17:00.
        let clock = clock_at_utc(2024, 6, 15, 14, 0);
        let status = member_status(&member("America/New_York", "09:00", "17:00"), &clock).unwrap();
        assert!(status.working);
        assert_eq!(status.local_time.hour(), 10);
    }

    #[test]
    fn test_not_working_at_exact_end_boundary() {
        // 21:00 UTC == 17:00 in New York exactly: boundary is exclusive.
        let clock = clock_at_utc(2024, 6, 15, 21, 0);
        let status = member_status(&member("America/New_York", "09:00", "17:00"), &clock).unwrap();
        assert!(!status.working);
    }

    #[test]
    fn test_not_working_at_exact_start_boundary() {
        let clock = clock_at_utc(2024, 6, 15, 13, 0); // 09:00 EDT
        let status = member_status(&member("America/New_York", "09:00", "17:00"), &clock).unwrap();
        assert!(!status.working);
    }

    #[test]
    fn test_not_working_outside_window() {
        let clock = clock_at_utc(2024, 6, 15, 2, 0); // 22:00 EDT previous evening
        let status = member_status(&member("America/New_York", "09:00", "17:00"), &clock).unwrap();
        assert!(!status.working);
    }

    #[test]
    fn test_overnight_window_never_matches() {
        // 23:00 Tokyo time sits "inside" a 22:00-06:00 night shift, but the
        // single-day window never matches when end <= start.
        let clock = clock_at_utc(2024, 6, 15, 14, 0); // 23:00 JST
        let status = member_status(&member("Asia/Tokyo", "22:00", "06:00"), &clock).unwrap();
        assert!(!status.working);
    }

    #[test]
    fn test_status_errors_on_unknown_zone() {
        let clock = clock_at_utc(2024, 6, 15, 14, 0);
        assert!(member_status(&member("Nowhere/Void", "09:00", "17:00"), &clock).is_err());
    }

    #[test]
    fn test_overlap_bar_percentages() {
        let bar = overlap_bar(&WorkingHours {
            start: "09:00".to_string(),
            end: "17:00".to_string(),
        })
        .unwrap();

        assert!((bar.offset_pct - 37.5).abs() < 1e-9);
        assert!((bar.width_pct - (480.0 / 1440.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_bar_clamps_overnight_to_zero_width() {
        let bar = overlap_bar(&WorkingHours {
            start: "22:00".to_string(),
            end: "06:00".to_string(),
        })
        .unwrap();

        assert!((bar.width_pct - 0.0).abs() < 1e-9);
        assert!(bar.offset_pct > 90.0);
    }
}
