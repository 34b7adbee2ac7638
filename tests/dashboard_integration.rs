use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use teamzone::clock::FixedClock;
use teamzone::grouping::group_by_zone;
use teamzone::schedule::member_status;
use teamzone::{TeamMember, TeamStore};

fn member(id: i64, name: &str, zone: &str, start: &str, end: &str) -> TeamMember {
    TeamMember::new(id, name, zone, start, end)
}

#[test]
fn test_roster_survives_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("team.json");

    {
        let mut store = TeamStore::load(&path).unwrap();
        store
            .add_member(member(1, "Ada", "Europe/London", "09:00", "17:00"))
            .unwrap();
        store
            .add_member(member(2, "Lin", "Asia/Tokyo", "08:30", "16:30"))
            .unwrap();
        store
            .add_member(member(3, "Sam", "America/New_York", "09:00", "17:00"))
            .unwrap();
    }

    let store = TeamStore::load(&path).unwrap();
    assert_eq!(store.len(), 3);

    let names: Vec<&str> = store.members().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Lin", "Sam"]);
}

#[test]
fn test_removal_is_persisted_and_order_preserving() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("team.json");

    let mut store = TeamStore::load(&path).unwrap();
    for (id, name) in [(1, "Ada"), (2, "Lin"), (3, "Sam")] {
        store
            .add_member(member(id, name, "Europe/London", "09:00", "17:00"))
            .unwrap();
    }
    store.remove_member(2).unwrap();

    let reloaded = TeamStore::load(&path).unwrap();
    let ids: Vec<i64> = reloaded.members().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_grouped_dashboard_with_derived_statuses() {
    let dir = tempdir().unwrap();
    let mut store = TeamStore::load(dir.path().join("team.json")).unwrap();

    store
        .add_member(member(1, "Lin", "Asia/Tokyo", "09:00", "17:00"))
        .unwrap();
    store
        .add_member(member(2, "Sam", "America/New_York", "09:00", "17:00"))
        .unwrap();
    store
        .add_member(member(3, "Kai", "America/New_York", "12:00", "20:00"))
        .unwrap();

    // 14:00 UTC on 2024-06-15: 10:00 in New York, 23:00 in Tokyo.
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 15, 14, 0, 0).unwrap());

    let groups = group_by_zone(store.members());
    let zones: Vec<&str> = groups.iter().map(|g| g.zone).collect();
    assert_eq!(zones, vec!["America/New_York", "Asia/Tokyo"]);

    let ny = &groups[0];
    let ny_names: Vec<&str> = ny.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(ny_names, vec!["Sam", "Kai"]);

    let sam = member_status(ny.members[0], &clock).unwrap();
    assert!(sam.working); // 10:00 inside 09:00-17:00

    let kai = member_status(ny.members[1], &clock).unwrap();
    assert!(!kai.working); // 10:00 before a 12:00 start

    let lin = member_status(groups[1].members[0], &clock).unwrap();
    assert!(!lin.working); // 23:00 in Tokyo is well past 17:00
}

#[test]
fn test_exact_end_of_shift_reads_off_shift() {
    let dir = tempdir().unwrap();
    let mut store = TeamStore::load(dir.path().join("team.json")).unwrap();
    store
        .add_member(member(1, "Sam", "America/New_York", "09:00", "17:00"))
        .unwrap();

    // 21:00 UTC == 17:00 EDT exactly.
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 15, 21, 0, 0).unwrap());
    let status = member_status(&store.members()[0], &clock).unwrap();
    assert!(!status.working);
}

#[test]
fn test_snapshot_is_a_plain_json_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("team.json");

    let mut store = TeamStore::load(&path).unwrap();
    store
        .add_member(member(1, "Ada", "Europe/London", "09:00", "17:00"))
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().expect("snapshot should be a JSON array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["timeZone"], "Europe/London");
}
