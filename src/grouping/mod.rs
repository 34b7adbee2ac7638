//! Grouping members by time zone for display.

use std::collections::BTreeMap;

use crate::models::TeamMember;

/// Members sharing one exact time-zone string, in store insertion order.
#[derive(Debug, Clone)]
pub struct ZoneGroup<'a> {
    pub zone: &'a str,
    pub members: Vec<&'a TeamMember>,
}

/// Group members by exact zone string (no normalization). Groups come back
/// sorted lexicographically by zone name; members within a group keep their
/// insertion order.
pub fn group_by_zone(members: &[TeamMember]) -> Vec<ZoneGroup<'_>> {
    let mut grouped: BTreeMap<&str, Vec<&TeamMember>> = BTreeMap::new();

    for member in members {
        grouped.entry(member.time_zone.as_str()).or_default().push(member);
    }

    grouped
        .into_iter()
        .map(|(zone, members)| ZoneGroup { zone, members })
        .collect()
}
