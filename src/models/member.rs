use serde::{Deserialize, Serialize};

/// Wall-clock shift boundaries as "HH:MM" strings, no date attached.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TeamMember {
    /// Creation timestamp in milliseconds; unique for the member's lifetime.
    pub id: i64,
    pub name: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
    #[serde(rename = "workingHours")]
    pub working_hours: WorkingHours,
    /// Inline `data:<mime>;base64,...` image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// The full team roster, insertion-ordered. Owned exclusively by the store;
/// the only external representation is the serialized snapshot.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct TeamState {
    #[serde(rename = "teamMembers")]
    pub team_members: Vec<TeamMember>,
}

impl TeamMember {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        time_zone: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            time_zone: time_zone.into(),
            working_hours: WorkingHours {
                start: start.into(),
                end: end.into(),
            },
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = avatar;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_serializes_with_camel_case_fields() {
        let member = TeamMember::new(1718000000000, "Ada", "Europe/London", "09:00", "17:00");
        let json = serde_json::to_value(&member).unwrap();

        assert_eq!(json["timeZone"], "Europe/London");
        assert_eq!(json["workingHours"]["start"], "09:00");
        assert_eq!(json["workingHours"]["end"], "17:00");
        // Absent avatar is omitted entirely, matching the original snapshot shape.
        assert!(json.get("avatar").is_none());
    }

    #[test]
    fn test_member_roundtrip_with_avatar() {
        let member = TeamMember::new(42, "Lin", "Asia/Tokyo", "08:30", "16:30")
            .with_avatar(Some("data:image/png;base64,aGk=".to_string()));

        let json = serde_json::to_string(&member).unwrap();
        let back: TeamMember = serde_json::from_str(&json).unwrap();
        assert_eq!(back, member);
    }

    #[test]
    fn test_deserializes_original_snapshot_shape() {
        let json = r#"{
            "id": 1739000000001,
            "name": "Sam",
            "timeZone": "America/New_York",
            "workingHours": { "start": "09:00", "end": "17:00" }
        }"#;

        let member: TeamMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.name, "Sam");
        assert_eq!(member.time_zone, "America/New_York");
        assert!(member.avatar.is_none());
    }
}
