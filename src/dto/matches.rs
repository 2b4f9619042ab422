use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::{MatchVisibility, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinDecision {
    Approved,
    Rejected,
}

/// Host's answer to a join request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewJoinRequestDto {
    pub decision: JoinDecision,
    #[serde(default)]
    pub assigned_team: Option<Team>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SwitchTeamDto {
    pub team: Team,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchDto {
    pub facility_id: Uuid,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub visibility: MatchVisibility,
    #[validate(range(min = 2, max = 50))]
    pub max_players: i32,
    /// Side the host plays on; A when omitted
    #[serde(default)]
    pub team: Option<Team>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("A", Team::A)]
    #[case("B", Team::B)]
    fn switch_team_accepts_both_sides(#[case] raw: &str, #[case] expected: Team) {
        let dto: SwitchTeamDto = serde_json::from_value(json!({ "team": raw })).unwrap();
        assert_eq!(dto.team, expected);
    }

    #[rstest]
    #[case(json!({ "team": "C" }))]
    #[case(json!({ "team": "" }))]
    #[case(json!({ "team": "a" }))]
    #[case(json!({}))]
    fn switch_team_rejects_anything_else(#[case] body: serde_json::Value) {
        assert!(serde_json::from_value::<SwitchTeamDto>(body).is_err());
    }

    #[test]
    fn review_with_optional_team() {
        let dto: ReviewJoinRequestDto =
            serde_json::from_value(json!({ "decision": "approved", "assignedTeam": "B" })).unwrap();
        assert_eq!(dto.decision, JoinDecision::Approved);
        assert_eq!(dto.assigned_team, Some(Team::B));

        let dto: ReviewJoinRequestDto = serde_json::from_value(json!({ "decision": "rejected" })).unwrap();
        assert_eq!(dto.decision, JoinDecision::Rejected);
        assert_eq!(dto.assigned_team, None);
    }

    #[test]
    fn review_rejects_unknown_decision_or_team() {
        assert!(serde_json::from_value::<ReviewJoinRequestDto>(json!({ "decision": "maybe" })).is_err());
        assert!(serde_json::from_value::<ReviewJoinRequestDto>(json!({ "decision": "approved", "assignedTeam": "C" }))
            .is_err());
        assert!(serde_json::from_value::<ReviewJoinRequestDto>(json!({})).is_err());
    }

    #[test]
    fn create_match_bounds_player_count() {
        let dto: CreateMatchDto = serde_json::from_value(json!({
            "facilityId": Uuid::new_v4(),
            "startsAt": "2024-05-01T18:00:00Z",
            "maxPlayers": 1
        }))
        .unwrap();
        assert_eq!(dto.visibility, MatchVisibility::Public);
        assert!(dto.validate().is_err());
    }
}
