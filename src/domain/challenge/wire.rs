//! Wire types for `/ChallengeDefinition/*`.

use super::ExerciseInfo;
use crate::shared::{ChallengeId, SessionToken, Status, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `/ChallengeDefinition/createChallenge`.
///
/// `session` may be left `None`; the transport then fills it from the
/// session context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChallengeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionToken>,
    pub exercise: String,
    pub days_of_week: u32,
    pub weeks: u32,
    pub level: u32,
    pub info: ExerciseInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChallengeResponse {
    pub challenge: ChallengeId,
    pub status: Status,
}

/// `{session, challenge}` — delete, open, and close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionToken>,
    pub challenge: ChallengeId,
}

/// `{status}` returned by challenge, invitation, and verification mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsOpenResponse {
    pub is_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorResponse {
    pub creator: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeNameResponse {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCreatedResponse {
    pub date_created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_without_session_omits_field() {
        let req = CreateChallengeRequest {
            session: None,
            exercise: "pushups".into(),
            days_of_week: 3,
            weeks: 4,
            level: 1,
            info: ExerciseInfo::Anaerobic {
                weight: None,
                sets: 3,
                reps: 10,
            },
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("session").is_none());
        assert_eq!(value["daysOfWeek"], 3);
        assert_eq!(value["info"]["_type"], "AnaerobicInfo");
    }

    #[test]
    fn test_challenge_action_with_session() {
        let req = ChallengeAction {
            session: Some(SessionToken::from("s1")),
            challenge: ChallengeId::from("c1"),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"session": "s1", "challenge": "c1"})
        );
    }

    #[test]
    fn test_date_created_response() {
        let resp: DateCreatedResponse =
            serde_json::from_str(r#"{"dateCreated":"2025-11-02T08:15:00Z"}"#).unwrap();
        assert_eq!(
            crate::shared::format_date(&resp.date_created),
            "November 2, 2025"
        );
    }
}
