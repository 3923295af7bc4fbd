//! Wire types for `/ChallengeParticipation/*`.

use crate::shared::{ChallengeId, InvitationId, ParticipationId, SessionToken, Status, UserId};
use serde::{Deserialize, Serialize};

// ─── Actions ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvitationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionToken>,
    pub challenge: ChallengeId,
    pub user: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvitationResponse {
    pub invitation: InvitationId,
    pub status: Status,
}

/// `{session, invitation}` — accept or remove an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionToken>,
    pub invitation: InvitationId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptInvitationResponse {
    pub participation: ParticipationId,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionToken>,
    pub participation: ParticipationId,
}

// ─── Queries ─────────────────────────────────────────────────────────────────

/// `{invitation}` — body of `_getInvitation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationQuery {
    pub invitation: InvitationId,
}

/// `{participation}` — body of `_getParticipation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationQuery {
    pub participation: ParticipationId,
}

/// Row of `_getUserInvitations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInvitation {
    pub invitation: InvitationId,
    pub challenge: ChallengeId,
}

/// Row of `_getUserParticipations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserParticipation {
    pub participation: ParticipationId,
    pub challenge: ChallengeId,
}

/// Row of `_getChallengeInvitations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeInvitation {
    pub invitation: InvitationId,
    pub user: UserId,
}

/// Row of `_getChallengeParticipations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeParticipant {
    pub participation: ParticipationId,
    pub user: UserId,
}

/// Row of `_getInvitation` / `_getParticipation`: who and which challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationTarget {
    pub user: UserId,
    pub challenge: ChallengeId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_invitation_request_shape() {
        let req = CreateInvitationRequest {
            session: None,
            challenge: ChallengeId::from("c1"),
            user: UserId::from("u2"),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"challenge": "c1", "user": "u2"})
        );
    }

    #[test]
    fn test_accept_response() {
        let resp: AcceptInvitationResponse =
            serde_json::from_value(json!({"participation": "p1", "status": "ok"})).unwrap();
        assert_eq!(resp.participation.as_str(), "p1");
        assert!(resp.status.is_ok());
    }

    #[test]
    fn test_target_rows() {
        let rows: Vec<ParticipationTarget> =
            serde_json::from_value(json!([{"user": "u1", "challenge": "c1"}])).unwrap();
        assert_eq!(rows[0].challenge, ChallengeId::from("c1"));
    }
}
