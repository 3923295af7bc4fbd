//! Wire types for `/ChallengeVerification/*`.

use crate::shared::{
    ChallengeId, PartId, SessionToken, Status, UserId, VerificationRequestId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVerificationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionToken>,
    pub challenge: ChallengeId,
    pub part: PartId,
    pub requester: UserId,
    pub approver: UserId,
    /// Link or description of the proof.
    pub evidence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerificationResponse {
    pub verification_request: VerificationRequestId,
    pub status: Status,
}

/// `{session, verificationRequest}` — remove or verify a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionToken>,
    pub verification_request: VerificationRequestId,
}

/// `{verificationRequest}` — body of `_getRequestDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequestRef {
    pub verification_request: VerificationRequestId,
}

/// Row of `_getRequesterActiveRequests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterActiveRequest {
    pub verification_request: VerificationRequestId,
    pub part: PartId,
}

/// Row of `_getApproverActiveRequests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproverActiveRequest {
    pub verification_request: VerificationRequestId,
    pub part: PartId,
    pub requester: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verification_action_camel_case() {
        let req = VerificationAction {
            session: Some(SessionToken::from("s1")),
            verification_request: VerificationRequestId::from("v1"),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"session": "s1", "verificationRequest": "v1"})
        );
    }

    #[test]
    fn test_approver_rows() {
        let rows: Vec<ApproverActiveRequest> = serde_json::from_value(json!([
            {"verificationRequest": "v1", "part": "p1", "requester": "u1"}
        ]))
        .unwrap();
        assert_eq!(rows[0].requester, UserId::from("u1"));
    }
}
