//! Challenge verification domain — proof that a user completed a part.
//!
//! A requester submits evidence for one part to an approver; the approver
//! verifies it, which marks the part completed and awards points.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::serde_util::flexible_bool;
use crate::shared::{ChallengeId, PartId, UserId};
use serde::{Deserialize, Serialize};

pub use wire::{
    ApproverActiveRequest, CreateVerificationRequest, CreateVerificationResponse,
    RequesterActiveRequest, VerificationAction, VerificationRequestRef,
};

/// One row of `/ChallengeVerification/_getRequestDetails`.
///
/// `approved` arrives as a JSON bool or as `"true"`/`"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDetails {
    pub part: PartId,
    pub evidence: String,
    pub challenge: ChallengeId,
    pub approver: UserId,
    pub requester: UserId,
    #[serde(with = "flexible_bool")]
    pub approved: bool,
}

impl RequestDetails {
    pub fn is_pending(&self) -> bool {
        !self.approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(approved: serde_json::Value) -> serde_json::Value {
        json!({
            "part": "p1",
            "evidence": "https://example.com/proof.jpg",
            "challenge": "c1",
            "approver": "u2",
            "requester": "u1",
            "approved": approved
        })
    }

    #[test]
    fn test_approved_accepts_bool() {
        let details: RequestDetails = serde_json::from_value(row(json!(true))).unwrap();
        assert!(details.approved);
    }

    #[test]
    fn test_approved_accepts_string() {
        let details: RequestDetails = serde_json::from_value(row(json!("false"))).unwrap();
        assert!(details.is_pending());
        let out = serde_json::to_value(&details).unwrap();
        assert_eq!(out["approved"], json!(false));
    }

    #[test]
    fn test_approved_rejects_garbage() {
        assert!(serde_json::from_value::<RequestDetails>(row(json!("maybe"))).is_err());
    }
}
