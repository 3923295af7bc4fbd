use crate::client::ChallengeClient;
use crate::domain::challenge::wire::StatusResponse;
use crate::domain::progress::wire::UserChallenge;
use crate::domain::verification::wire::{
    ApproverActiveRequest, CreateVerificationRequest, CreateVerificationResponse,
    RequesterActiveRequest, VerificationAction, VerificationRequestRef,
};
use crate::domain::verification::RequestDetails;
use crate::shared::{ChallengeId, PartId, SessionToken, UserId, UserRef, VerificationRequestId};
use crate::store::{settle, StoreResult};

/// Verification requests for completed parts.
#[derive(Debug, Clone)]
pub struct VerificationStore {
    client: ChallengeClient,
}

impl VerificationStore {
    pub fn new(client: ChallengeClient) -> Self {
        Self { client }
    }

    pub async fn create_verification_request(
        &self,
        session: &SessionToken,
        challenge: &ChallengeId,
        part: &PartId,
        requester: &UserId,
        approver: &UserId,
        evidence: &str,
    ) -> StoreResult<CreateVerificationResponse> {
        let request = CreateVerificationRequest {
            session: Some(session.clone()),
            challenge: challenge.clone(),
            part: part.clone(),
            requester: requester.clone(),
            approver: approver.clone(),
            evidence: evidence.to_string(),
        };
        settle(
            "createVerificationRequest",
            self.client.verification().create_request(&request).await,
        )
    }

    pub async fn remove_verification_request(
        &self,
        session: &SessionToken,
        verification_request: &VerificationRequestId,
    ) -> StoreResult<StatusResponse> {
        let request = action(session, verification_request);
        settle(
            "removeVerificationRequest",
            self.client.verification().remove_request(&request).await,
        )
    }

    pub async fn verify(
        &self,
        session: &SessionToken,
        verification_request: &VerificationRequestId,
    ) -> StoreResult<StatusResponse> {
        let request = action(session, verification_request);
        settle("verifyRequest", self.client.verification().verify(&request).await)
    }

    pub async fn get_requester_active_requests(
        &self,
        user: &UserId,
        challenge: &ChallengeId,
    ) -> StoreResult<Vec<RequesterActiveRequest>> {
        let request = UserChallenge {
            user: user.clone(),
            challenge: challenge.clone(),
        };
        settle(
            "getRequesterActiveRequests",
            self.client.verification().get_requester_active(&request).await,
        )
    }

    pub async fn get_approver_active_requests(
        &self,
        user: &UserId,
    ) -> StoreResult<Vec<ApproverActiveRequest>> {
        let request = UserRef::from(user.clone());
        settle(
            "getApproverActiveRequests",
            self.client.verification().get_approver_active(&request).await,
        )
    }

    pub async fn get_request_details(
        &self,
        verification_request: &VerificationRequestId,
    ) -> StoreResult<Vec<RequestDetails>> {
        let request = VerificationRequestRef {
            verification_request: verification_request.clone(),
        };
        settle(
            "getRequestDetails",
            self.client.verification().get_request_details(&request).await,
        )
    }
}

fn action(session: &SessionToken, id: &VerificationRequestId) -> VerificationAction {
    VerificationAction {
        session: Some(session.clone()),
        verification_request: id.clone(),
    }
}
