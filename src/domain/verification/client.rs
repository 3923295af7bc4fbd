//! Verification sub-client — submit, approve, and inspect verification requests.

use crate::client::ChallengeClient;
use crate::domain::challenge::wire::StatusResponse;
use crate::domain::progress::wire::UserChallenge;
use crate::domain::verification::wire::{
    ApproverActiveRequest, CreateVerificationRequest, CreateVerificationResponse,
    RequesterActiveRequest, VerificationAction, VerificationRequestRef,
};
use crate::domain::verification::RequestDetails;
use crate::error::SdkError;
use crate::shared::UserRef;

/// Sub-client for `/ChallengeVerification/*`.
pub struct Verification<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Verification<'a> {
    // ── Actions ──────────────────────────────────────────────────────────

    pub async fn create_request(
        &self,
        request: &CreateVerificationRequest,
    ) -> Result<CreateVerificationResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeVerification/createVerificationRequest", request)
            .await
    }

    pub async fn remove_request(
        &self,
        request: &VerificationAction,
    ) -> Result<StatusResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeVerification/removeVerificationRequest", request)
            .await
    }

    /// Approve a request. Only its approver may do this.
    pub async fn verify(&self, request: &VerificationAction) -> Result<StatusResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeVerification/verifyRequest", request)
            .await
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Open requests `user` submitted in `challenge`.
    pub async fn get_requester_active(
        &self,
        request: &UserChallenge,
    ) -> Result<Vec<RequesterActiveRequest>, SdkError> {
        self.client
            .http
            .post("/ChallengeVerification/_getRequesterActiveRequests", request)
            .await
    }

    /// Open requests waiting on `user` to approve.
    pub async fn get_approver_active(
        &self,
        request: &UserRef,
    ) -> Result<Vec<ApproverActiveRequest>, SdkError> {
        self.client
            .http
            .post("/ChallengeVerification/_getApproverActiveRequests", request)
            .await
    }

    pub async fn get_request_details(
        &self,
        request: &VerificationRequestRef,
    ) -> Result<Vec<RequestDetails>, SdkError> {
        self.client
            .http
            .post("/ChallengeVerification/_getRequestDetails", request)
            .await
    }
}
