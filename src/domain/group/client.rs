//! Groups sub-client — create, join, moderate, and inspect groups.

use crate::client::ChallengeClient;
use crate::domain::group::wire::{
    CreateGroupRequest, CreateGroupResponse, GroupRequestsResponse, GroupsResponse,
    IsPrivateResponse, LeaderResponse, MembersResponse, MembershipRequestRef, NameResponse,
    RequestDetailsResponse, RequestMembershipResponse, UserGroup, UserRequestsResponse,
};
use crate::error::SdkError;
use crate::shared::{Empty, GroupRef, UserRef};

/// Sub-client for `/Group/*`.
pub struct Groups<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Groups<'a> {
    // ── Actions ──────────────────────────────────────────────────────────

    pub async fn create(
        &self,
        request: &CreateGroupRequest,
    ) -> Result<CreateGroupResponse, SdkError> {
        self.client.http.post("/Group/create", request).await
    }

    /// Ask to join a group.
    pub async fn request(&self, request: &UserGroup) -> Result<RequestMembershipResponse, SdkError> {
        self.client.http.post("/Group/request", request).await
    }

    pub async fn accept(&self, request: &MembershipRequestRef) -> Result<Empty, SdkError> {
        self.client.http.post("/Group/accept", request).await
    }

    pub async fn deny(&self, request: &MembershipRequestRef) -> Result<Empty, SdkError> {
        self.client.http.post("/Group/deny", request).await
    }

    pub async fn remove_member(&self, request: &UserGroup) -> Result<Empty, SdkError> {
        self.client.http.post("/Group/removeMember", request).await
    }

    pub async fn delete_group(&self, request: &GroupRef) -> Result<Empty, SdkError> {
        self.client.http.post("/Group/deleteGroup", request).await
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Groups the user belongs to.
    pub async fn get_groups(&self, request: &UserRef) -> Result<GroupsResponse, SdkError> {
        self.client.http.post("/Group/getGroups", request).await
    }

    pub async fn get_members(&self, request: &GroupRef) -> Result<MembersResponse, SdkError> {
        self.client.http.post("/Group/getMembers", request).await
    }

    pub async fn get_leader(&self, request: &GroupRef) -> Result<LeaderResponse, SdkError> {
        self.client.http.post("/Group/getLeader", request).await
    }

    pub async fn get_name(&self, request: &GroupRef) -> Result<NameResponse, SdkError> {
        self.client.http.post("/Group/getName", request).await
    }

    pub async fn is_private(&self, request: &GroupRef) -> Result<IsPrivateResponse, SdkError> {
        self.client.http.post("/Group/isPrivate", request).await
    }

    pub async fn get_public_groups(&self) -> Result<GroupsResponse, SdkError> {
        self.client
            .http
            .post("/Group/getPublicGroups", &Empty {})
            .await
    }

    /// Pending join requests for a group.
    pub async fn get_group_requests(
        &self,
        request: &GroupRef,
    ) -> Result<GroupRequestsResponse, SdkError> {
        self.client.http.post("/Group/getGroupRequests", request).await
    }

    /// Pending join requests made by a user.
    pub async fn get_user_requests(
        &self,
        request: &UserRef,
    ) -> Result<UserRequestsResponse, SdkError> {
        self.client.http.post("/Group/getUserRequests", request).await
    }

    pub async fn get_request_details(
        &self,
        request: &MembershipRequestRef,
    ) -> Result<RequestDetailsResponse, SdkError> {
        self.client
            .http
            .post("/Group/getRequestDetails", request)
            .await
    }
}
