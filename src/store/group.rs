use crate::client::ChallengeClient;
use crate::domain::group::wire::{
    CreateGroupRequest, CreateGroupResponse, GroupRequestsResponse, GroupsResponse,
    IsPrivateResponse, LeaderResponse, MembersResponse, MembershipRequestRef, NameResponse,
    RequestDetailsResponse, RequestMembershipResponse, UserGroup, UserRequestsResponse,
};
use crate::shared::{Empty, GroupId, GroupRef, MembershipRequestId, UserId, UserRef};
use crate::store::{settle, StoreResult};

/// Groups and membership requests.
#[derive(Debug, Clone)]
pub struct GroupStore {
    client: ChallengeClient,
}

impl GroupStore {
    pub fn new(client: ChallengeClient) -> Self {
        Self { client }
    }

    pub async fn create_group(
        &self,
        leader: &UserId,
        name: &str,
        private: bool,
    ) -> StoreResult<CreateGroupResponse> {
        let request = CreateGroupRequest {
            leader: leader.clone(),
            name: name.to_string(),
            private,
        };
        settle("createGroup", self.client.groups().create(&request).await)
    }

    pub async fn request_membership(
        &self,
        user: &UserId,
        group: &GroupId,
    ) -> StoreResult<RequestMembershipResponse> {
        let request = user_group(user, group);
        settle("requestMembership", self.client.groups().request(&request).await)
    }

    pub async fn accept_request(&self, membership_request: &MembershipRequestId) -> StoreResult<Empty> {
        let request = membership_ref(membership_request);
        settle("acceptRequest", self.client.groups().accept(&request).await)
    }

    pub async fn deny_request(&self, membership_request: &MembershipRequestId) -> StoreResult<Empty> {
        let request = membership_ref(membership_request);
        settle("denyRequest", self.client.groups().deny(&request).await)
    }

    pub async fn remove_member(&self, user: &UserId, group: &GroupId) -> StoreResult<Empty> {
        let request = user_group(user, group);
        settle("removeMember", self.client.groups().remove_member(&request).await)
    }

    pub async fn delete_group(&self, group: &GroupId) -> StoreResult<Empty> {
        let request = GroupRef::from(group.clone());
        settle("deleteGroup", self.client.groups().delete_group(&request).await)
    }

    pub async fn get_groups(&self, user: &UserId) -> StoreResult<GroupsResponse> {
        let request = UserRef::from(user.clone());
        settle("getGroups", self.client.groups().get_groups(&request).await)
    }

    pub async fn get_members(&self, group: &GroupId) -> StoreResult<MembersResponse> {
        let request = GroupRef::from(group.clone());
        settle("getMembers", self.client.groups().get_members(&request).await)
    }

    pub async fn get_leader(&self, group: &GroupId) -> StoreResult<LeaderResponse> {
        let request = GroupRef::from(group.clone());
        settle("getLeader", self.client.groups().get_leader(&request).await)
    }

    pub async fn get_name(&self, group: &GroupId) -> StoreResult<NameResponse> {
        let request = GroupRef::from(group.clone());
        settle("getName", self.client.groups().get_name(&request).await)
    }

    pub async fn is_private(&self, group: &GroupId) -> StoreResult<IsPrivateResponse> {
        let request = GroupRef::from(group.clone());
        settle("isPrivate", self.client.groups().is_private(&request).await)
    }

    pub async fn get_public_groups(&self) -> StoreResult<GroupsResponse> {
        settle("getPublicGroups", self.client.groups().get_public_groups().await)
    }

    pub async fn get_group_requests(&self, group: &GroupId) -> StoreResult<GroupRequestsResponse> {
        let request = GroupRef::from(group.clone());
        settle(
            "getGroupRequests",
            self.client.groups().get_group_requests(&request).await,
        )
    }

    pub async fn get_user_requests(&self, user: &UserId) -> StoreResult<UserRequestsResponse> {
        let request = UserRef::from(user.clone());
        settle(
            "getUserRequests",
            self.client.groups().get_user_requests(&request).await,
        )
    }

    pub async fn get_request_details(
        &self,
        membership_request: &MembershipRequestId,
    ) -> StoreResult<RequestDetailsResponse> {
        let request = membership_ref(membership_request);
        settle(
            "getRequestDetails",
            self.client.groups().get_request_details(&request).await,
        )
    }
}

fn user_group(user: &UserId, group: &GroupId) -> UserGroup {
    UserGroup {
        user: user.clone(),
        group: group.clone(),
    }
}

fn membership_ref(id: &MembershipRequestId) -> MembershipRequestRef {
    MembershipRequestRef {
        membership_request: id.clone(),
    }
}
