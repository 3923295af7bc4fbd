use crate::client::ChallengeClient;
use crate::domain::friending::wire::{
    AcceptFriendRequest, FriendEntry, FriendRequest, FriendRequestInfo, FriendRequestRef,
    RemoveFriendRequest, RequestFriendRequest, RequestFriendResponse,
};
use crate::shared::{Empty, FriendRequestId, UserId, UserRef};
use crate::store::{settle, StoreResult};

/// Friend requests and friend lists.
#[derive(Debug, Clone)]
pub struct FriendingStore {
    client: ChallengeClient,
}

impl FriendingStore {
    pub fn new(client: ChallengeClient) -> Self {
        Self { client }
    }

    pub async fn request_friend(
        &self,
        requester: &UserId,
        receiver: &UserId,
    ) -> StoreResult<RequestFriendResponse> {
        let request = RequestFriendRequest {
            requester: requester.clone(),
            receiver: receiver.clone(),
        };
        settle("requestFriend", self.client.friending().request_friend(&request).await)
    }

    /// `user` accepts the pending `request` addressed to them.
    pub async fn accept_friend(&self, user: &UserId, request: &FriendRequestId) -> StoreResult<Empty> {
        let body = AcceptFriendRequest {
            user: user.clone(),
            request: request.clone(),
        };
        settle("acceptFriend", self.client.friending().accept_friend(&body).await)
    }

    pub async fn remove_friend(&self, user: &UserId, requester: &UserId) -> StoreResult<Empty> {
        let request = RemoveFriendRequest {
            user: user.clone(),
            requester: requester.clone(),
        };
        settle("removeFriend", self.client.friending().remove_friend(&request).await)
    }

    pub async fn get_friends(&self, user: &UserId) -> StoreResult<Vec<FriendEntry>> {
        let request = UserRef::from(user.clone());
        settle("getFriends", self.client.friending().get_friends(&request).await)
    }

    pub async fn get_received_requests(&self, user: &UserId) -> StoreResult<Vec<FriendRequest>> {
        let request = UserRef::from(user.clone());
        settle(
            "getReceivedFriendRequests",
            self.client.friending().get_received_requests(&request).await,
        )
    }

    pub async fn get_sent_requests(&self, user: &UserId) -> StoreResult<Vec<FriendRequest>> {
        let request = UserRef::from(user.clone());
        settle(
            "getSentFriendRequests",
            self.client.friending().get_sent_requests(&request).await,
        )
    }

    pub async fn get_request_info(
        &self,
        friend_request: &FriendRequestId,
    ) -> StoreResult<FriendRequestInfo> {
        let request = FriendRequestRef {
            friend_request: friend_request.clone(),
        };
        settle(
            "getRequestInfo",
            self.client.friending().get_request_info(&request).await,
        )
    }
}
