//! Friending sub-client — send, accept, remove, and list friends.

use crate::client::ChallengeClient;
use crate::domain::friending::wire::{
    AcceptFriendRequest, FriendEntry, FriendRequest, FriendRequestInfo, FriendRequestRef,
    RemoveFriendRequest, RequestFriendRequest, RequestFriendResponse,
};
use crate::error::SdkError;
use crate::shared::{Empty, UserRef};

/// Sub-client for `/Friending/*`.
pub struct Friending<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Friending<'a> {
    pub async fn request_friend(
        &self,
        request: &RequestFriendRequest,
    ) -> Result<RequestFriendResponse, SdkError> {
        self.client
            .http
            .post("/Friending/requestFriend", request)
            .await
    }

    pub async fn accept_friend(&self, request: &AcceptFriendRequest) -> Result<Empty, SdkError> {
        self.client.http.post("/Friending/acceptFriend", request).await
    }

    pub async fn remove_friend(&self, request: &RemoveFriendRequest) -> Result<Empty, SdkError> {
        self.client.http.post("/Friending/removeFriend", request).await
    }

    pub async fn get_friends(&self, request: &UserRef) -> Result<Vec<FriendEntry>, SdkError> {
        self.client.http.post("/Friending/_getFriends", request).await
    }

    /// Friend requests waiting on `user`.
    pub async fn get_received_requests(
        &self,
        request: &UserRef,
    ) -> Result<Vec<FriendRequest>, SdkError> {
        self.client
            .http
            .post("/Friending/_getReceivedFriendRequests", request)
            .await
    }

    /// Friend requests `user` has sent that are still pending.
    pub async fn get_sent_requests(
        &self,
        request: &UserRef,
    ) -> Result<Vec<FriendRequest>, SdkError> {
        self.client
            .http
            .post("/Friending/_getSentFriendRequests", request)
            .await
    }

    pub async fn get_request_info(
        &self,
        request: &FriendRequestRef,
    ) -> Result<FriendRequestInfo, SdkError> {
        self.client
            .http
            .post("/Friending/_getRequestInfo", request)
            .await
    }
}
