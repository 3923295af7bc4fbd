//! Wire types for `/Friending/*`.

use crate::shared::{FriendRequestId, UserId};
use serde::{Deserialize, Serialize};

/// Request body for `/Friending/requestFriend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFriendRequest {
    pub requester: UserId,
    pub receiver: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFriendResponse {
    pub request: FriendRequestId,
}

/// `user` accepts the pending `request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptFriendRequest {
    pub user: UserId,
    pub request: FriendRequestId,
}

/// `user` drops `requester` (friend or pending request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFriendRequest {
    pub user: UserId,
    pub requester: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestRef {
    pub friend_request: FriendRequestId,
}

/// One row of `/Friending/_getFriends`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendEntry {
    pub friend: UserId,
}

/// One row of the received/sent friend request queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRequest {
    #[serde(rename = "_id")]
    pub id: FriendRequestId,
    pub requester: UserId,
    pub receiver: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRequestInfo {
    pub requester: UserId,
    pub receiver: UserId,
}
