//! Friending domain — friend requests and friend lists.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{
    AcceptFriendRequest, FriendEntry, FriendRequest, FriendRequestInfo, FriendRequestRef,
    RemoveFriendRequest, RequestFriendRequest, RequestFriendResponse,
};
