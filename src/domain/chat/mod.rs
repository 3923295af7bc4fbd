//! Chat domain — one chat per pair of users, holding ordered direct messages.
//!
//! No pagination or streaming: `get_dms` returns the whole history.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::{DmId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{
    ChatEntry, ChatUser, DeleteChatRequest, DmEntry, GetChatBetweenRequest, SendRequest,
    SendResponse, StartChatRequest, StartChatResponse,
};

/// A direct message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dm {
    pub id: DmId,
    pub message: String,
    pub sender: UserId,
    pub receiver: UserId,
    pub time: DateTime<Utc>,
}

impl Dm {
    /// Whether `user` wrote this message.
    pub fn is_from(&self, user: &UserId) -> bool {
        &self.sender == user
    }
}
