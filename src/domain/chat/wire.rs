//! Wire types for `/Chat/*`.

use super::Dm;
use crate::shared::{ChatId, DmId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartChatRequest {
    pub requester: UserId,
    pub receiver: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartChatResponse {
    pub chat: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteChatRequest {
    pub chat: ChatId,
    pub user: UserId,
}

/// Request body for `/Chat/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    pub sender: UserId,
    pub receiver: UserId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    pub dm: DmId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetChatBetweenRequest {
    #[serde(rename = "userA")]
    pub user_a: UserId,
    #[serde(rename = "userB")]
    pub user_b: UserId,
}

/// `{chat}` — used as a request body and as a query row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub chat: ChatId,
}

pub type ChatRef = ChatEntry;

/// `{user}` for `/Chat/_getAccessibleChatsForUser`.
pub type ChatUser = crate::shared::UserRef;

/// One row of `/Chat/_getDMsInChat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmEntry {
    pub dm: Dm,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_get_chat_between_field_names() {
        let req = GetChatBetweenRequest {
            user_a: UserId::from("u1"),
            user_b: UserId::from("u2"),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"userA":"u1","userB":"u2"}"#
        );
    }

    #[test]
    fn test_dm_entry_deserialize() {
        let json = r#"[{"dm":{"id":"d1","message":"hi","sender":"u1","receiver":"u2","time":"2025-03-01T12:00:00.000Z"}}]"#;
        let rows: Vec<DmEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 1);
        let dm = &rows[0].dm;
        assert_eq!(dm.message, "hi");
        assert_eq!(dm.time, Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap());
        assert!(dm.is_from(&UserId::from("u1")));
        assert!(!dm.is_from(&UserId::from("u2")));
    }
}
