use crate::client::ChallengeClient;
use crate::domain::chat::wire::{
    ChatEntry, DeleteChatRequest, DmEntry, GetChatBetweenRequest, SendRequest, SendResponse,
    StartChatRequest, StartChatResponse,
};
use crate::shared::{ChatId, Empty, UserId, UserRef};
use crate::store::{settle, StoreResult};

/// Chats and direct messages.
#[derive(Debug, Clone)]
pub struct ChatStore {
    client: ChallengeClient,
}

impl ChatStore {
    pub fn new(client: ChallengeClient) -> Self {
        Self { client }
    }

    pub async fn start_chat(
        &self,
        requester: &UserId,
        receiver: &UserId,
    ) -> StoreResult<StartChatResponse> {
        let request = StartChatRequest {
            requester: requester.clone(),
            receiver: receiver.clone(),
        };
        settle("startChat", self.client.chat().start_chat(&request).await)
    }

    pub async fn delete_chat(&self, chat: &ChatId, user: &UserId) -> StoreResult<Empty> {
        let request = DeleteChatRequest {
            chat: chat.clone(),
            user: user.clone(),
        };
        settle("deleteChat", self.client.chat().delete_chat(&request).await)
    }

    pub async fn send_message(
        &self,
        sender: &UserId,
        receiver: &UserId,
        message: &str,
    ) -> StoreResult<SendResponse> {
        let request = SendRequest {
            sender: sender.clone(),
            receiver: receiver.clone(),
            message: message.to_string(),
        };
        settle("sendMessage", self.client.chat().send(&request).await)
    }

    pub async fn get_chat_between(
        &self,
        user_a: &UserId,
        user_b: &UserId,
    ) -> StoreResult<Vec<ChatEntry>> {
        let request = GetChatBetweenRequest {
            user_a: user_a.clone(),
            user_b: user_b.clone(),
        };
        settle(
            "getChatBetweenUsers",
            self.client.chat().get_chat_between(&request).await,
        )
    }

    pub async fn get_dms(&self, chat: &ChatId) -> StoreResult<Vec<DmEntry>> {
        let request = ChatEntry { chat: chat.clone() };
        settle("getDMsInChat", self.client.chat().get_dms(&request).await)
    }

    pub async fn get_user_chats(&self, user: &UserId) -> StoreResult<Vec<ChatEntry>> {
        let request = UserRef::from(user.clone());
        settle(
            "getAccessibleChatsForUser",
            self.client.chat().get_user_chats(&request).await,
        )
    }
}
