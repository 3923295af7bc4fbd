//! Chat sub-client — start/delete chats, send and read direct messages.

use crate::client::ChallengeClient;
use crate::domain::chat::wire::{
    ChatEntry, ChatRef, ChatUser, DeleteChatRequest, DmEntry, GetChatBetweenRequest, SendRequest,
    SendResponse, StartChatRequest, StartChatResponse,
};
use crate::error::SdkError;
use crate::shared::Empty;

/// Sub-client for `/Chat/*`.
pub struct Chat<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Chat<'a> {
    pub async fn start_chat(
        &self,
        request: &StartChatRequest,
    ) -> Result<StartChatResponse, SdkError> {
        self.client.http.post("/Chat/startChat", request).await
    }

    pub async fn delete_chat(&self, request: &DeleteChatRequest) -> Result<Empty, SdkError> {
        self.client.http.post("/Chat/deleteChat", request).await
    }

    pub async fn send(&self, request: &SendRequest) -> Result<SendResponse, SdkError> {
        self.client.http.post("/Chat/send", request).await
    }

    /// The chat shared by two users, if one exists (empty otherwise).
    pub async fn get_chat_between(
        &self,
        request: &GetChatBetweenRequest,
    ) -> Result<Vec<ChatEntry>, SdkError> {
        self.client
            .http
            .post("/Chat/_getChatBetweenUsers", request)
            .await
    }

    pub async fn get_dms(&self, request: &ChatRef) -> Result<Vec<DmEntry>, SdkError> {
        self.client.http.post("/Chat/_getDMsInChat", request).await
    }

    pub async fn get_user_chats(&self, request: &ChatUser) -> Result<Vec<ChatEntry>, SdkError> {
        self.client
            .http
            .post("/Chat/_getAccessibleChatsForUser", request)
            .await
    }
}
