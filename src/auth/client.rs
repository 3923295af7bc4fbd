//! Auth sub-client — login, registration, logout, username lookups.

use crate::auth::{
    Credentials, GetUserRequest, GetUserResponse, GetUsernameRequest, GetUsernameResponse,
    LoginResponse, LogoutRequest, RegisterResponse,
};
use crate::client::ChallengeClient;
use crate::error::SdkError;
use crate::shared::Empty;

/// Sub-client for `/UserAuthentication/*`.
pub struct Auth<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Auth<'a> {
    /// Exchange credentials for a session token. Does not touch the session
    /// context; see [`AuthStore::login`](crate::store::AuthStore::login).
    pub async fn login(&self, request: &Credentials) -> Result<LoginResponse, SdkError> {
        self.client
            .http
            .post("/UserAuthentication/login", request)
            .await
    }

    pub async fn register(&self, request: &Credentials) -> Result<RegisterResponse, SdkError> {
        self.client
            .http
            .post("/UserAuthentication/uploadUser", request)
            .await
    }

    /// Ask the backend to invalidate a session.
    pub async fn logout(&self, request: &LogoutRequest) -> Result<Empty, SdkError> {
        self.client
            .http
            .post("/UserAuthentication/logout", request)
            .await
    }

    pub async fn get_username(
        &self,
        request: &GetUsernameRequest,
    ) -> Result<GetUsernameResponse, SdkError> {
        self.client
            .http
            .post("/UserAuthentication/_getUsername", request)
            .await
    }

    pub async fn get_user(&self, request: &GetUserRequest) -> Result<GetUserResponse, SdkError> {
        self.client
            .http
            .post("/UserAuthentication/_getUser", request)
            .await
    }
}
