//! Profiles sub-client.

use crate::client::ChallengeClient;
use crate::domain::profile::wire::EditProfileRequest;
use crate::domain::profile::Profile;
use crate::error::SdkError;
use crate::shared::{Empty, UserRef};

/// Sub-client for `/UserProfile/*`.
pub struct Profiles<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Profiles<'a> {
    pub async fn get_profile(&self, request: &UserRef) -> Result<Profile, SdkError> {
        self.client
            .http
            .post("/UserProfile/_getProfile", request)
            .await
    }

    pub async fn edit_profile(&self, request: &EditProfileRequest) -> Result<Empty, SdkError> {
        self.client
            .http
            .post("/UserProfile/editProfile", request)
            .await
    }
}
