use crate::client::ChallengeClient;
use crate::domain::profile::wire::EditProfileRequest;
use crate::domain::profile::Profile;
use crate::shared::{Empty, SessionToken, UserId, UserRef};
use crate::store::{settle, StoreResult};

/// User profiles.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    client: ChallengeClient,
}

impl ProfileStore {
    pub fn new(client: ChallengeClient) -> Self {
        Self { client }
    }

    pub async fn get_profile(&self, user: &UserId) -> StoreResult<Profile> {
        let request = UserRef::from(user.clone());
        settle("getProfile", self.client.profiles().get_profile(&request).await)
    }

    /// Send `edit` with `session` filled in. Fields left `None` are unchanged.
    pub async fn edit_profile(
        &self,
        session: &SessionToken,
        edit: EditProfileRequest,
    ) -> StoreResult<Empty> {
        let request = edit.session(session.clone());
        settle("editProfile", self.client.profiles().edit_profile(&request).await)
    }
}
