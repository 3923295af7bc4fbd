//! Wire types for `/UserProfile/*`.

use crate::shared::{SessionToken, UserId};
use serde::{Deserialize, Serialize};

/// Body of `/UserProfile/editProfile`. Unset fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProfileRequest {
    pub user: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_img: Option<String>,
}

impl EditProfileRequest {
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            session: None,
            location: None,
            bio: None,
            skill_level: None,
            user_img: None,
        }
    }

    pub fn session(mut self, session: SessionToken) -> Self {
        self.session = Some(session);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn skill_level(mut self, level: impl Into<String>) -> Self {
        self.skill_level = Some(level.into());
        self
    }

    pub fn user_img(mut self, url: impl Into<String>) -> Self {
        self.user_img = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_edit_only_sends_set_fields() {
        let req = EditProfileRequest::new(UserId::from("u1"))
            .bio("new bio")
            .skill_level("Advanced");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"user": "u1", "bio": "new bio", "skillLevel": "Advanced"})
        );
    }
}
