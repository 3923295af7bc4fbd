//! User profile domain.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::format_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::EditProfileRequest;

/// Response of `/UserProfile/_getProfile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skill_level: String,
    pub date_joined: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_img: Option<String>,
}

impl Profile {
    /// Join date as `"October 19, 2026"`.
    pub fn formatted_join_date(&self) -> String {
        format_date(&self.date_joined)
    }
}
