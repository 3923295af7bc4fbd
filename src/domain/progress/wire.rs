//! Wire types for `/ChallengeProgress/*`.

use crate::shared::{ChallengeId, PartId, UserId};
use serde::{Deserialize, Serialize};

/// `{user, challenge}` — body of `_getCompletedParts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChallenge {
    pub user: UserId,
    pub challenge: ChallengeId,
}

/// `{parts: [..]}` — body of `_getPartDayWeek`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartsQuery {
    pub parts: Vec<PartId>,
}

impl FromIterator<PartId> for PartsQuery {
    fn from_iter<I: IntoIterator<Item = PartId>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parts_query_shape() {
        let query: PartsQuery = ["p1", "p2"].into_iter().map(PartId::from).collect();
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"parts": ["p1", "p2"]})
        );
    }
}
