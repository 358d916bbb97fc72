//! Groups, group chat and challenges.

use serde::{Deserialize, Serialize};

use super::id::{ChallengeId, GroupId, UserId};

text_enum!(
    /// A member's standing in a group.
    UserGroupRole, "group role" {
        Owner => "OWNER",
        Member => "MEMBER",
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessage {
    pub user_id: UserId,
    pub content: String,
}

impl GroupMessage {
    pub fn new(user_id: UserId, content: impl Into<String>) -> Self {
        Self {
            user_id,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub goal: String,
}

/// Challenge before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChallenge {
    pub title: String,
    pub description: String,
    pub goal: String,
}

impl NewChallenge {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            goal: goal.into(),
        }
    }
}
