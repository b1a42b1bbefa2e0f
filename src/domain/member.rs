use super::{Age, Avatar, MemberId};
use serde::{Deserialize, Serialize};

/// Everything a member tells us about themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub first_name: String,
    pub last_name: String,
    pub furigana: String,
    pub nickname: String,
    pub role: String,
    pub part_time_job: String,
    pub description: String,
    pub age: Age,
    pub join_reason: String,
    pub goal: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    #[serde(flatten)]
    pub profile: MemberProfile,
    pub image: String,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.profile.first_name, self.profile.last_name)
    }
}

/// A member that has not been given an id by the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub profile: MemberProfile,
    pub image: String,
}

impl NewMember {
    pub fn new(profile: MemberProfile, image: String) -> Self {
        Self { profile, image }
    }

    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            profile: self.profile,
            image: self.image,
        }
    }
}

/// A validated registration or edit.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSubmission {
    pub profile: MemberProfile,
    pub image: Option<String>,
    pub avatar: Option<Avatar>,
}
