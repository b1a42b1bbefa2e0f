use serde::{Deserialize, Serialize};

use crate::domain::Member;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub success: bool,
    pub data: Member,
}

impl MemberResponse {
    pub fn new(member: Member) -> Self {
        Self {
            success: true,
            data: member,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub success: bool,
    pub data: Vec<Member>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
