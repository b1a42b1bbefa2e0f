use super::{Avatar, Member, MemberId, NewMember, StoredBlob};
use color_eyre::eyre::{Report, Result};
use thiserror::Error;

#[async_trait::async_trait]
pub trait MemberStore {
    async fn add_member(
        &mut self,
        member: NewMember,
    ) -> Result<Member, MemberStoreError>;
    async fn get_member(
        &self,
        id: &MemberId,
    ) -> Result<Member, MemberStoreError>;
    async fn get_members(&self) -> Result<Vec<Member>, MemberStoreError>;
    async fn update_member(
        &mut self,
        member: &Member,
    ) -> Result<(), MemberStoreError>;
    async fn delete_member(
        &mut self,
        id: &MemberId,
    ) -> Result<(), MemberStoreError>;
    async fn delete_members(&mut self) -> Result<(), MemberStoreError>;
}

#[derive(Debug, Error)]
pub enum MemberStoreError {
    #[error("Team member not found")]
    MemberNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for MemberStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MemberNotFound, Self::MemberNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait BlobStore {
    async fn put(&self, avatar: &Avatar) -> Result<StoredBlob>;
}
