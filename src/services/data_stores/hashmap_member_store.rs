use std::collections::BTreeMap;

use crate::domain::{
    Member, MemberId, MemberStore, MemberStoreError, NewMember,
};

/// In-memory store. Ids start at 1 and are never reused, even after delete.
#[derive(Default)]
pub struct HashmapMemberStore {
    members: BTreeMap<MemberId, Member>,
    last_id: i32,
}

#[async_trait::async_trait]
impl MemberStore for HashmapMemberStore {
    async fn add_member(
        &mut self,
        member: NewMember,
    ) -> Result<Member, MemberStoreError> {
        self.last_id += 1;
        let member = member.into_member(MemberId::new(self.last_id));
        self.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn get_member(
        &self,
        id: &MemberId,
    ) -> Result<Member, MemberStoreError> {
        match self.members.get(id) {
            Some(member) => Ok(member.clone()),
            None => Err(MemberStoreError::MemberNotFound),
        }
    }

    async fn get_members(&self) -> Result<Vec<Member>, MemberStoreError> {
        Ok(self.members.values().cloned().collect())
    }

    async fn update_member(
        &mut self,
        member: &Member,
    ) -> Result<(), MemberStoreError> {
        match self.members.get_mut(&member.id) {
            Some(existing) => {
                *existing = member.clone();
                Ok(())
            }
            None => Err(MemberStoreError::MemberNotFound),
        }
    }

    async fn delete_member(
        &mut self,
        id: &MemberId,
    ) -> Result<(), MemberStoreError> {
        match self.members.remove(id) {
            Some(_) => Ok(()),
            None => Err(MemberStoreError::MemberNotFound),
        }
    }

    async fn delete_members(&mut self) -> Result<(), MemberStoreError> {
        self.members.clear();
        Ok(())
    }
}
