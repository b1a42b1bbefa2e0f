//! Create/read/update/delete for team members.
//!
//! Every operation validates before it touches the blob store or the member
//! store. An avatar uploaded just before a failed store write is left behind
//! in the blob store. Concurrent edits of one member are not reconciled: the
//! last write wins.

use color_eyre::eyre::{eyre, WrapErr};

use crate::{
    app_state::AppState,
    domain::{
        Avatar, Member, MemberAPIError, MemberId, MemberStoreError,
        MemberSubmission, NewMember,
    },
};

fn store_error(id: MemberId) -> impl Fn(MemberStoreError) -> MemberAPIError {
    move |e| match e {
        MemberStoreError::MemberNotFound => {
            MemberAPIError::MemberNotFound(id.value_of())
        }
        e => MemberAPIError::UnexpectedError(eyre!(e)),
    }
}

#[tracing::instrument(name = "Uploading avatar", skip_all)]
async fn upload_avatar(
    state: &AppState,
    avatar: &Avatar,
) -> Result<String, MemberAPIError> {
    let blob = state
        .blob_store
        .put(avatar)
        .await
        .wrap_err("failed to upload avatar")
        .map_err(MemberAPIError::UnexpectedError)?;
    Ok(blob.url)
}

#[tracing::instrument(name = "Create team member", skip_all)]
pub async fn create_member(
    state: &AppState,
    submission: MemberSubmission,
) -> Result<Member, MemberAPIError> {
    let image = match &submission.avatar {
        Some(avatar) => upload_avatar(state, avatar).await?,
        None => submission.image.unwrap_or_default(),
    };

    let member = state
        .member_store
        .write()
        .await
        .add_member(NewMember::new(submission.profile, image))
        .await
        .map_err(|e| MemberAPIError::UnexpectedError(eyre!(e)))?;

    tracing::info!(id = member.id.value_of(), "created team member");
    Ok(member)
}

#[tracing::instrument(name = "Get team member", skip_all)]
pub async fn get_member(
    state: &AppState,
    id: MemberId,
) -> Result<Member, MemberAPIError> {
    state
        .member_store
        .read()
        .await
        .get_member(&id)
        .await
        .map_err(store_error(id))
}

/// All members in ascending id order, whatever order the store returns.
#[tracing::instrument(name = "List team members", skip_all)]
pub async fn list_members(
    state: &AppState,
) -> Result<Vec<Member>, MemberAPIError> {
    let mut members = state
        .member_store
        .read()
        .await
        .get_members()
        .await
        .map_err(|e| MemberAPIError::UnexpectedError(eyre!(e)))?;

    members.sort_by_key(|member| member.id);
    Ok(members)
}

#[tracing::instrument(name = "Update team member", skip_all)]
pub async fn update_member(
    state: &AppState,
    id: MemberId,
    submission: MemberSubmission,
) -> Result<Member, MemberAPIError> {
    let existing = get_member(state, id).await?;

    let image = match &submission.avatar {
        Some(avatar) => upload_avatar(state, avatar).await?,
        None => existing.image,
    };

    let member = Member {
        id,
        profile: submission.profile,
        image,
    };

    state
        .member_store
        .write()
        .await
        .update_member(&member)
        .await
        .map_err(store_error(id))?;

    tracing::info!(id = id.value_of(), "updated team member");
    Ok(member)
}

/// Replaces only the avatar of an existing member.
#[tracing::instrument(name = "Update team member avatar", skip_all)]
pub async fn update_avatar(
    state: &AppState,
    id: MemberId,
    avatar: Avatar,
) -> Result<Member, MemberAPIError> {
    let mut member = get_member(state, id).await?;
    member.image = upload_avatar(state, &avatar).await?;

    state
        .member_store
        .write()
        .await
        .update_member(&member)
        .await
        .map_err(store_error(id))?;

    Ok(member)
}

#[tracing::instrument(name = "Delete team member", skip_all)]
pub async fn delete_member(
    state: &AppState,
    id: MemberId,
) -> Result<(), MemberAPIError> {
    get_member(state, id).await?;

    state
        .member_store
        .write()
        .await
        .delete_member(&id)
        .await
        .map_err(store_error(id))?;

    tracing::info!(id = id.value_of(), "deleted team member");
    Ok(())
}
