use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::{Avatar, MemberAPIError, MemberId, ValidationError},
    routes::{multipart::read_form, MemberResponse},
    services::member_service,
    AppState,
};

const MEMBER_ID_FIELD: &str = "memberId";

/// Replaces a member's avatar without touching the rest of the profile.
#[tracing::instrument(name = "Update avatar route handler", skip_all)]
pub async fn update_avatar(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MemberResponse>), MemberAPIError> {
    let mut form = read_form(multipart).await?;

    let member_id = form
        .fields
        .remove(MEMBER_ID_FIELD)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            ValidationError::new("Member ID is required".to_string())
        })?;
    let member_id = MemberId::parse(&member_id)?;

    let upload = form
        .avatar
        .filter(|upload| !upload.is_empty())
        .ok_or_else(|| {
            ValidationError::new("Avatar file is required".to_string())
        })?;
    let avatar = Avatar::parse(upload)?;

    let member =
        member_service::update_avatar(&state, member_id, avatar).await?;

    Ok((StatusCode::OK, Json(MemberResponse::new(member))))
}
