use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::{MemberAPIError, MemberId},
    routes::{multipart::read_form, MemberResponse},
    services::member_service,
    AppState,
};

#[tracing::instrument(name = "Update team member route handler", skip_all)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MemberResponse>), MemberAPIError> {
    let id = MemberId::parse(&id)?;
    let submission = read_form(multipart).await?.into_member_form().parse()?;

    let member = member_service::update_member(&state, id, submission).await?;

    Ok((StatusCode::OK, Json(MemberResponse::new(member))))
}
