use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::MemberAPIError, routes::multipart::read_form,
    services::member_service, AppState,
};

use super::MemberResponse;

#[tracing::instrument(name = "Register team member route handler", skip_all)]
pub async fn register(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MemberResponse>), MemberAPIError> {
    let submission = read_form(multipart).await?.into_member_form().parse()?;

    let member = member_service::create_member(&state, submission).await?;

    Ok((StatusCode::CREATED, Json(MemberResponse::new(member))))
}
