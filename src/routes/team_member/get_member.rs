use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::{MemberAPIError, MemberId},
    routes::MemberResponse,
    services::member_service,
    AppState,
};

#[tracing::instrument(name = "Get team member route handler", skip_all)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MemberResponse>), MemberAPIError> {
    let id = MemberId::parse(&id)?;
    tracing::debug!("member_id: {}", id.value_of());

    let member = member_service::get_member(&state, id).await?;

    Ok((StatusCode::OK, Json(MemberResponse::new(member))))
}
