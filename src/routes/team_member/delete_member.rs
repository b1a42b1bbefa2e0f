use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::{MemberAPIError, MemberId},
    routes::MessageResponse,
    services::member_service,
    AppState,
};

#[tracing::instrument(name = "Delete team member route handler", skip_all)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), MemberAPIError> {
    let id = MemberId::parse(&id)?;

    member_service::delete_member(&state, id).await?;

    let response = Json(MessageResponse {
        success: true,
        message: "Team member deleted successfully".to_string(),
    });

    Ok((StatusCode::OK, response))
}
