use axum::{extract::State, http::StatusCode, Json};

use crate::{domain::MemberAPIError, services::member_service, AppState};

use super::MemberListResponse;

#[tracing::instrument(name = "List team members route handler", skip_all)]
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MemberListResponse>), MemberAPIError> {
    let members = member_service::list_members(&state).await?;
    tracing::debug!("returning {} team members", members.len());

    Ok((
        StatusCode::OK,
        Json(MemberListResponse {
            success: true,
            data: members,
        }),
    ))
}
