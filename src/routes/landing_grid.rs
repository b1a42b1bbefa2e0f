use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    domain::{
        landing_grid::{LandingGrid, Viewport, INITIAL_PLANE},
        MemberAPIError, ValidationError,
    },
    services::member_service,
    AppState,
};

#[derive(Deserialize)]
pub struct LandingGridQueryParams {
    width: Option<f64>,
    height: Option<f64>,
    x: Option<f64>,
    y: Option<f64>,
}

#[tracing::instrument(name = "Landing grid route handler", skip_all)]
pub async fn landing_grid(
    State(state): State<AppState>,
    Query(params): Query<LandingGridQueryParams>,
) -> Result<(StatusCode, Json<LandingGrid>), MemberAPIError> {
    let defaults = Viewport::default();
    let viewport = Viewport {
        width: params.width.unwrap_or(defaults.width),
        height: params.height.unwrap_or(defaults.height),
    };
    if !(viewport.width.is_finite() && viewport.height.is_finite())
        || viewport.width <= 0.0
        || viewport.height <= 0.0
    {
        return Err(ValidationError::new(
            "Viewport dimensions must be positive numbers".to_string(),
        )
        .into());
    }

    let plane = (
        params.x.unwrap_or(INITIAL_PLANE.0),
        params.y.unwrap_or(INITIAL_PLANE.1),
    );

    let members = member_service::list_members(&state).await?;
    let grid = LandingGrid::layout(viewport, &members, plane);

    Ok((StatusCode::OK, Json(grid)))
}
