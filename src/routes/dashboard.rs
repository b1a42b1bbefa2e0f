use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        directory::{DirectorySummary, PageControls},
        Member, MemberAPIError,
    },
    services::directory_view::DirectoryView,
    AppState,
};

#[derive(Deserialize)]
pub struct DashboardQueryParams {
    #[serde(default)]
    query: String,
    page: Option<usize>,
}

/// One page of the admin dashboard table, computed from a fresh fetch.
#[tracing::instrument(name = "Dashboard route handler", skip_all)]
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardQueryParams>,
) -> Result<(StatusCode, Json<DashboardResponse>), MemberAPIError> {
    let mut view = DirectoryView::load(&state).await?;
    view.set_query(&params.query);
    view.go_to_page(params.page.unwrap_or(1));

    Ok((StatusCode::OK, Json(DashboardResponse::from(&view))))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub query: String,
    pub page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
    pub controls: PageControls,
    pub summary: DirectorySummary,
    pub members: Vec<Member>,
}

impl From<&DirectoryView> for DashboardResponse {
    fn from(view: &DirectoryView) -> Self {
        Self {
            query: view.query().to_string(),
            page: view.page(),
            total_pages: view.total_pages(),
            page_numbers: view.page_window().collect(),
            controls: view.controls(),
            summary: view.summary(),
            members: view.visible().into_iter().cloned().collect(),
        }
    }
}
