use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    serve::Serve,
    Json, Router,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::error::Error;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use domain::MemberAPIError;
pub mod routes;
use crate::utils::{
    constants::{ALLOWED_ORIGINS, MAX_REQUEST_BODY_BYTES},
    tracing::*,
};
use routes::{
    avatar::{update_avatar, upload_avatar},
    dashboard::dashboard,
    landing_grid::landing_grid,
    list_members, register,
    team_member::{delete_member, get_member, update_member},
};
pub mod app_state;
pub mod domain;
pub mod services;
use app_state::AppState;
pub mod utils;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for MemberAPIError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            MemberAPIError::ValidationError(e) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::BAD_REQUEST, e.as_ref().clone())
            }
            MemberAPIError::PayloadTooLarge(_) => {
                log_error_chain(&self, Level::DEBUG);
                (
                    StatusCode::BAD_REQUEST,
                    "Avatar file size must be less than 4MB".to_string(),
                )
            }
            MemberAPIError::MemberNotFound(_) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::NOT_FOUND, "Team member not found".to_string())
            }
            MemberAPIError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
            }
        };
        let body = Json(ErrorResponse {
            error: error_message,
        });
        (status, body).into_response()
    }
}

fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        let allowed_origins = ALLOWED_ORIGINS
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_origin(allowed_origins);

        let router = Router::new()
            .route("/api/register", post(register))
            .route("/api/team-members", get(list_members))
            .route(
                "/api/team-member/:id",
                get(get_member).patch(update_member).delete(delete_member),
            )
            .route("/api/avatar/upload", post(upload_avatar))
            .route("/api/avatar/update", post(update_avatar))
            .route("/api/dashboard", get(dashboard))
            .route("/api/landing-grid", get(landing_grid))
            .with_state(app_state)
            .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

pub async fn get_postgres_pool(
    url: &Secret<String>,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(url.expose_secret())
        .await
}
