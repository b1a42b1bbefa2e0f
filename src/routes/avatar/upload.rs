use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Json,
};
use color_eyre::eyre::WrapErr;
use serde::Deserialize;

use crate::{
    domain::{
        Avatar, AvatarTooLarge, AvatarUpload, MemberAPIError, StoredBlob,
        ValidationError,
    },
    utils::constants::MAX_REQUEST_BODY_BYTES,
    AppState,
};

#[derive(Deserialize)]
pub struct UploadQueryParams {
    filename: Option<String>,
}

/// Stores the raw request body as a blob and hands back its descriptor.
#[tracing::instrument(name = "Upload avatar route handler", skip_all)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    Query(params): Query<UploadQueryParams>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<StoredBlob>), MemberAPIError> {
    let file_name = params
        .filename
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| {
            ValidationError::new("Filename is required".to_string())
        })?;
    let body = body.map_err(unreadable_body)?;

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let avatar = Avatar::parse(AvatarUpload {
        file_name,
        content_type,
        bytes: body.to_vec(),
    })?;

    let blob = state
        .blob_store
        .put(&avatar)
        .await
        .wrap_err("failed to upload blob")
        .map_err(MemberAPIError::UnexpectedError)?;

    Ok((StatusCode::OK, Json(blob)))
}

fn unreadable_body(rejection: BytesRejection) -> MemberAPIError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return MemberAPIError::PayloadTooLarge(AvatarTooLarge(
            MAX_REQUEST_BODY_BYTES,
        ));
    }
    MemberAPIError::ValidationError(ValidationError::new(format!(
        "Malformed request body: {}",
        rejection.body_text()
    )))
}
