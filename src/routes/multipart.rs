use axum::extract::{multipart::Field, Multipart};
use std::collections::HashMap;

use crate::{
    domain::{
        AvatarTooLarge, AvatarUpload, MemberAPIError, MemberForm,
        ValidationError,
    },
    utils::constants::MAX_REQUEST_BODY_BYTES,
};

pub const AVATAR_FIELD: &str = "avatar";

/// Text fields and the avatar file part of a multipart submission.
#[derive(Debug, Default)]
pub struct SubmittedForm {
    pub fields: HashMap<String, String>,
    pub avatar: Option<AvatarUpload>,
}

impl SubmittedForm {
    pub fn into_member_form(self) -> MemberForm {
        let mut form = MemberForm {
            avatar: self.avatar,
            ..Default::default()
        };
        for (name, value) in self.fields {
            form.set_field(&name, value);
        }
        form
    }
}

#[tracing::instrument(name = "Reading multipart form", skip_all)]
pub async fn read_form(
    mut multipart: Multipart,
) -> Result<SubmittedForm, MemberAPIError> {
    let mut form = SubmittedForm::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == AVATAR_FIELD {
            form.avatar = Some(read_file(field).await?);
        } else {
            let value = field.text().await.map_err(malformed)?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

async fn read_file(field: Field<'_>) -> Result<AvatarUpload, MemberAPIError> {
    let file_name = field.file_name().unwrap_or_default().to_owned();
    let content_type = field.content_type().map(str::to_owned);
    let bytes = field.bytes().await.map_err(malformed)?;

    Ok(AvatarUpload {
        file_name,
        content_type,
        bytes: bytes.to_vec(),
    })
}

fn malformed(e: axum::extract::multipart::MultipartError) -> MemberAPIError {
    if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
        return MemberAPIError::PayloadTooLarge(AvatarTooLarge(
            MAX_REQUEST_BODY_BYTES,
        ));
    }
    MemberAPIError::ValidationError(ValidationError::new(format!(
        "Malformed form data: {}",
        e.body_text()
    )))
}
