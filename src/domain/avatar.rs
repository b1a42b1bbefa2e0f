use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Avatars must be strictly smaller than this many bytes.
pub const MAX_AVATAR_BYTES: usize = 4 * 1024 * 1024;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error, PartialEq)]
#[error("Avatar of {0} bytes exceeds the {MAX_AVATAR_BYTES} byte limit")]
pub struct AvatarTooLarge(pub usize);

/// A file part exactly as it arrived in a form submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    /// A part without content is no avatar, whatever name it carries.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// An image that passed the size check and may be sent to the blob store.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl Avatar {
    pub fn parse(upload: AvatarUpload) -> Result<Self, AvatarTooLarge> {
        if upload.bytes.len() >= MAX_AVATAR_BYTES {
            return Err(AvatarTooLarge(upload.bytes.len()));
        }

        let file_name = match upload.file_name.trim() {
            "" => "avatar".to_string(),
            name => name.to_string(),
        };
        let content_type = upload
            .content_type
            .filter(|content_type| !content_type.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        Ok(Self {
            file_name,
            content_type,
            bytes: upload.bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Descriptor returned by the blob store for a stored object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBlob {
    pub url: String,
    #[serde(default)]
    pub download_url: String,
    pub pathname: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub content_disposition: String,
}
