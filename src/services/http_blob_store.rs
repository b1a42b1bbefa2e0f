use color_eyre::eyre::{Result, WrapErr};
use lazy_static::lazy_static;
use rand::{distributions::Alphanumeric, Rng};
use regex::Regex;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use crate::domain::{Avatar, BlobStore, StoredBlob};

const BLOB_API_VERSION: &str = "7";
const RANDOM_SUFFIX_LENGTH: usize = 21;

lazy_static! {
    static ref UNSAFE_PATH_CHARS: Regex =
        Regex::new(r"[^A-Za-z0-9._-]+").expect("valid regex");
}

/// Client for an HTTP object store that accepts `PUT /{pathname}` uploads
/// and answers with a JSON blob descriptor.
pub struct HttpBlobStore {
    http_client: Client,
    base_url: String,
    token: Secret<String>,
}

impl HttpBlobStore {
    /// Pathnames are resolved below `base_url`, including any path prefix.
    pub fn new(
        mut base_url: String,
        token: Secret<String>,
        http_client: Client,
    ) -> Self {
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http_client,
            base_url,
            token,
        }
    }
}

#[async_trait::async_trait]
impl BlobStore for HttpBlobStore {
    #[tracing::instrument(name = "Uploading avatar to blob store", skip_all)]
    async fn put(&self, avatar: &Avatar) -> Result<StoredBlob> {
        let pathname = blob_pathname(avatar.file_name());
        let url = Url::parse(&self.base_url)
            .and_then(|base| base.join(&pathname))
            .wrap_err("failed to build blob upload URL")?;

        tracing::debug!(
            pathname = %pathname,
            size = avatar.size(),
            "uploading blob"
        );

        let response = self
            .http_client
            .put(url)
            .bearer_auth(self.token.expose_secret())
            .header("x-api-version", BLOB_API_VERSION)
            .header("x-content-type", avatar.content_type())
            .body(avatar.bytes().to_vec())
            .send()
            .await
            .wrap_err("blob upload request failed")?
            .error_for_status()
            .wrap_err("blob store rejected the upload")?;

        response
            .json::<StoredBlob>()
            .await
            .wrap_err("failed to parse blob store response")
    }
}

/// `"My Photo.PNG"` becomes something like `"My-Photo-8fJ2...Qz.PNG"`.
fn blob_pathname(file_name: &str) -> String {
    let (stem, extension) = match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => {
            (stem, format!(".{extension}"))
        }
        _ => (file_name, String::new()),
    };

    let stem = UNSAFE_PATH_CHARS.replace_all(stem, "-");
    let stem = stem.trim_matches('-');
    let stem = if stem.is_empty() { "avatar" } else { stem };
    let extension = UNSAFE_PATH_CHARS.replace_all(&extension, "");

    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LENGTH)
        .map(char::from)
        .collect();

    format!("{stem}-{suffix}{extension}")
}
