use color_eyre::eyre::{eyre, Result};
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::domain::{Avatar, BlobStore, StoredBlob};

/// Keeps uploads in memory. Can be told to fail so callers' error paths can
/// be exercised without a network.
#[derive(Default)]
pub struct HashmapBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    unavailable: AtomicBool,
}

impl HashmapBlobStore {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn upload_count(&self) -> usize {
        self.blobs.lock().map(|blobs| blobs.len()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl BlobStore for HashmapBlobStore {
    async fn put(&self, avatar: &Avatar) -> Result<StoredBlob> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(eyre!("blob store unavailable"));
        }

        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| eyre!("blob store lock poisoned"))?;
        let pathname = format!("{}/{}", blobs.len() + 1, avatar.file_name());
        blobs.insert(pathname.clone(), avatar.bytes().to_vec());

        let url = format!("memory://blobs/{pathname}");
        Ok(StoredBlob {
            download_url: url.clone(),
            url,
            pathname,
            content_type: avatar.content_type().to_string(),
            content_disposition: format!(
                "inline; filename=\"{}\"",
                avatar.file_name()
            ),
        })
    }
}
