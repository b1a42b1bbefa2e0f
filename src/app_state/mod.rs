use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{BlobStore, MemberStore};

pub type MemberStoreType = Arc<RwLock<dyn MemberStore + Send + Sync>>;
pub type BlobStoreType = Arc<dyn BlobStore + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub member_store: MemberStoreType,
    pub blob_store: BlobStoreType,
}

impl AppState {
    pub fn new(
        member_store: MemberStoreType,
        blob_store: BlobStoreType,
    ) -> Self {
        Self {
            member_store,
            blob_store,
        }
    }
}
