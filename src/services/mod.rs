pub mod data_stores;
pub mod directory_view;
mod hashmap_blob_store;
mod http_blob_store;
pub mod member_service;

pub use hashmap_blob_store::HashmapBlobStore;
pub use http_blob_store::HttpBlobStore;
