mod age;
mod avatar;
mod data_stores;
pub mod directory;
mod error;
pub mod landing_grid;
mod member;
mod member_form;
mod member_id;

pub use age::*;
pub use avatar::*;
pub use data_stores::*;
pub use error::*;
pub use member::*;
pub use member_form::*;
pub use member_id::*;
