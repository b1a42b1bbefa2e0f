mod update;
mod upload;

pub use update::update_avatar;
pub use upload::upload_avatar;
