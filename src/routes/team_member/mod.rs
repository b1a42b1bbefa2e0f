mod delete_member;
mod get_member;
mod update_member;

pub use delete_member::delete_member;
pub use get_member::get_member;
pub use update_member::update_member;
