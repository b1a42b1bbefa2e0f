pub mod avatar;
pub mod dashboard;
pub mod landing_grid;
pub mod multipart;
mod register;
mod responses;
pub mod team_member;
mod team_members;

pub use dashboard::*;
pub use landing_grid::*;
pub use register::*;
pub use responses::*;
pub use team_members::*;
