//! User domain entities.

pub mod group;
pub mod model;

pub use group::ADMIN_GROUP;
pub use model::User;
