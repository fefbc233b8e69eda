//! Role requirements and classification.

pub mod classifier;
pub mod requirement;

pub use classifier::{classify, is_admin, is_moderator};
pub use requirement::RoleRequirement;
