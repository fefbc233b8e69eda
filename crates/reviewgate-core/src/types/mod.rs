//! Core type definitions used across the review-gate workspace.

pub mod id;

pub use id::UserId;
