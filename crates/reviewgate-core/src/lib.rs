//! # reviewgate-core
//!
//! Core crate for review-gate. Contains configuration schemas, typed
//! identifiers, session domain events, and the unified error system.
//!
//! This crate has **no** internal dependencies on other review-gate crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
