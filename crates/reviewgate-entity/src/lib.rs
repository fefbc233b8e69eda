//! # reviewgate-entity
//!
//! Domain models for review-gate: the user record delivered by the
//! authentication service and the session value owned by the session
//! store. User records are deserialized leniently; data that cannot be
//! interpreted is dropped so that role checks fail closed.

pub mod session;
pub mod user;
