//! Session store: sole owner and writer of the authentication state.

pub mod action;
pub mod store;

pub use action::SessionAction;
pub use store::{SessionStore, SessionSubscription};
