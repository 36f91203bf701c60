//! Authentication primitives: password hashing and the auth-change listener registry.

mod listeners;
mod password;

pub use listeners::{AuthListeners, Subscription};
pub use password::{hash_password, verify_password};
