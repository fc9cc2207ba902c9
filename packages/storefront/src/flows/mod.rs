//! The two step-flows of the storefront: phone login and payment callback.

pub mod auth;
pub mod messages;
pub mod payment;
