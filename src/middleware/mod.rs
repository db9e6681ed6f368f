//! Request Middleware
//!
//! Currently just the authentication gate.

pub mod auth;

pub use auth::AuthUser;
