//! HTTP handlers for the credential endpoints

pub mod login;
pub mod signup;
pub mod types;

pub use login::login;
pub use signup::signup;
pub use types::{AccessTokenResponse, LoginRequest, SignupRequest};
