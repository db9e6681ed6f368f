//! Whisper Resources
//!
//! - **`model`** - the whisper entity
//! - **`ownership`** - the authorization decision point for mutations
//! - **`handlers`** - HTTP handlers for /api/v1/whisper

pub mod handlers;
pub mod model;
pub mod ownership;

pub use model::Whisper;
