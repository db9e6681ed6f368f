//! Route Tables
//!
//! - **`auth_routes`** - /signup, /login
//! - **`whisper_routes`** - /api/v1/whisper CRUD
//! - **`router`** - the combined application router

pub mod auth_routes;
pub mod router;
pub mod whisper_routes;

pub use router::create_router;
