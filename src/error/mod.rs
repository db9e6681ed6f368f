//! Error Handling
//!
//! - **`types`** - the `ApiError` taxonomy and its status-code mapping
//! - **`conversion`** - conversions from internal errors and the axum
//!   `IntoResponse` implementation

pub mod conversion;
pub mod types;

pub use types::ApiError;
