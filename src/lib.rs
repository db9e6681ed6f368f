//! Whisper Board
//!
//! Backend for a multi-tenant message board. Users sign up and log in
//! with username/password credentials, receive stateless signed access
//! tokens, and create short messages ("whispers") that only their author
//! may update or delete.
//!
//! # Module Structure
//!
//! - **`auth`** - credential validation and hashing, token issuance and
//!   verification, signup/login handlers
//! - **`middleware`** - the authentication gate (`AuthUser` extractor)
//! - **`whispers`** - the whisper entity, ownership authorization, and
//!   CRUD handlers
//! - **`store`** - persistence traits with in-memory and PostgreSQL
//!   implementations
//! - **`error`** - the HTTP-facing error taxonomy
//! - **`routes`** / **`server`** - router assembly, configuration, state
//!
//! # Request Flow
//!
//! signup/login → credentials validated or verified → token issued →
//! client sends `Authentication: Bearer <token>` → gate verifies it and
//! yields a principal → for update/delete the ownership check runs →
//! store operation.

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod store;
pub mod whispers;
