//! Server Assembly
//!
//! - **`config`** - environment-loaded configuration
//! - **`state`** - shared application state and `FromRef` wiring
//! - **`init`** - store selection, migrations, router construction

pub mod config;
pub mod init;
pub mod state;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
