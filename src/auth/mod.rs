//! Authentication and Credential Handling
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model
//! ├── validate.rs     - Pure signup validation (aggregating)
//! ├── password.rs     - bcrypt hashing/verification
//! ├── credentials.rs  - Credential Store operations over a UserStore
//! ├── tokens.rs       - JWT issuance and verification
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - POST /signup
//!     └── login.rs    - POST /login
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: payload validated → password hashed → user inserted →
//!    token returned
//! 2. **Login**: credentials verified against the stored hash → token
//!    returned
//! 3. **Protected routes**: `Authentication: Bearer <token>` verified by
//!    the gate in `middleware::auth`, yielding a request-scoped principal
//!
//! Tokens are stateless and expire one hour after issue; there is no
//! server-side session record and no revocation list.

pub mod credentials;
pub mod handlers;
pub mod password;
pub mod tokens;
pub mod users;
pub mod validate;

pub use handlers::{login, signup};
pub use tokens::{AuthConfig, AuthTokens, Principal};
pub use users::User;
