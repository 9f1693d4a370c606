//! Authentication Module
//!
//! This module handles credential storage, sign-in and session tokens.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token issuance and verification
//! - **`users`** - Sign-up and sign-in against the shared store
//! - **`handlers`** - HTTP handlers for `/signup` and `/signin`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - PasswordHasher
//! ├── sessions.rs     - TokenCodec
//! ├── users.rs        - CredentialService
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     └── signin.rs   - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username + password → bcrypt hash stored (overwrites)
//! 2. **Signin**: username + password → hash verified → token issued as `token` cookie
//! 3. **Todo requests**: token resolved by `middleware::auth` → username
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs, stateless, expiring after 5 minutes
//! - Invalid credentials return 401 (no information leakage)

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Credential service
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{signin, signup, Credentials, SignInResponse};
pub use password::PasswordHasher;
pub use sessions::{Claims, SessionToken, TokenCodec};
pub use users::CredentialService;
