//! Authentication Handlers Module
//!
//! HTTP handlers for registering and signing in.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── signin.rs   - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`signin`** - POST /signin - User authentication, sets the `token` cookie

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

pub use types::{Credentials, SignInResponse};

pub use signin::signin;
pub use signup::signup;
