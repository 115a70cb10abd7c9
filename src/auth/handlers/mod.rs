//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints. Each handler is a
//! thin JSON adapter over [`crate::auth::AuthService`].
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs    - Handler exports
//! ├── types.rs  - Request/response types
//! ├── signup.rs - POST /api/signup
//! ├── login.rs  - POST /api/login
//! ├── verify.rs - POST /api/verify-token
//! └── me.rs     - GET /api/me (bearer-protected)
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Verify-token handler
pub mod verify;

/// Current identity handler
pub mod me;

pub use types::{
    LoginRequest, LoginResponse, MeResponse, SignupRequest, SignupResponse, VerifyTokenRequest,
    VerifyTokenResponse,
};

pub use login::login;
pub use me::get_me;
pub use signup::signup;
pub use verify::verify_token;
