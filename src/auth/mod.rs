//! Authentication Module
//!
//! Identity lifecycle and token management: signup, login, and
//! stateless token verification.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── service.rs  - AuthService (signup / login / verify_token)
//! ├── password.rs - bcrypt hashing
//! ├── tokens.rs   - JWT issuance and verification
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → salted hash stored → `{success}`
//! 2. **Login**: credentials verified → signed JWT returned
//! 3. **Verify**: token + shared secret → decoded claims (no store access)
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and compared in
//!   constant time
//! - Tokens expire after the configured TTL; there is no revocation
//! - Failed checks return 401 without distinguishing detail beyond the
//!   error code; internal faults never leak to clients

/// The auth service and its error types
pub mod service;

/// Password hashing
pub mod password;

/// JWT issuance and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use service::{AuthService, IssuedToken, LoginError, SignupError, VerifyError};
pub use tokens::{TokenClaims, TokenError, TokenIssuer};
