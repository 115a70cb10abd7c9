/**
 * Auth Handler Types
 *
 * Request and response bodies for the authentication endpoints.
 */

use serde::{Deserialize, Serialize};

/// Signup request body
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Login request body
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Verify-token request body.
///
/// The token field is optional so an absent token reaches the service
/// as a missing-token failure rather than a deserialization error.
#[derive(Deserialize, Serialize, Debug)]
pub struct VerifyTokenRequest {
    #[serde(default)]
    pub token: Option<String>,
}

/// Signup success body
#[derive(Serialize, Deserialize, Debug)]
pub struct SignupResponse {
    pub success: bool,
}

/// Login success body: the minted bearer token
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    pub email: String,
    pub access_token: String,
    pub token_type: String,
}

/// Verify-token success body
#[derive(Serialize, Deserialize, Debug)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub email: String,
}

/// Current-identity body for GET /api/me
#[derive(Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub email: String,
}
