//! HTTP Error Module
//!
//! Error types for the HTTP boundary and their conversions.
//!
//! - **`types`** - the [`ApiError`] taxonomy and status-code mapping
//! - **`conversion`** - `IntoResponse` and From-impls for service errors
//!
//! Handlers return `Result<Json<_>, ApiError>` and rely on the
//! conversions here; no handler constructs status codes by hand.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
