//! Server setup and configuration
//!
//! - **`config`** - environment-supplied `ServerConfig`
//! - **`init`** - store construction and router assembly
//! - **`state`** - shared `AppState`

/// Configuration loading
pub mod config;

/// Application assembly
pub mod init;

/// Shared application state
pub mod state;

pub use init::create_app;
pub use state::AppState;
