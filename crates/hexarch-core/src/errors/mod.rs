//! Error handling for hexarch.
//! One error enum per concern, `thiserror` only, zero `anyhow`.
//!
//! The graph engine itself is total over its input and never fails; errors
//! only arise at the configuration and fact-loading boundaries.

pub mod config_error;
pub mod error_code;
pub mod facts_error;

pub use config_error::ConfigError;
pub use error_code::HexarchErrorCode;
pub use facts_error::FactsError;
