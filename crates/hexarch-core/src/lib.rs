//! # hexarch-core
//!
//! Shared vocabulary for the hexarch architecture engine: architectural roles,
//! configuration with layered resolution, per-concern error enums, tracing
//! setup, and named thresholds.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::HexarchConfig;
pub use errors::HexarchErrorCode;
pub use types::ArchRole;
