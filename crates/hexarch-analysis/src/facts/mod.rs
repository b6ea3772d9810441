//! Per-file structural facts supplied by the source extractor.
//!
//! The extractor itself lives outside this crate; these types are the
//! boundary it writes to.

pub mod types;

pub use types::*;
