//! End-to-end architecture analysis: one graph build, every query against it.

pub mod types;
pub mod analyzer;

pub use types::ArchitectureReport;
pub use analyzer::ArchitectureAnalyzer;
