//! Structural architecture analysis.
//!
//! - `coupling`: package import graph, cycles, Martin metrics, outliers.
//! - `roles`: multi-signal architectural role classification.
//! - `layering`: dependency-direction rules and per-package violations.
//! - `architecture`: one-call analyzer producing the full report.

pub mod architecture;
pub mod coupling;
pub mod layering;
pub mod roles;
