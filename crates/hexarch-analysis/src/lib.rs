//! # hexarch-analysis
//!
//! Import-graph engine for hexagonal architecture scoring.
//! Builds a package dependency graph from extracted per-file facts, detects
//! import cycles, computes Martin coupling metrics, classifies each package's
//! architectural role, and flags dependency-direction violations.

pub mod facts;
pub mod structural;

pub use structural::architecture::{ArchitectureAnalyzer, ArchitectureReport};
pub use structural::coupling::{ImportGraph, ImportGraphBuilder, PackageNode};
