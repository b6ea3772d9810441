//! Role classification: naming, import-shape and structural signals fused
//! into one architectural role per package.
//!
//! Two path overrides (`cmd` / module root, `ports`) bypass fusion. Every
//! other package is classified by voting over at most three signals.

pub mod types;
pub mod naming;
pub mod signals;
pub mod fusion;
pub mod classifier;

pub use types::{RoleAssignment, RoleSignal};
pub use naming::NamingTable;
pub use fusion::fuse_signals;
pub use classifier::RoleClassifier;
