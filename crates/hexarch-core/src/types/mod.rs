//! Shared data types: collection re-exports and the architectural role enum.

pub mod collections;
pub mod role;

pub use collections::{BTreeMap, FxHashMap, FxHashSet};
pub use role::ArchRole;
