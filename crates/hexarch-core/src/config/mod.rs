//! Configuration system for hexarch.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod architecture_config;
pub mod coupling_config;
pub mod hexarch_config;

pub use architecture_config::ArchitectureConfig;
pub use coupling_config::CouplingConfig;
pub use hexarch_config::{CliOverrides, HexarchConfig};
