//! Layering: dependency-direction rules over classified packages.
//!
//! Core and ports must not reach outward into adapters or the application
//! layer, the application layer must not reach into adapters, and adapters
//! only talk to each other along the inbound → outbound direction unless a
//! composition root wires them. Import-cycle membership is reported on top.

pub mod types;
pub mod adapter_layout;
pub mod violations;

pub use types::{AnnotatedPackage, PackageViolation, ViolationKind};
pub use adapter_layout::{adapter_direction, adapter_subtree, AdapterDirection};
pub use violations::{classify_packages, edge_violation, total_violations};
