//! Architectural roles a package can play in a hexagonal layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The architectural role assigned to a package.
///
/// Variant order doubles as the fusion tie-break priority: when two roles
/// collect the same number of votes with the same best confidence, the
/// earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchRole {
    /// Executable wiring: `cmd/...` packages and the module root.
    EntryPoint,
    /// Interface-only packages that define the hexagon's boundary.
    Ports,
    /// Domain model: entities, value objects, business rules.
    Core,
    /// Application services / use cases coordinating the core.
    Orchestrator,
    /// I/O-facing code: HTTP handlers, repositories, gateways.
    Adapter,
    /// Not enough evidence. Never the target of a rule violation.
    Unclassified,
}

impl ArchRole {
    /// All roles in tie-break priority order.
    pub const ALL: [ArchRole; 6] = [
        Self::EntryPoint,
        Self::Ports,
        Self::Core,
        Self::Orchestrator,
        Self::Adapter,
        Self::Unclassified,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::EntryPoint => "entry-point",
            Self::Ports => "ports",
            Self::Core => "core",
            Self::Orchestrator => "orchestrator",
            Self::Adapter => "adapter",
            Self::Unclassified => "unclassified",
        }
    }

    /// Whether the role is a committed classification.
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Unclassified)
    }
}

impl fmt::Display for ArchRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a role name does not match any [`ArchRole`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown architectural role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for ArchRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.name() == normalized)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
