//! Role classification types.

use hexarch_core::ArchRole;
use serde::{Deserialize, Serialize};

/// One piece of evidence from a single classification method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleSignal {
    pub role: ArchRole,
    /// Confidence in [0, 1].
    pub confidence: f64,
}

impl RoleSignal {
    pub fn new(role: ArchRole, confidence: f64) -> Self {
        Self { role, confidence }
    }
}

/// The resolved role of a package.
///
/// An `Unclassified` assignment may still carry a non-zero confidence: the
/// best evidence found, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: ArchRole,
    pub confidence: f64,
}

impl RoleAssignment {
    pub fn new(role: ArchRole, confidence: f64) -> Self {
        Self { role, confidence }
    }

    pub fn unclassified() -> Self {
        Self::new(ArchRole::Unclassified, 0.0)
    }

    pub fn is_classified(&self) -> bool {
        self.role.is_classified()
    }
}
