//! Directory-name hints.
//!
//! Conventional directory names map to a role with an intrinsic confidence.
//! Configured layer aliases extend or replace entries at a fixed confidence.

use hexarch_core::config::ArchitectureConfig;
use hexarch_core::constants::LAYER_ALIAS_CONFIDENCE;
use hexarch_core::ArchRole;
use rustc_hash::FxHashMap;

use super::types::RoleSignal;

/// Built-in directory-name hints: (segment, role, confidence).
pub const DEFAULT_ROLE_HINTS: &[(&str, ArchRole, f64)] = &[
    // core
    ("domain", ArchRole::Core, 0.85),
    ("domains", ArchRole::Core, 0.85),
    ("entity", ArchRole::Core, 0.80),
    ("entities", ArchRole::Core, 0.80),
    ("model", ArchRole::Core, 0.70),
    ("models", ArchRole::Core, 0.70),
    ("core", ArchRole::Core, 0.75),
    // orchestrator
    ("application", ArchRole::Orchestrator, 0.85),
    ("app", ArchRole::Orchestrator, 0.80),
    ("usecase", ArchRole::Orchestrator, 0.85),
    ("usecases", ArchRole::Orchestrator, 0.85),
    ("service", ArchRole::Orchestrator, 0.75),
    ("services", ArchRole::Orchestrator, 0.75),
    // adapter
    ("adapter", ArchRole::Adapter, 0.85),
    ("adapters", ArchRole::Adapter, 0.85),
    ("infra", ArchRole::Adapter, 0.85),
    ("infrastructure", ArchRole::Adapter, 0.85),
    ("handler", ArchRole::Adapter, 0.80),
    ("handlers", ArchRole::Adapter, 0.80),
    ("controller", ArchRole::Adapter, 0.80),
    ("controllers", ArchRole::Adapter, 0.80),
    ("repository", ArchRole::Adapter, 0.80),
    ("repositories", ArchRole::Adapter, 0.80),
    ("gateway", ArchRole::Adapter, 0.80),
    ("gateways", ArchRole::Adapter, 0.80),
    ("grpc", ArchRole::Adapter, 0.80),
    ("repo", ArchRole::Adapter, 0.75),
    ("http", ArchRole::Adapter, 0.75),
    ("rest", ArchRole::Adapter, 0.75),
    ("db", ArchRole::Adapter, 0.75),
    ("postgres", ArchRole::Adapter, 0.75),
    // ports
    ("ports", ArchRole::Ports, 0.90),
    ("port", ArchRole::Ports, 0.85),
    // entry point
    ("cmd", ArchRole::EntryPoint, 0.95),
];

/// Segment → role lookup, defaults merged with configured aliases.
#[derive(Debug, Clone)]
pub struct NamingTable {
    hints: FxHashMap<String, RoleSignal>,
}

impl NamingTable {
    /// The built-in table with no aliases.
    pub fn defaults() -> Self {
        let hints = DEFAULT_ROLE_HINTS
            .iter()
            .map(|&(segment, role, confidence)| {
                (segment.to_string(), RoleSignal::new(role, confidence))
            })
            .collect();
        Self { hints }
    }

    /// Defaults overlaid with the configured layer aliases.
    pub fn from_config(config: &ArchitectureConfig) -> Self {
        let mut table = Self::defaults();
        for (segment, role) in config.resolved_aliases() {
            table
                .hints
                .insert(segment, RoleSignal::new(role, LAYER_ALIAS_CONFIDENCE));
        }
        table
    }

    pub fn lookup(&self, segment: &str) -> Option<RoleSignal> {
        self.hints.get(&segment.to_ascii_lowercase()).copied()
    }

    /// The deepest segment of `relative_path` with a known hint.
    pub fn signal(&self, relative_path: &str) -> Option<RoleSignal> {
        relative_path
            .split('/')
            .rev()
            .filter(|segment| !segment.is_empty())
            .find_map(|segment| self.lookup(segment))
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

impl Default for NamingTable {
    fn default() -> Self {
        Self::defaults()
    }
}
