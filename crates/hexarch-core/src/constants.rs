//! Shared constants for the hexarch engine.

/// Hexarch version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-level config file name, looked up in the analyzed repository root.
pub const PROJECT_CONFIG_FILE: &str = "hexarch.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "HEXARCH_LOG";

// ---- Coupling ----

/// Default multiplier over the median Ce for coupling outliers.
pub const DEFAULT_OUTLIER_MULTIPLIER: f64 = 2.0;

/// Below this median Ce there is no reliable outlier baseline.
pub const MIN_OUTLIER_BASELINE: f64 = 1.0;

/// Largest distance from the main sequence still classified as on it.
pub const MAIN_SEQUENCE_TOLERANCE: f64 = 0.3;

// ---- Role classification ----

/// Confidence of the `cmd` / module-root override.
pub const ENTRY_POINT_OVERRIDE_CONFIDENCE: f64 = 0.95;

/// Confidence of the `ports` segment override.
pub const PORTS_OVERRIDE_CONFIDENCE: f64 = 0.90;

/// Signals below this confidence are discarded before fusion.
pub const MIN_SIGNAL_CONFIDENCE: f64 = 0.30;

/// Fused confidence needed to commit to a role.
pub const ROLE_COMMIT_THRESHOLD: f64 = 0.70;

/// Boost applied when two or more signals agree.
pub const AGREEMENT_BOOST: f64 = 0.10;

/// Ceiling for any fused confidence.
pub const MAX_FUSED_CONFIDENCE: f64 = 0.95;

/// Naming confidence assigned to user-configured layer aliases.
pub const LAYER_ALIAS_CONFIDENCE: f64 = 0.85;
