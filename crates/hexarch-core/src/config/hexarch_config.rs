//! Top-level hexarch configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ArchitectureConfig, CouplingConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::types::ArchRole;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`HEXARCH_*`)
/// 3. Project config (`hexarch.toml` in the repository root)
/// 4. User config (`~/.hexarch/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HexarchConfig {
    pub architecture: ArchitectureConfig,
    pub coupling: CouplingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub module_root: Option<String>,
    pub outlier_multiplier: Option<f64>,
    /// Appended to the configured composition roots rather than replacing them.
    pub extra_composition_roots: Vec<String>,
}

impl HexarchConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only parse failures are fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: HexarchConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &HexarchConfig) -> Result<(), ConfigError> {
        if let Some(multiplier) = config.coupling.outlier_multiplier {
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "coupling.outlier_multiplier".to_string(),
                    message: "must be a finite number greater than 0".to_string(),
                });
            }
        }
        for (dir, role) in &config.architecture.layer_aliases {
            match role.parse::<ArchRole>() {
                Ok(role) if role.is_classified() => {}
                Ok(_) => {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("architecture.layer_aliases.{dir}"),
                        message: "an alias cannot map to unclassified".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("architecture.layer_aliases.{dir}"),
                        message: e.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The module root to analyze: configured value wins over the extractor's.
    pub fn effective_module_root<'a>(&'a self, detected: &'a str) -> &'a str {
        self.architecture
            .module_root
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(detected)
    }

    /// Returns the user config path: `~/.hexarch/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".hexarch").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut HexarchConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HexarchConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Scalars override only when `Some`; alias
    /// tables merge key by key; root lists replace when non-empty.
    fn merge(base: &mut HexarchConfig, other: &HexarchConfig) {
        if other.architecture.module_root.is_some() {
            base.architecture.module_root = other.architecture.module_root.clone();
        }
        for (dir, role) in &other.architecture.layer_aliases {
            base.architecture
                .layer_aliases
                .insert(dir.clone(), role.clone());
        }
        if !other.architecture.composition_roots.is_empty() {
            base.architecture.composition_roots = other.architecture.composition_roots.clone();
        }

        if other.coupling.outlier_multiplier.is_some() {
            base.coupling.outlier_multiplier = other.coupling.outlier_multiplier;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut HexarchConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("HEXARCH_MODULE_ROOT") {
            if !val.trim().is_empty() {
                config.architecture.module_root = Some(val.trim().to_string());
            }
        }
        if let Ok(val) = std::env::var("HEXARCH_OUTLIER_MULTIPLIER") {
            let v = val.parse::<f64>().map_err(|e| ConfigError::InvalidValue {
                field: "HEXARCH_OUTLIER_MULTIPLIER".to_string(),
                message: e.to_string(),
            })?;
            config.coupling.outlier_multiplier = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut HexarchConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.module_root {
            config.architecture.module_root = Some(v.clone());
        }
        if let Some(v) = cli.outlier_multiplier {
            config.coupling.outlier_multiplier = Some(v);
        }
        config
            .architecture
            .composition_roots
            .extend(cli.extra_composition_roots.iter().cloned());
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
