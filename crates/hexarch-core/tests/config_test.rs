//! Tests for the hexarch configuration system.

use std::sync::Mutex;

use hexarch_core::config::{CliOverrides, HexarchConfig};
use hexarch_core::errors::{ConfigError, HexarchErrorCode};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear HEXARCH_ env vars and point HOME at an empty dir so no user config leaks in.
fn isolate_env(home: &std::path::Path) {
    for key in ["HEXARCH_MODULE_ROOT", "HEXARCH_OUTLIER_MULTIPLIER"] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("hexarch.toml"),
        r#"
[architecture]
module_root = "example.com/from-project"
composition_roots = ["internal/wiring"]

[architecture.layer_aliases]
biz = "core"

[coupling]
outlier_multiplier = 3.0
"#,
    )
    .unwrap();

    std::env::set_var("HEXARCH_OUTLIER_MULTIPLIER", "4.5");

    let cli = CliOverrides {
        module_root: Some("example.com/from-cli".to_string()),
        extra_composition_roots: vec!["cmd/tools".to_string()],
        ..Default::default()
    };

    let config = HexarchConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.architecture.module_root.as_deref(), Some("example.com/from-cli"));
    assert_eq!(config.coupling.effective_outlier_multiplier(), 4.5);
    assert_eq!(
        config.architecture.composition_roots,
        vec!["internal/wiring".to_string(), "cmd/tools".to_string()]
    );
    assert_eq!(config.architecture.layer_aliases.get("biz").map(String::as_str), Some("core"));

    isolate_env(home.path());
}

#[test]
fn test_user_config_is_lowest_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".hexarch");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[architecture.layer_aliases]
biz = "orchestrator"
usecases = "orchestrator"
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("hexarch.toml"),
        "[architecture.layer_aliases]\nbiz = \"core\"\n",
    )
    .unwrap();

    let config = HexarchConfig::load(project.path(), None).unwrap();
    let aliases = &config.architecture.layer_aliases;
    assert_eq!(aliases.get("biz").map(String::as_str), Some("core"));
    assert_eq!(aliases.get("usecases").map(String::as_str), Some("orchestrator"));
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = HexarchConfig::load(dir.path(), None).unwrap();

    assert!(config.architecture.module_root.is_none());
    assert!(config.architecture.layer_aliases.is_empty());
    assert!(config.architecture.composition_roots.is_empty());
    assert_eq!(config.coupling.effective_outlier_multiplier(), 2.0);
}

#[test]
fn test_invalid_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("HEXARCH_OUTLIER_MULTIPLIER", "lots");
    let dir = tempdir();
    let result = HexarchConfig::load(dir.path(), None);
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

    isolate_env(home.path());
}

#[test]
fn test_project_parse_error_is_fatal() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("hexarch.toml"), "[architecture\nmodule_root = ").unwrap();
    let err = HexarchConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.coded_string().starts_with("[CONFIG_ERROR]"));
}

#[test]
fn test_validation_rejects_bad_alias_and_multiplier() {
    let err = HexarchConfig::from_toml("[architecture.layer_aliases]\nbiz = \"kernel\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "architecture.layer_aliases.biz"));

    let err = HexarchConfig::from_toml("[architecture.layer_aliases]\nmisc = \"unclassified\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let err = HexarchConfig::from_toml("[coupling]\noutlier_multiplier = 0.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "coupling.outlier_multiplier"));
}

#[test]
fn test_unknown_keys_ignored_and_roundtrip() {
    let config = HexarchConfig::from_toml(
        r#"
[architecture]
module_root = "example.com/svc"
future_option = true

[telemetry]
enabled = false
"#,
    )
    .unwrap();
    assert_eq!(config.effective_module_root("ignored"), "example.com/svc");

    let toml = config.to_toml().unwrap();
    let reparsed = HexarchConfig::from_toml(&toml).unwrap();
    assert_eq!(reparsed.architecture.module_root.as_deref(), Some("example.com/svc"));
}

#[test]
fn test_effective_module_root_falls_back_to_detected() {
    let config = HexarchConfig::default();
    assert_eq!(config.effective_module_root("example.com/detected"), "example.com/detected");
}
