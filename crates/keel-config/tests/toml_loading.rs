//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use keel_config::{ConfigError, KeelConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[logging]
filter = "info,keel_schema=trace"
ansi = false
with_target = true

[registry]
seal_on_bootstrap = false
"#,
        )?;

        let config: KeelConfig = Figment::from(Serialized::defaults(KeelConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.logging.filter, "info,keel_schema=trace");
        assert!(!config.logging.ansi);
        assert!(config.logging.with_target);
        assert!(!config.registry.seal_on_bootstrap);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[logging]\nfilter = \"debug\"\n")?;

        let config: KeelConfig = Figment::from(Serialized::defaults(KeelConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.logging.filter, "debug");
        assert!(config.logging.ansi);
        assert!(config.registry.seal_on_bootstrap);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".keel")?;
        jail.create_file(".keel/config.toml", "[logging]\nfilter = \"keel=debug\"\n")?;

        let config = KeelConfig::load().expect("config loads");
        assert_eq!(config.logging.filter, "keel=debug");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".keel")?;
        jail.create_file(".keel/config.toml", "[logging]\nfilter = \"info\"\n")?;
        jail.set_env("KEEL_LOGGING__FILTER", "trace");
        jail.set_env("KEEL_REGISTRY__SEAL_ON_BOOTSTRAP", "false");

        let config = KeelConfig::load().expect("config loads");
        assert_eq!(config.logging.filter, "trace");
        assert!(!config.registry.seal_on_bootstrap);
        Ok(())
    });
}

#[test]
fn env_layer_alone_maps_nested_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("KEEL_LOGGING__WITH_TARGET", "true");

        let config: KeelConfig = Figment::from(Serialized::defaults(KeelConfig::default()))
            .merge(Env::prefixed("KEEL_").split("__"))
            .extract()?;

        assert!(config.logging.with_target);
        Ok(())
    });
}

#[test]
fn blank_filter_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("KEEL_LOGGING__FILTER", " ");

        let result = KeelConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
