//! Integration tests for configuration loading from files

use std::{io::Write, time::Duration};

use infrastructure::AppConfig;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn file_values_override_defaults() {
    let file = config_file(
        r#"
[polling]
interval_secs = 10

[notifications]
dismiss_after_ms = 1500

[filter]
sender = "hello@provider.test"
subject = "Welcome Aboard"

[clipboard]
enabled = true
command = "xclip"
args = ["-selection", "clipboard"]

[telemetry]
json = true
"#,
    );

    let config = AppConfig::load_from(file.path()).expect("config should load");

    assert_eq!(config.polling.interval_secs, 10);
    assert_eq!(config.notifications.dismiss_after_ms, 1500);
    assert_eq!(config.filter.sender, "hello@provider.test");
    assert!(config.clipboard.enabled);
    assert_eq!(config.clipboard.args, vec!["-selection", "clipboard"]);
    assert!(config.telemetry.json);

    let controller = config.controller_config();
    assert_eq!(controller.poll_interval, Duration::from_secs(10));
    assert_eq!(controller.notification_ttl, Duration::from_millis(1500));
    assert_eq!(controller.welcome_filter.sender(), "hello@provider.test");
    assert_eq!(controller.welcome_filter.subject_fragment(), "welcome aboard");
}

#[test]
fn empty_file_yields_defaults() {
    let file = config_file("");
    let config = AppConfig::load_from(file.path()).expect("config should load");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn invalid_values_are_rejected() {
    let file = config_file("[polling]\ninterval_secs = 0\n");
    let err = AppConfig::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("interval_secs"), "{err}");
}

#[test]
fn wrong_types_are_rejected() {
    let file = config_file("[notifications]\ndismiss_after_ms = \"soon\"\n");
    assert!(AppConfig::load_from(file.path()).is_err());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    assert!(AppConfig::load_from(dir.path().join("absent.toml")).is_err());
}
