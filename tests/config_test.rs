//! Tests for configuration loading and validation

use eye_mouse::config::Config;

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_yaml_file_round_trip() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("eye_mouse_config_{}.yaml", std::process::id()));

    let mut config = Config::default();
    config.blink.ear_threshold = 0.25;
    config.calibration.frames = 45;
    config.to_file(&path).expect("write config");

    let loaded = Config::from_file(&path).expect("read config");
    assert!((loaded.blink.ear_threshold - 0.25).abs() < 1e-12);
    assert_eq!(loaded.calibration.frames, 45);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(Config::from_file("/nonexistent/path/config.yaml").is_err());
}

#[test]
fn test_garbage_yaml_is_an_error() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("eye_mouse_bad_config_{}.yaml", std::process::id()));
    std::fs::write(&path, "blink: [not, a, mapping").expect("write file");

    assert!(Config::from_file(&path).is_err());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_unknown_keys_are_ignored() {
    // Forward compatibility: extra sections don't break loading
    let config: Config = serde_yaml::from_str("some_future_section:\n  key: 1\n").unwrap();
    assert!(config.validate().is_ok());
}
