//! End-to-end tests for `minitools config` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["config", "show"]);

    assert!(stdout.contains("Decimal Places: 6"), "got: {stdout}");
    assert!(stdout.contains("Base: USD"), "got: {stdout}");
    assert!(stdout.contains("using built-in rates"), "got: {stdout}");
}

#[test]
fn test_config_show_json_schema() {
    let env = TestEnv::new();
    let result = env.run_json(&["config", "show", "--json"]);

    assert_eq!(result["display"]["decimal_places"], 6);
    assert_eq!(result["display"]["uppercase_hex"], true);
    assert_eq!(result["currency"]["base"], "USD");
    assert!(result["currency"].get("rates_file").is_none());

    let data_dir = result["storage"]["data_dir"].as_str().unwrap();
    assert_eq!(data_dir, env.data_dir().to_string_lossy());
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&[
        "config",
        "set",
        "--decimal-places",
        "2",
        "--uppercase-hex",
        "false",
        "--currency-base",
        "eur",
    ]);
    assert!(stdout.contains("Configuration updated successfully"));
    assert!(env.config_dir().join("config.toml").exists());

    let result = env.run_json(&["config", "show", "--json"]);
    assert_eq!(result["display"]["decimal_places"], 2);
    assert_eq!(result["display"]["uppercase_hex"], false);
    assert_eq!(result["currency"]["base"], "EUR");
}

#[test]
fn test_config_set_requires_an_option() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_decimal_places_out_of_range() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set", "--decimal-places", "16"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!env.config_dir().join("config.toml").exists());
}

#[test]
fn test_config_set_invalid_currency_base() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set", "--currency-base", "DOLLARS"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_missing_rates_file() {
    let env = TestEnv::new();
    let missing = env.config_dir().join("nope.json");
    let output = env.run(&["config", "set", "--rates-file", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_data_dir_moves_storage() {
    let env = TestEnv::new();
    let custom = env.config_dir().join("elsewhere");
    env.run_ok(&["config", "set", "--data-dir", custom.to_str().unwrap()]);
    assert!(custom.is_dir());

    env.run_ok(&["favorites", "toggle", "calculator"]);
    assert!(custom.join("favorites.json").exists());
    assert!(!env.data_dir().join("favorites.json").exists());
}

#[test]
fn test_corrupt_config_file_is_reported() {
    let env = TestEnv::new();
    env.write_file("config.toml", "[display\ndecimal_places = ");

    let output = env.run(&["convert", "1", "--from", "meter", "--to", "foot", "-c", "length"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load configuration"));
}

#[test]
fn test_config_set_keeps_corrupt_file() {
    let env = TestEnv::new();
    let broken = "[currency]\nbase = \"EUR\"\n\n[display\ndecimal_places = 2\n";
    let path = env.write_file("config.toml", broken);

    let output = env.run(&["config", "set", "--decimal-places", "3"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load configuration"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), broken);
}

#[test]
fn test_config_show_corrupt_file_is_io_error() {
    let env = TestEnv::new();
    env.write_file("config.toml", "[display\n");

    let output = env.run(&["config", "show", "--json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}
