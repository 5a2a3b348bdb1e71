//! End-to-end tests for `minitools calc` and `minitools history`.

mod fixtures;
use fixtures::*;

#[test]
fn test_calc_chains_left_to_right() {
    let env = TestEnv::new();
    assert_eq!(env.run_ok(&["calc", "12+3*2="]).trim(), "30");
    assert_eq!(env.run_ok(&["calc", "2+3*4"]).trim(), "20");
}

#[test]
fn test_calc_division_by_zero() {
    let env = TestEnv::new();
    let output = env.run(&["calc", "1/0="]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "Error");
}

#[test]
fn test_calc_rejects_unknown_key() {
    let env = TestEnv::new();
    let output = env.run(&["calc", "2^3"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_calc_records_history() {
    let env = TestEnv::new();
    env.run_ok(&["calc", "12+3*2="]);
    env.run_ok(&["calc", "7*6"]);

    let result = env.run_json(&["history", "list", "--json"]);
    assert_eq!(result["tool"], "calculator");
    assert_eq!(result["capacity"], 50);

    let entries = result["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["input"], "12+3*2");
    assert_eq!(entries[0]["output"], "30");
    assert_eq!(entries[1]["input"], "7*6");
    assert_eq!(entries[1]["output"], "42");
    assert!(entries[0]["timestamp"].is_string());
}

#[test]
fn test_calc_no_history_flag() {
    let env = TestEnv::new();
    env.run_ok(&["calc", "1+1", "--no-history"]);

    let result = env.run_json(&["history", "list", "--json"]);
    assert!(result["entries"].as_array().unwrap().is_empty());
    assert!(!env.data_dir().join("calculator_history.json").exists());
}

#[test]
fn test_history_clear() {
    let env = TestEnv::new();
    env.run_ok(&["calc", "1+1"]);
    env.run_ok(&["history", "clear", "--tool", "calculator"]);

    let stdout = env.run_ok(&["history", "list"]);
    assert!(stdout.contains("No calculator history"), "got: {stdout}");
}

#[test]
fn test_history_chat_is_separate() {
    let env = TestEnv::new();
    env.run_ok(&["calc", "1+1"]);

    let result = env.run_json(&["history", "list", "--tool", "chat", "--json"]);
    assert_eq!(result["capacity"], 10);
    assert!(result["entries"].as_array().unwrap().is_empty());
}

#[test]
fn test_history_unknown_tool() {
    let env = TestEnv::new();
    let output = env.run(&["history", "list", "--tool", "weather"]);
    assert_eq!(output.status.code(), Some(1));
}
