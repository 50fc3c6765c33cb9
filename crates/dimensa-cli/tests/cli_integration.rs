//! Integration tests driving the built `dimensa` binary

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Output};

fn dimensa(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dimensa"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run dimensa")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_convert_minutes() {
    let output = dimensa(&["convert", "5", "minute", "--to", "second"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "300 s");
}

#[test]
fn test_simplify_to_derived() {
    let output = dimensa(&["simplify", "3", "meter", "second^-1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3 m/s");
}

#[test]
fn test_simplify_json_report() {
    let output = dimensa(&["--json", "simplify", "2500", "gram"]);
    assert!(output.status.success());

    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["value"], 2.5);
    assert_eq!(report["display"], "2.5 kg");
    assert_eq!(report["dimensions"][0]["unit"], "gram");
    assert_eq!(report["dimensions"][0]["prefix"], "kilo");
    assert_eq!(report["dimensions"][0]["power"], 1);
}

#[test]
fn test_decimal_mode() {
    let output = dimensa(&["--decimal", "--json", "convert", "2", "hour", "--to", "minute"]);
    assert!(output.status.success());
    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["value"], 120.0);
    assert_eq!(report["dimensions"][0]["unit"], "minute");
}

#[test]
fn test_incommensurable_fails() {
    let output = dimensa(&["convert", "1", "meter", "--to", "second"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Incommensurable"), "{stderr}");
}

#[test]
fn test_unknown_unit_fails() {
    let output = dimensa(&["simplify", "1", "parsec"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown unit: parsec"), "{stderr}");
}

#[test]
fn test_units_listing() {
    let output = dimensa(&["units", "--definition", "mass"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("mass (Mass)"));
    assert!(text.contains("gram"));
    assert!(!text.contains("meter"));

    let output = dimensa(&["--json", "units"]);
    let units: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let keys: Vec<&str> = units
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|u| u["key"].as_str())
        .collect();
    assert!(keys.contains(&"stone"));
    assert!(!keys.contains(&"velocityMeterPerSecond"));
}

#[test]
fn test_hidden_definition_reported() {
    let output = dimensa(&["units", "--definition", "velocity"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'velocity' is hidden"), "{stderr}");

    let output = dimensa(&["units", "--definition", "luminance"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("luminance"), "{stderr}");
}

#[test]
fn test_vector_definition_listed_when_allowed() {
    let path = std::env::temp_dir().join(format!("dimensa-vectors-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"allowVectorDimensions": true}"#).unwrap();

    let output = dimensa(&[
        "--config",
        path.to_str().unwrap(),
        "--json",
        "units",
        "--definition",
        "velocity",
    ]);
    std::fs::remove_file(&path).unwrap();
    assert!(output.status.success());
    let units: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(units[0]["key"], json!("velocityMeterPerSecond"));
    assert_eq!(units[0]["definition"], json!("velocity"));
}

#[test]
fn test_config_file() {
    let path = std::env::temp_dir().join(format!("dimensa-settings-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, r#"{{"allowDerivedDimensions": false}}"#).unwrap();
    drop(file);

    let output = dimensa(&[
        "--config",
        path.to_str().unwrap(),
        "simplify",
        "3",
        "meter",
        "second^-1",
    ]);
    std::fs::remove_file(&path).unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3 m·s^-1");
}

#[test]
fn test_invalid_config_rejected() {
    let output = dimensa(&["--config", "/nonexistent/dimensa.json", "units"]);
    assert!(!output.status.success());
}
