// ABOUTME: End-to-end tests for the breadcalc binary
// ABOUTME: Checks stdout recipe blocks, JSON output, and exit status on bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::{Command, Output};

fn breadcalc(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_breadcalc"));
    for key in [
        "BREADCALC_WEIGHT",
        "BREADCALC_INOCULATION",
        "BREADCALC_HYDRATION",
        "BREADCALC_FORMAT",
        "RUST_LOG",
        "LOG_FORMAT",
    ] {
        command.env_remove(key);
    }
    command
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .expect("failed to run breadcalc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_default_run_prints_four_lines() {
    let output = breadcalc(&[], &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4, "stdout: {text}");
    assert_eq!(lines[0], "Weight: 500");
    assert!(lines[1].starts_with("Flour: 245.09"));
    assert!(lines[2].starts_with("Fluid: 156.86"));
    assert!(lines[3].starts_with("Inoculation: 98.03"));
}

#[test]
fn test_flags_change_inputs() {
    let output = breadcalc(
        &["--weight", "100", "--inoculation", "50", "--hydration", "75"],
        &[],
    );
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("Weight: 100\n"));
    assert!(text.contains("Flour: 45.71"));
}

#[test]
fn test_environment_supplies_inputs() {
    let output = breadcalc(
        &["-i", "50"],
        &[("BREADCALC_WEIGHT", "100"), ("BREADCALC_HYDRATION", "75")],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("Inoculation: 22.85"));
}

#[test]
fn test_json_format_includes_breakdown() {
    let output = breadcalc(&["--format", "json"], &[]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["request"]["hydration_percent"], 70.0);
    assert!((value["breakdown"]["hydration_percent"].as_f64().unwrap() - 70.0).abs() < 1e-9);
    assert!(value["recipe"]["inoculation"].as_f64().unwrap() > 98.0);
}

#[test]
fn test_zero_weight_fails_with_data_error() {
    let output = breadcalc(&["--weight", "0"], &[]);

    assert_eq!(output.status.code(), Some(65));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("weight must be greater than zero"));
}

#[test]
fn test_negative_hydration_fails_in_json_mode() {
    let output = breadcalc(&["--hydration", "-70", "--format", "json"], &[]);

    assert_eq!(output.status.code(), Some(65));
    let value: serde_json::Value = serde_json::from_str(&stderr(&output)).unwrap();
    assert_eq!(value["error"]["code"], "INVALID_INPUT");
    assert_eq!(value["error"]["details"]["field"], "hydration_percent");
}

#[test]
fn test_unparsable_environment_is_config_error() {
    let output = breadcalc(&[], &[("BREADCALC_WEIGHT", "a loaf")]);
    assert_eq!(output.status.code(), Some(78));
    assert!(stderr(&output).contains("BREADCALC_WEIGHT"));
}

#[test]
fn test_config_error_honours_environment_json_format() {
    let output = breadcalc(
        &[],
        &[("BREADCALC_FORMAT", "json"), ("BREADCALC_WEIGHT", "a loaf")],
    );

    assert_eq!(output.status.code(), Some(78));
    let value: serde_json::Value = serde_json::from_str(&stderr(&output)).unwrap();
    assert_eq!(value["error"]["code"], "CONFIG_INVALID");
    assert_eq!(value["error"]["details"]["key"], "BREADCALC_WEIGHT");
}

#[test]
fn test_format_flag_wins_over_environment_on_config_error() {
    let output = breadcalc(
        &["--format", "text"],
        &[("BREADCALC_FORMAT", "json"), ("BREADCALC_WEIGHT", "a loaf")],
    );

    assert_eq!(output.status.code(), Some(78));
    assert!(stderr(&output).starts_with("Error: "));
}

#[test]
fn test_unknown_format_flag_rejected_by_parser() {
    let output = breadcalc(&["--format", "yaml"], &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("yaml"));
}
