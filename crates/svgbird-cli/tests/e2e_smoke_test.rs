use std::fs;

use tempfile::tempdir;

use svgbird_cli::{Args, InputKind, SvgbirdError, run};

fn args(input: &str, kind: InputKind, output: &str) -> Args {
    Args {
        input: input.to_string(),
        kind,
        output: Some(output.to_string()),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_value_report_written_to_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("report.txt");

    run(&args("-2", InputKind::Value, output.to_str().unwrap())).expect("run should succeed");

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("written: value -2.0\n"));
    assert!(report.contains("bits:    0xc000000000000000\n"));
    assert!(report.contains("type:    0x00000000\n"));
}

#[test]
fn e2e_tag_report_with_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("report.txt");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[report]\nradix = \"decimal\"\n").unwrap();

    let mut args = args("0x10", InputKind::Type, output.to_str().unwrap());
    args.config = Some(config.to_string_lossy().to_string());
    run(&args).expect("run should succeed");

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("written: type 16\n"));
    assert!(report.contains("bytes:   10 00 00 00 00 00 00 00\n"));
    assert!(report.contains("type:    16\n"));
}

#[test]
fn e2e_invalid_input_fails_without_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("report.txt");

    let err = run(&args("not-a-number", InputKind::Value, output.to_str().unwrap()))
        .expect_err("invalid input should fail");

    assert!(matches!(err, SvgbirdError::Input { .. }));
    assert!(!output.exists());
}

#[test]
fn e2e_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("report.txt");

    let mut args = args("1", InputKind::Value, output.to_str().unwrap());
    args.config = Some(temp_dir.path().join("absent.toml").to_string_lossy().to_string());

    let err = run(&args).expect_err("missing config should fail");
    assert!(matches!(err, SvgbirdError::Config(_)));
}
