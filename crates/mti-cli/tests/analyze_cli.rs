// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use mti_cli::{AnalyzeArgs, OutputFormat, handle_analyze};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const PRICES: &str = "\
open,close,volume,symbol
1.00,1.10,100,AAA
2.00,2.10,110,AAA
3.00,3.10,120,AAA
2.00,2.10,115,AAA
1.00,1.10,105,AAA
1.00,1.10,105,AAA
";

fn write_input(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("input.csv");
    fs::write(&path, body).expect("write input");
    path
}

fn args(input: PathBuf, output: PathBuf) -> AnalyzeArgs {
    AnalyzeArgs {
        input,
        channels: None,
        tolerance: None,
        config: None,
        output: Some(output),
        summary_csv: None,
        display_points: None,
        format: OutputFormat::Json,
    }
}

#[test]
fn json_report_contains_intervals_records_and_skipped_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path(), PRICES);
    let output = dir.path().join("report.json");
    let summary = dir.path().join("summary.csv");

    let mut analyze = args(input, output.clone());
    analyze.summary_csv = Some(summary.clone());
    analyze.display_points = Some(1000);
    handle_analyze(&analyze).expect("analysis should succeed");

    let report: Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read report")).expect("JSON");
    assert_eq!(report["input"]["rows"], 6);
    assert_eq!(
        report["result"]["channels"],
        serde_json::json!(["open", "close", "volume"])
    );
    assert_eq!(report["result"]["skipped_channels"], serde_json::json!(["symbol"]));

    let merged = report["result"]["merged_intervals"]
        .as_array()
        .expect("merged intervals array");
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0]["type"], "increasing");
    assert_eq!(
        (merged[0]["start"].as_u64(), merged[0]["end"].as_u64()),
        (Some(0), Some(2))
    );
    assert_eq!(merged[1]["type"], "decreasing");
    assert_eq!(
        (merged[1]["start"].as_u64(), merged[1]["end"].as_u64()),
        (Some(2), Some(5))
    );

    assert_eq!(report["records"][1]["interval_id"], 2);
    assert_eq!(report["display"]["step"], 1);
    assert_eq!(report["result"]["diagnostics"]["schema_version"], 1);

    let csv = fs::read_to_string(&summary).expect("read summary CSV");
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(
        "interval_id,type,start_index,end_index,length,total_change,open_start"
    ));
    assert!(lines[1].starts_with("1,increasing,0,2,2,"));
}

#[test]
fn channel_and_tolerance_flags_override_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path(), "a,b\n0,0\n1,0\n2,1\n3,2\n");
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"channels":["a","b"],"tolerance":0.0}"#).expect("write config");
    let output = dir.path().join("report.json");

    let mut with_config = args(input.clone(), output.clone());
    with_config.config = Some(config.clone());
    handle_analyze(&with_config).expect("analysis should succeed");
    let report: Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read report")).expect("JSON");
    // b is flat over the first step, so the joint run starts at row 1.
    assert_eq!(report["result"]["merged_intervals"][0]["start"], 1);

    let mut only_a = args(input, output.clone());
    only_a.config = Some(config);
    only_a.channels = Some(vec!["a".into()]);
    handle_analyze(&only_a).expect("analysis should succeed");
    let report: Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read report")).expect("JSON");
    assert_eq!(report["result"]["channels"], serde_json::json!(["a"]));
    assert_eq!(report["result"]["merged_intervals"][0]["start"], 0);
    assert_eq!(report["result"]["merged_intervals"][0]["end"], 3);
}

#[test]
fn blank_nan_and_infinite_cells_all_skip_the_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("report.json");

    for missing in ["", "NaN", "inf"] {
        let body = format!("a,b\n1,1\n2,{missing}\n3,3\n4,4\n");
        let input = write_input(dir.path(), &body);
        handle_analyze(&args(input, output.clone())).expect("analysis should succeed");

        let report: Value =
            serde_json::from_str(&fs::read_to_string(&output).expect("read report")).expect("JSON");
        assert_eq!(report["result"]["channels"], serde_json::json!(["a"]), "cell '{missing}'");
        assert_eq!(
            report["result"]["skipped_channels"],
            serde_json::json!(["b"]),
            "cell '{missing}'"
        );
        assert_eq!(report["result"]["merged_intervals"][0]["end"], 3);
    }
}

#[test]
fn text_format_writes_the_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path(), PRICES);
    let output = dir.path().join("report.txt");

    let mut analyze = args(input, output.clone());
    analyze.format = OutputFormat::Text;
    handle_analyze(&analyze).expect("analysis should succeed");

    let text = fs::read_to_string(&output).expect("read report");
    assert!(text.starts_with("Columns analyzed: [open, close, volume]\n"));
    assert!(text.contains("Skipped non-numeric columns: [symbol]\n"));
    assert!(text.contains("Total merged intervals: 2\n"));
}

#[test]
fn unknown_channel_is_an_invalid_input_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path(), PRICES);
    let mut analyze = args(input, dir.path().join("report.json"));
    analyze.channels = Some(vec!["high".into()]);

    let err = handle_analyze(&analyze).expect_err("unknown channel must fail");
    assert_eq!(err.code(), "invalid_input");
    assert!(err.to_string().contains("unknown channel 'high'"));
}

#[test]
fn binary_prints_error_envelope_and_exits_with_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path(), "a,b\n1,2\n3\n");

    let output = Command::new(env!("CARGO_BIN_EXE_mti"))
        .arg("analyze")
        .arg("--input")
        .arg(&input)
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let envelope: Value = serde_json::from_slice(&output.stderr).expect("stderr should be JSON");
    assert_eq!(envelope["error"]["code"], "csv_error");
    assert!(
        envelope["error"]["message"]
            .as_str()
            .is_some_and(|message| message.starts_with("CSV line 3:"))
    );
}

#[test]
fn binary_reports_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_mti"))
        .arg("--version")
        .output()
        .expect("binary should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
