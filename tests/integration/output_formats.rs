// tests/integration/output_formats.rs
use assert_cmd::Command;
use serde_json::Value;

fn run_with_format(format: &str) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_freq_count"))
        .env_remove("RUST_LOG")
        .args(["--format", format])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn json_output_matches_tsv_rows() {
    let value: Value = serde_json::from_str(&run_with_format("json")).unwrap();
    assert_eq!(value["total"], 10);

    let rows: Vec<(i64, u64)> = value["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| (row["element"].as_i64().unwrap(), row["frequency"].as_u64().unwrap()))
        .collect();
    assert_eq!(rows, vec![(1, 2), (2, 2), (3, 2), (4, 1), (5, 2), (9, 1)]);
}

#[test]
fn yaml_output_lists_rows() {
    let text = run_with_format("yaml");
    assert!(text.contains("rows:"));
    assert!(text.contains("- element: 9\n  frequency: 1"));
    assert!(text.contains("total: 10"));
}
