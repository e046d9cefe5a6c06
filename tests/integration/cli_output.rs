// tests/integration/cli_output.rs
use assert_cmd::Command;
use predicates::prelude::*;

const EXPECTED_TSV: &str = "Element\tFrequency\n1\t2\n2\t2\n3\t2\n4\t1\n5\t2\n9\t1\n";

fn freq_count() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_freq_count"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_builtin_frequency_table() {
    freq_count().assert().success().code(0).stdout(EXPECTED_TSV).stderr("");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = freq_count().output().unwrap();
    let second = freq_count().output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn printed_counts_sum_to_sequence_length() {
    let output = freq_count().output().unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    let counts: Vec<usize> = text
        .lines()
        .skip(1)
        .map(|line| line.split('\t').nth(1).unwrap().parse().unwrap())
        .collect();
    assert_eq!(counts.iter().sum::<usize>(), 10);
}

#[test]
fn rows_are_strictly_ascending_and_skip_absent_values() {
    let output = freq_count().output().unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    let values: Vec<i32> = text
        .lines()
        .skip(1)
        .map(|line| line.split('\t').next().unwrap().parse().unwrap())
        .collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    for absent in [0, 6, 7, 8] {
        assert!(!values.contains(&absent));
    }
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    freq_count()
        .arg("-vv")
        .assert()
        .success()
        .stdout(EXPECTED_TSV)
        .stderr(predicate::str::contains("tallied 10 elements"));
}

#[test]
fn quiet_suppresses_logs() {
    freq_count().arg("--quiet").assert().success().stdout(EXPECTED_TSV).stderr("");
}

#[test]
fn shows_help() {
    freq_count()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("freq_count").and(predicate::str::contains("--format")));
}

#[test]
fn rejects_unknown_format_with_usage_error() {
    freq_count().args(["--format", "table"]).assert().code(2).stdout("");
}

#[test]
fn rejects_positional_arguments() {
    freq_count().args(["1", "2", "3"]).assert().code(2);
}
