use std::fs;
use std::process::{Command, Output};

use serde_json::Value;

fn noether(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_noether"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run noether")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8")
}

#[test]
fn default_run_checks_both_theorems() {
    let output = noether(&[]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Condition 1 (Projective): TRUE"));
    assert!(text.contains("Condition 2 (Free at primes): TRUE"));
    assert!(text.contains("Condition 3 (Free at maximals): TRUE"));
    assert!(text.contains("All equivalent: YES"));
    assert!(text.contains("  m1 = (x, y, z) [maximal] local rank 3, free"));
    assert!(text.contains("Associated Primes: p1=(x, z) p2=(y)"));
    assert!(text.contains("Radical of Ann(M): (x*y, y*z)"));
    assert!(text.contains("Theorem verification: PASS"));
    assert!(text.contains("microseconds"));
}

#[test]
fn json_report_is_parseable() {
    let output = noether(&["local-freeness", "--json"]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(stdout(&output).trim()).expect("json");
    assert_eq!(value["result"]["equivalent"], Value::Bool(true));
    assert_eq!(value["module_rank"], Value::from(3));
    let labels: Vec<&str> = value["diagnostics"]
        .as_array()
        .expect("diagnostics")
        .iter()
        .filter_map(|row| row["label"].as_str())
        .collect();
    assert_eq!(labels, vec!["m1", "p1", "m2"]);
    assert_eq!(value["analysis_hash"].as_str().map(str::len), Some(64));
}

#[test]
fn fixture_file_with_torsion_relation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let fixture = dir.path().join("fixture.yaml");
    fs::write(
        &fixture,
        r#"
ring:
  name: B
  variables: [x, y]
ideals:
  - label: q
    generators: ["y"]
  - label: m
    generators: ["x - 1", "y"]
module:
  name: T
  rank: 2
  relations:
    - ["x", "0"]
quotient:
  name: N
  ideal: ["x^2", "x*y"]
"#,
    )
    .expect("write fixture");
    let path = fixture.to_str().expect("path");

    let output = noether(&["local-freeness", "--fixture", path, "--json"]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(stdout(&output).trim()).expect("json");
    assert_eq!(value["result"]["condition1"], Value::Bool(false));
    assert_eq!(value["result"]["condition2"], Value::Bool(true));
    assert_eq!(value["result"]["condition3"], Value::Bool(true));
    assert_eq!(value["result"]["equivalent"], Value::Bool(false));

    let output = noether(&["associated-primes", "--fixture", path]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Embedded Primes: (x, y)"));
    assert!(text.contains("Theorem verification: PASS"));
}

#[test]
fn policy_file_is_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let policy = dir.path().join("policy.yaml");
    fs::write(&policy, "record_diagnostics: false\n").expect("write policy");
    let output = noether(&[
        "local-freeness",
        "--policy",
        policy.to_str().expect("path"),
        "--json",
    ]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(stdout(&output).trim()).expect("json");
    assert_eq!(value["diagnostics"], Value::Array(Vec::new()));
    assert_eq!(value["provenance"]["policy"]["record_diagnostics"], Value::Bool(false));
}

#[test]
fn malformed_fixture_exits_non_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let fixture = dir.path().join("bad.yaml");
    fs::write(
        &fixture,
        "ring: {name: A, variables: [x]}\nmodule: {name: P, rank: 1}\nquotient: {name: M, ideal: [\"w\"]}\n",
    )
    .expect("write fixture");
    let output = noether(&["--fixture", fixture.to_str().expect("path")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("unknown-variable"));

    let missing = noether(&["--fixture", "/nonexistent/fixture.yaml"]);
    assert!(!missing.status.success());
}
