mod common;

use std::fs;

use noether_core::AlgebraError;
use noether_module::Module;
use noether_thy::serde::{from_json_slice, to_canonical_json_bytes};
use noether_thy::{check_local_freeness, CheckPolicy, LocalFreenessReport};

use common::demo_ring;

#[test]
fn report_json_roundtrip() -> Result<(), AlgebraError> {
    let ring = demo_ring();
    let module = Module::free(ring.poly_ring(), "P", 3);
    let report = check_local_freeness(&ring, &module, &CheckPolicy::default())?;
    let bytes = report.to_bytes()?;
    let restored: LocalFreenessReport = from_json_slice(&bytes)?;
    assert_eq!(restored, report);
    assert_eq!(to_canonical_json_bytes(&restored)?, bytes);
    Ok(())
}

#[test]
fn canonical_json_sorts_keys() -> Result<(), AlgebraError> {
    let bytes = to_canonical_json_bytes(&CheckPolicy::default())?;
    let text = String::from_utf8(bytes).expect("utf8");
    assert_eq!(
        text,
        r#"{"max_reduction_steps":10000,"max_split_depth":64,"record_diagnostics":true,"short_circuit":true}"#
    );
    Ok(())
}

#[test]
fn partial_policy_yaml_fills_defaults() -> Result<(), AlgebraError> {
    let policy = CheckPolicy::from_yaml_str("short_circuit: false\nmax_split_depth: 8\n")?;
    assert!(!policy.short_circuit);
    assert_eq!(policy.max_split_depth, 8);
    assert_eq!(policy.max_reduction_steps, 10_000);
    assert!(policy.record_diagnostics);
    Ok(())
}

#[test]
fn policy_file_is_loaded_from_disk() -> Result<(), AlgebraError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("policy.yaml");
    fs::write(&path, "max_reduction_steps: 50\nrecord_diagnostics: false\n").expect("write");
    let policy = CheckPolicy::load(&path)?;
    assert_eq!(policy.limits().max_steps, 50);
    assert!(!policy.record_diagnostics);

    let missing = CheckPolicy::load(&dir.path().join("absent.yaml")).expect_err("missing file");
    assert_eq!(missing.info().code, "policy-read");

    let malformed = CheckPolicy::from_yaml_str("short_circuit: [").expect_err("bad yaml");
    assert_eq!(malformed.info().code, "policy-yaml");
    Ok(())
}
