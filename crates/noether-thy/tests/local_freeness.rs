mod common;

use noether_core::AlgebraError;
use noether_module::Module;
use noether_thy::{check_local_freeness, CheckPolicy, TheoremResult};

use common::{demo_ring, ring_with, torsion_module};

#[test]
fn equivalent_is_derived_from_conditions() {
    assert!(TheoremResult::new(true, true, true).equivalent);
    assert!(TheoremResult::new(false, false, false).equivalent);
    assert!(!TheoremResult::new(false, true, true).equivalent);
    assert!(!TheoremResult::new(true, true, false).equivalent);
}

#[test]
fn free_module_satisfies_all_conditions() -> Result<(), AlgebraError> {
    let ring = demo_ring();
    let module = Module::free(ring.poly_ring(), "P", 3);
    let report = check_local_freeness(&ring, &module, &CheckPolicy::default())?;
    assert_eq!(report.result, TheoremResult::new(true, true, true));
    assert!(report.result.equivalent);
    assert_eq!(report.module_rank, 3);
    assert_eq!(report.generic_rank, 3);

    let labels: Vec<&str> = report.diagnostics.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["m1", "p1", "m2"]);
    let p1 = &report.diagnostics[1];
    assert!(p1.prime && !p1.maximal);
    assert_eq!(p1.local_rank, Some(3));
    assert_eq!(p1.free, Some(true));
    assert_eq!(report.analysis_hash.len(), 64);
    Ok(())
}

#[test]
fn torsion_relation_fails_every_condition_together() -> Result<(), AlgebraError> {
    let ring = demo_ring();
    let module = torsion_module(&ring);
    let report = check_local_freeness(&ring, &module, &CheckPolicy::default())?;
    assert_eq!(report.result, TheoremResult::new(false, false, false));
    assert!(report.result.equivalent);

    let m1 = &report.diagnostics[0];
    assert_eq!(m1.free, Some(false));
    // both conditions stop at m1
    assert_eq!(report.diagnostics[1].free, None);
    assert_eq!(report.diagnostics[2].free, None);
    Ok(())
}

#[test]
fn relation_vanishing_at_a_skewed_point_fails_every_condition() -> Result<(), AlgebraError> {
    let ring = ring_with(&[("m", &["x + y", "y - 2", "z + x"])]);
    let poly = ring.poly_ring();
    let relation = vec![poly.parse("z - 2")?, poly.parse("0")?, poly.parse("0")?];
    let module = Module::new(
        poly,
        "T",
        vec!["e1".into(), "e2".into(), "e3".into()],
        vec![relation],
    )?;
    let report = check_local_freeness(&ring, &module, &CheckPolicy::default())?;
    assert_eq!(report.result, TheoremResult::new(false, false, false));
    assert_eq!(report.diagnostics[0].local_rank, Some(3));
    Ok(())
}

#[test]
fn registering_only_ideals_off_the_locus_breaks_equivalence() -> Result<(), AlgebraError> {
    let ring = ring_with(&[("q", &["y"]), ("m2", &["x - 1", "y", "z"])]);
    let module = torsion_module(&ring);
    let report = check_local_freeness(&ring, &module, &CheckPolicy::default())?;
    assert_eq!(report.result, TheoremResult::new(false, true, true));
    assert!(!report.result.equivalent);
    Ok(())
}

#[test]
fn exhaustive_policy_evaluates_every_ideal() -> Result<(), AlgebraError> {
    let ring = demo_ring();
    let module = torsion_module(&ring);
    let policy = CheckPolicy {
        short_circuit: false,
        ..CheckPolicy::default()
    };
    let report = check_local_freeness(&ring, &module, &policy)?;
    let free: Vec<Option<bool>> = report.diagnostics.iter().map(|d| d.free).collect();
    assert_eq!(free, vec![Some(false), Some(false), Some(true)]);
    assert_eq!(report.diagnostics[2].local_rank, Some(2));
    Ok(())
}

#[test]
fn diagnostics_can_be_suppressed() -> Result<(), AlgebraError> {
    let ring = demo_ring();
    let module = Module::free(ring.poly_ring(), "P", 2);
    let policy = CheckPolicy {
        record_diagnostics: false,
        ..CheckPolicy::default()
    };
    let report = check_local_freeness(&ring, &module, &policy)?;
    assert!(report.diagnostics.is_empty());
    assert!(report.result.equivalent);
    Ok(())
}

#[test]
fn report_hash_is_deterministic() -> Result<(), AlgebraError> {
    let ring = demo_ring();
    let module = torsion_module(&ring);
    let first = check_local_freeness(&ring, &module, &CheckPolicy::default())?;
    let second = check_local_freeness(&ring, &module, &CheckPolicy::default())?;
    assert_eq!(first.analysis_hash, second.analysis_hash);
    assert_eq!(first.to_bytes()?, second.to_bytes()?);
    Ok(())
}
