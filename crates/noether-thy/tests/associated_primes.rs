use std::sync::Arc;

use noether_core::AlgebraError;
use noether_ideal::Ideal;
use noether_module::QuotientModule;
use noether_poly::PolyRing;
use noether_thy::{check_associated_primes, CheckPolicy};

fn quotient(gens: &[&str]) -> QuotientModule {
    let ring: Arc<PolyRing> = PolyRing::new("A", ["x", "y", "z"]).unwrap();
    QuotientModule::new("M", Ideal::parse(&ring, gens).unwrap())
}

#[test]
fn intersection_of_associated_primes_is_the_radical() -> Result<(), AlgebraError> {
    let module = quotient(&["x^2*y", "y*z"]);
    let report = check_associated_primes(&module, &CheckPolicy::default())?;
    assert_eq!(report.annihilator, "(x^2*y, y*z)");
    assert_eq!(report.associated_primes, vec!["(x, z)", "(y)"]);
    assert!(report.embedded_primes.is_empty());
    assert_eq!(report.intersection, "(x*y, y*z)");
    assert_eq!(report.radical, "(x*y, y*z)");
    assert!(report.holds);
    Ok(())
}

#[test]
fn embedded_primes_do_not_change_the_intersection() -> Result<(), AlgebraError> {
    let module = quotient(&["x^2", "x*y"]);
    let report = check_associated_primes(&module, &CheckPolicy::default())?;
    assert_eq!(report.associated_primes, vec!["(x)", "(x, y)"]);
    assert_eq!(report.embedded_primes, vec!["(x, y)"]);
    assert_eq!(report.intersection, "(x)");
    assert_eq!(report.radical, "(x)");
    assert!(report.holds);
    Ok(())
}

#[test]
fn non_monomial_annihilator_is_a_computation_error() {
    let module = quotient(&["x^2 - y"]);
    match check_associated_primes(&module, &CheckPolicy::default()) {
        Err(AlgebraError::Computation(info)) => assert_eq!(info.code, "non-monomial-ideal"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn policy_split_depth_reaches_the_decomposition() {
    let module = quotient(&["x*y*z", "x^2*y^2"]);
    let policy = CheckPolicy {
        max_split_depth: 1,
        ..CheckPolicy::default()
    };
    match check_associated_primes(&module, &policy) {
        Err(AlgebraError::Computation(info)) => assert_eq!(info.code, "split-depth"),
        other => panic!("unexpected result: {other:?}"),
    }
}
