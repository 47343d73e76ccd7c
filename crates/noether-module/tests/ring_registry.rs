use std::sync::Arc;

use noether_core::AlgebraError;
use noether_ideal::Ideal;
use noether_module::NoetherianRing;
use noether_poly::PolyRing;

fn demo_ring() -> NoetherianRing {
    let poly = PolyRing::new("A", ["x", "y", "z"]).expect("ring");
    let mut ring = NoetherianRing::new(Arc::clone(&poly));
    for (label, gens) in [
        ("m1", &["x", "y", "z"][..]),
        ("p1", &["x"]),
        ("m2", &["x - 1", "y", "z"]),
        ("q", &["x^2"]),
    ] {
        let ideal = Ideal::parse(&poly, gens).expect("ideal");
        ring.register_ideal(label, ideal).expect("register");
    }
    ring
}

fn labels(entries: &[&noether_module::LabelledIdeal]) -> Vec<String> {
    entries.iter().map(|entry| entry.label.clone()).collect()
}

#[test]
fn prime_and_maximal_filters_keep_registration_order() {
    let ring = demo_ring();
    assert!(ring.is_noetherian());
    assert_eq!(ring.ideals().len(), 4);
    let primes = ring.get_prime_ideals().expect("primes");
    assert_eq!(labels(&primes), vec!["m1", "p1", "m2"]);
    let maximal = ring.get_maximal_ideals().expect("maximal");
    assert_eq!(labels(&maximal), vec!["m1", "m2"]);
}

#[test]
fn lookup_by_label() {
    let ring = demo_ring();
    let p1 = ring.ideal("p1").expect("registered");
    assert_eq!(p1.describe(), "(x)");
    assert!(ring.ideal("missing").is_none());
}

#[test]
fn foreign_ideals_are_rejected() {
    let mut ring = demo_ring();
    let other = PolyRing::new("A", ["x", "y", "z"]).expect("ring");
    let ideal = Ideal::parse(&other, &["x"]).expect("ideal");
    match ring.register_ideal("foreign", ideal) {
        Err(AlgebraError::ForeignIdeal(info)) => {
            assert_eq!(info.code, "foreign-ideal");
            assert_eq!(info.context.get("label").map(String::as_str), Some("foreign"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(ring.ideals().len(), 4);
}

#[test]
fn duplicate_labels_are_rejected() {
    let mut ring = demo_ring();
    let poly = Arc::clone(ring.poly_ring());
    let ideal = Ideal::parse(&poly, &["y"]).expect("ideal");
    let err = ring.register_ideal("p1", ideal).expect_err("duplicate");
    assert_eq!(err.info().code, "duplicate-label");
}
