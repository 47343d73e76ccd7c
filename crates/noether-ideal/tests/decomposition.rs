use std::sync::Arc;

use noether_core::AlgebraError;
use noether_ideal::{Ideal, ReductionLimits};
use noether_poly::PolyRing;

fn ring() -> Arc<PolyRing> {
    PolyRing::new("A", ["x", "y", "z"]).expect("ring")
}

fn described(ideals: &[Ideal]) -> Vec<String> {
    ideals.iter().map(Ideal::describe).collect()
}

#[test]
fn associated_primes_of_two_component_ideal() {
    let ring = ring();
    let ann = Ideal::parse(&ring, &["x^2*y", "y*z"]).expect("ideal");
    let components = ann.irreducible_components().expect("components");
    assert_eq!(described(&components), vec!["(x^2, z)", "(y)"]);

    let primes = ann.associated_primes().expect("primes");
    assert_eq!(described(&primes), vec!["(x, z)", "(y)"]);
    for prime in &primes {
        assert!(prime.is_prime().expect("prime"));
    }
}

#[test]
fn embedded_prime_is_associated_but_not_minimal() {
    let ring = ring();
    let ann = Ideal::parse(&ring, &["x^2", "x*y"]).expect("ideal");
    let primes = ann.associated_primes().expect("primes");
    assert_eq!(described(&primes), vec!["(x)", "(x, y)"]);
    let minimal = ann.minimal_primes().expect("minimal");
    assert_eq!(described(&minimal), vec!["(x)"]);
}

#[test]
fn components_intersect_back_to_the_ideal() {
    let ring = ring();
    let ann = Ideal::parse(&ring, &["x^2*y", "y*z", "x*z^3"]).expect("ideal");
    let components = ann.irreducible_components().expect("components");
    let rebuilt = Ideal::intersect_all(&ring, &components).expect("intersection");
    assert!(rebuilt.equals(&ann).expect("equals"));
}

#[test]
fn radical_of_annihilator_is_intersection_of_associated_primes() {
    let ring = ring();
    let ann = Ideal::parse(&ring, &["x^2*y", "y*z"]).expect("ideal");
    let radical = ann.radical().expect("radical");
    assert_eq!(radical.describe(), "(x*y, y*z)");
    let primes = ann.minimal_primes().expect("minimal");
    let meet = Ideal::intersect_all(&ring, &primes).expect("intersection");
    assert!(meet.equals(&radical).expect("equals"));
}

#[test]
fn zero_and_unit_edge_cases() {
    let ring = ring();
    let zero = Ideal::zero(&ring);
    assert_eq!(described(&zero.associated_primes().expect("primes")), vec!["(0)"]);

    let unit = Ideal::unit(&ring);
    assert!(unit.associated_primes().expect("primes").is_empty());

    let empty = Ideal::intersect_all(&ring, &[]).expect("intersection");
    assert!(empty.is_unit().expect("unit"));
}

#[test]
fn non_monomial_ideals_are_rejected() {
    let ring = ring();
    let ideal = Ideal::parse(&ring, &["x + y"]).expect("ideal");
    match ideal.associated_primes() {
        Err(AlgebraError::Computation(info)) => assert_eq!(info.code, "non-monomial-ideal"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn split_depth_guard_trips() {
    let ring = ring();
    let limits = ReductionLimits {
        max_split_depth: 1,
        ..ReductionLimits::default()
    };
    let ideal = Ideal::parse(&ring, &["x*y*z", "x^2*y^2"])
        .expect("ideal")
        .with_limits(limits);
    match ideal.irreducible_components() {
        Err(AlgebraError::Computation(info)) => assert_eq!(info.code, "split-depth"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn radical_of_square_of_linear_form() {
    let ring = ring();
    let square = Ideal::parse(&ring, &["x^2 + 2*x*y + y^2"]).expect("ideal");
    let radical = square.radical().expect("radical");
    assert_eq!(radical.describe(), "(x + y)");
    let root = ring.parse("x + y").expect("poly");
    assert!(radical.contains(&root).expect("membership"));
    assert!(!square.contains(&root).expect("membership"));
    assert!(!square.is_radical().expect("radical"));
}
