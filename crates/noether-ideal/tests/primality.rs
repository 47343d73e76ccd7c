use std::sync::Arc;

use noether_ideal::Ideal;
use noether_poly::PolyRing;

fn ring() -> Arc<PolyRing> {
    PolyRing::new("A", ["x", "y", "z"]).expect("ring")
}

fn ideal(ring: &Arc<PolyRing>, gens: &[&str]) -> Ideal {
    Ideal::parse(ring, gens).expect("ideal")
}

#[test]
fn point_ideals_are_maximal() {
    let ring = ring();
    for gens in [&["x", "y", "z"][..], &["x - 1", "y", "z"], &["x + y", "y - 2", "z + x"]] {
        let m = ideal(&ring, gens);
        assert!(m.is_maximal().expect("maximal"), "{m}");
        assert!(m.is_prime().expect("prime"), "{m}");
    }
}

#[test]
fn coordinate_ideals_are_prime_not_maximal() {
    let ring = ring();
    for gens in [&["x"][..], &["x", "y"], &["x - z"]] {
        let p = ideal(&ring, gens);
        assert!(p.is_prime().expect("prime"), "{p}");
        assert!(!p.is_maximal().expect("maximal"), "{p}");
    }
}

#[test]
fn reducible_principal_ideals_are_not_prime() {
    let ring = ring();
    for gens in [&["x^2"][..], &["x*y"], &["x^2 - 1"], &["y^2 - z^2"]] {
        let i = ideal(&ring, gens);
        assert!(!i.is_prime().expect("prime"), "{i}");
        assert!(!i.is_maximal().expect("maximal"), "{i}");
    }
}

#[test]
fn irreducible_residual_makes_prime() {
    let ring = ring();
    let i = ideal(&ring, &["x - y", "y^2 + 1"]);
    assert!(i.is_prime().expect("prime"));
    assert!(!i.is_maximal().expect("maximal"));

    let closed = ideal(&ring, &["x", "y", "z^2 - 2"]);
    assert!(closed.is_prime().expect("prime"));
    assert!(closed.is_maximal().expect("maximal"));
}

#[test]
fn generators_combining_to_a_unit() {
    let ring = ring();
    let unit = ideal(&ring, &["x", "x - 1"]);
    assert!(unit.is_unit().expect("unit"));
    assert!(!unit.is_prime().expect("prime"));
    assert!(!unit.is_maximal().expect("maximal"));

    let hidden = ideal(&ring, &["x", "x*y + 1"]);
    assert!(!hidden.is_proper().expect("proper"));
}

#[test]
fn zero_ideal_is_prime_but_not_maximal() {
    let ring = ring();
    let zero = Ideal::zero(&ring);
    assert!(zero.is_prime().expect("prime"));
    assert!(!zero.is_maximal().expect("maximal"));

    let field = PolyRing::new("k", Vec::<String>::new()).expect("ring");
    assert!(Ideal::zero(&field).is_maximal().expect("maximal"));
}

#[test]
fn mixed_residuals_are_not_prime() {
    let ring = ring();
    let i = ideal(&ring, &["x*y", "y*z"]);
    assert!(!i.is_prime().expect("prime"));
}
