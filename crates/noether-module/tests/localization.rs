use std::sync::Arc;

use noether_core::AlgebraError;
use noether_ideal::Ideal;
use noether_module::{Module, QuotientModule};
use noether_poly::{PolyRing, Polynomial};

fn ring() -> Arc<PolyRing> {
    PolyRing::new("A", ["x", "y", "z"]).expect("ring")
}

fn row(ring: &Arc<PolyRing>, entries: &[&str]) -> Vec<Polynomial> {
    entries
        .iter()
        .map(|entry| ring.parse(entry).expect("entry"))
        .collect()
}

fn generators(n: usize) -> Vec<String> {
    (1..=n).map(|idx| format!("e{idx}")).collect()
}

#[test]
fn free_module_is_free_everywhere() {
    let ring = ring();
    let module = Module::free(&ring, "P", 3);
    assert_eq!(module.rank(), 3);
    assert_eq!(module.generic_rank(), 3);
    assert!(module.is_projective());
    for gens in [&["x"][..], &["x", "y", "z"], &["x - 1", "y", "z"]] {
        let prime = Ideal::parse(&ring, gens).expect("ideal");
        assert!(module.is_free_at_localization(&prime).expect("local"));
    }
    assert_eq!(module.describe(), "P = A^3, relations: 0");
}

#[test]
fn unit_relation_is_eliminated_globally() {
    let ring = ring();
    let module = Module::new(&ring, "P", generators(3), vec![row(&ring, &["x", "1", "0"])])
        .expect("module");
    assert_eq!(module.rank(), 2);
    assert_eq!(module.generic_rank(), 2);
    assert!(module.is_projective());
    let origin = Ideal::parse(&ring, &["x", "y", "z"]).expect("ideal");
    assert_eq!(module.local_rank(&origin).expect("local"), 2);
}

#[test]
fn torsion_relation_drops_rank_only_on_its_locus() {
    let ring = ring();
    let module = Module::new(&ring, "T", generators(3), vec![row(&ring, &["x", "0", "0"])])
        .expect("module");
    assert_eq!(module.rank(), 3);
    assert_eq!(module.generic_rank(), 2);
    assert!(!module.is_projective());

    let on_locus = Ideal::parse(&ring, &["x", "y", "z"]).expect("ideal");
    assert_eq!(module.local_rank(&on_locus).expect("local"), 3);
    assert!(!module.is_free_at_localization(&on_locus).expect("local"));

    let off_locus = Ideal::parse(&ring, &["x - 1", "y", "z"]).expect("ideal");
    assert_eq!(module.local_rank(&off_locus).expect("local"), 2);
    assert!(module.is_free_at_localization(&off_locus).expect("local"));

    let generic = Ideal::parse(&ring, &["y"]).expect("ideal");
    assert!(module.is_free_at_localization(&generic).expect("local"));
}

#[test]
fn two_relations_sharing_a_locus() {
    let ring = ring();
    let module = Module::new(
        &ring,
        "N",
        generators(2),
        vec![row(&ring, &["x", "y"]), row(&ring, &["y", "x"])],
    )
    .expect("module");
    assert_eq!(module.generic_rank(), 0);
    assert_eq!(module.rank(), 2);
    let origin = Ideal::parse(&ring, &["x", "y", "z"]).expect("ideal");
    assert_eq!(module.local_rank(&origin).expect("local"), 2);
    let away = Ideal::parse(&ring, &["x - 1", "y", "z"]).expect("ideal");
    assert_eq!(module.local_rank(&away).expect("local"), 0);
}

#[test]
fn malformed_presentations_fail() {
    let ring = ring();
    let err = Module::new(&ring, "bad", generators(3), vec![row(&ring, &["x", "y"])])
        .expect_err("width mismatch");
    match err {
        AlgebraError::Computation(info) => {
            assert_eq!(info.code, "relation-width");
            assert_eq!(info.context.get("row").map(String::as_str), Some("0"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let other = PolyRing::new("B", ["u"]).expect("ring");
    let module = Module::free(&ring, "P", 1);
    let foreign = Ideal::parse(&other, &["u"]).expect("ideal");
    assert!(matches!(
        module.local_rank(&foreign),
        Err(AlgebraError::ForeignIdeal(_))
    ));
}

#[test]
fn quotient_module_exposes_annihilator_and_primes() {
    let ring = ring();
    let ideal = Ideal::parse(&ring, &["x^2*y", "y*z"]).expect("ideal");
    let quotient = QuotientModule::new("M", ideal);
    assert_eq!(quotient.describe(), "M = A / (x^2*y, y*z)");
    assert_eq!(quotient.annihilator().describe(), "(x^2*y, y*z)");
    let primes: Vec<String> = quotient
        .associated_primes()
        .expect("primes")
        .iter()
        .map(|p| p.describe())
        .collect();
    assert_eq!(primes, vec!["(x, z)", "(y)"]);

    let module = quotient.as_module().expect("module");
    assert_eq!(module.generic_rank(), 0);
    assert_eq!(module.rank(), 1);
    let away = Ideal::parse(&ring, &["x", "y - 1", "z"]).expect("ideal");
    assert_eq!(module.local_rank(&away).expect("local"), 1);
    let generic = Ideal::parse(&ring, &["x - 1", "y - 1", "z - 1"]).expect("ideal");
    assert_eq!(module.local_rank(&generic).expect("local"), 0);
}

#[test]
fn point_with_shared_leading_variables_sees_the_rank_drop() {
    let ring = ring();
    let point = Ideal::parse(&ring, &["x + y", "y - 2", "z + x"]).expect("ideal");
    assert!(point.is_maximal().expect("maximal"));
    let on_point = ring.parse("z - 2").expect("poly");
    assert!(point.contains(&on_point).expect("membership"));

    let module = Module::new(&ring, "T", generators(3), vec![row(&ring, &["z - 2", "0", "0"])])
        .expect("module");
    assert_eq!(module.rank(), 3);
    assert_eq!(module.generic_rank(), 2);
    assert_eq!(module.local_rank(&point).expect("local"), 3);
    assert!(!module.is_free_at_localization(&point).expect("local"));
}
