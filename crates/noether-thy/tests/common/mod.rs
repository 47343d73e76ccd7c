#![allow(dead_code)]

use std::sync::Arc;

use noether_ideal::Ideal;
use noether_module::{Module, NoetherianRing};
use noether_poly::{PolyRing, Polynomial};

pub fn ring_with(ideals: &[(&str, &[&str])]) -> NoetherianRing {
    let poly = PolyRing::new("A", ["x", "y", "z"]).unwrap();
    let mut ring = NoetherianRing::new(Arc::clone(&poly));
    for (label, gens) in ideals {
        ring.register_ideal(*label, Ideal::parse(&poly, gens).unwrap())
            .unwrap();
    }
    ring
}

pub fn demo_ring() -> NoetherianRing {
    ring_with(&[
        ("m1", &["x", "y", "z"]),
        ("p1", &["x"]),
        ("m2", &["x - 1", "y", "z"]),
    ])
}

pub fn torsion_module(ring: &NoetherianRing) -> Module {
    let poly = ring.poly_ring();
    let row: Vec<Polynomial> = ["x", "0", "0"]
        .iter()
        .map(|entry| poly.parse(entry).unwrap())
        .collect();
    Module::new(
        poly,
        "T",
        vec!["e1".into(), "e2".into(), "e3".into()],
        vec![row],
    )
    .unwrap()
}
