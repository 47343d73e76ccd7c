//! Structural irreducibility rules over the rationals.

use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::polynomial::Polynomial;

/// Largest constant/leading coefficient whose divisors are enumerated by the
/// rational root test.
const MAX_ROOT_TEST_COEFF: u64 = 1_000_000;

/// Outcome of the structural irreducibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Irreducibility {
    /// Proven irreducible by one of the rules.
    Irreducible,
    /// Proven reducible (or a unit or zero).
    Reducible,
    /// No rule applies.
    Unknown,
}

impl Polynomial {
    /// Applies the structural irreducibility rules.
    ///
    /// * units and zero are not irreducible;
    /// * a monomial is irreducible iff it is a single variable;
    /// * total degree one is irreducible;
    /// * a non-trivial monomial content or a repeated factor makes it reducible;
    /// * `c*v + b` with `c` a non-zero constant and `b` free of `v` is irreducible;
    /// * a univariate polynomial of degree two or three is irreducible iff it
    ///   has no rational root; higher degrees are only ever proven reducible.
    pub fn irreducibility(&self) -> Irreducibility {
        if self.is_constant() {
            return Irreducibility::Reducible;
        }
        if self.is_monomial() {
            return if self.total_degree() == 1 {
                Irreducibility::Irreducible
            } else {
                Irreducibility::Reducible
            };
        }
        if self.total_degree() == 1 {
            return Irreducibility::Irreducible;
        }
        if !self.monomial_content().is_one() {
            return Irreducibility::Reducible;
        }
        if self.has_unit_linear_variable() {
            return Irreducibility::Irreducible;
        }
        if !self.is_squarefree() {
            return Irreducibility::Reducible;
        }
        if let Some(var) = self.univariate_var() {
            match has_rational_root(self) {
                Some(true) => return Irreducibility::Reducible,
                Some(false) if (2..=3).contains(&self.degree_in(var)) => {
                    return Irreducibility::Irreducible;
                }
                _ => {}
            }
        }
        debug!(
            terms = self.num_terms(),
            degree = self.total_degree(),
            "irreducibility undecided"
        );
        Irreducibility::Unknown
    }

    /// True only when irreducibility is proven.
    pub fn is_irreducible(&self) -> bool {
        self.irreducibility() == Irreducibility::Irreducible
    }

    fn has_unit_linear_variable(&self) -> bool {
        self.support()
            .into_iter()
            .any(|var| self.degree_in(var) == 1 && self.coefficient_of(var, 1).is_unit())
    }
}

/// Rational root test for a univariate polynomial.
///
/// Returns `None` when the coefficients are too large to enumerate divisors.
fn has_rational_root(poly: &Polynomial) -> Option<bool> {
    let var = poly.univariate_var()?;
    let scale = BigRational::from_integer(lcm_of_denominators(poly));
    let integral = poly.scale(&scale);
    let lead = integral.coefficient_of(var, integral.degree_in(var));
    let constant = integral.coefficient_of(var, 0);
    let lead = lead.constant_value()?.to_integer();
    let constant = constant.constant_value()?.to_integer();
    if constant.is_zero() {
        return Some(true);
    }
    let p = constant.abs().to_u64().filter(|v| *v <= MAX_ROOT_TEST_COEFF)?;
    let q = lead.abs().to_u64().filter(|v| *v <= MAX_ROOT_TEST_COEFF)?;
    let mut candidates = BTreeSet::new();
    for numer in divisors(p) {
        for denom in divisors(q) {
            let candidate = BigRational::new(BigInt::from(numer), BigInt::from(denom));
            candidates.insert(candidate.clone());
            candidates.insert(-candidate);
        }
    }
    Some(
        candidates
            .iter()
            .any(|candidate| integral.eval_univariate(candidate).is_zero()),
    )
}

fn divisors(n: u64) -> Vec<u64> {
    let mut out = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            out.push(d);
            if d * d != n {
                out.push(n / d);
            }
        }
        d += 1;
    }
    out
}

fn lcm_of_denominators(poly: &Polynomial) -> BigInt {
    poly.terms()
        .iter()
        .fold(BigInt::one(), |acc, term| acc.lcm(term.coeff.denom()))
}
