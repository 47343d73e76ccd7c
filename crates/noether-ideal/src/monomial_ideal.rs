//! Monomial ideals: intersection, irreducible decomposition and associated
//! primes.
//!
//! A monomial ideal is irreducible exactly when it is generated by pure
//! powers of variables. Splitting a mixed generator `x^a * m` with `x`
//! coprime to `m` uses `(I, x^a * m) = (I, x^a) ∩ (I, m)`; repeating this
//! until every generator is a pure power gives an irreducible decomposition,
//! whose irredundant components are primary to the primes generated by
//! their supports.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use noether_core::errors::{AlgebraError, ErrorInfo};
use noether_poly::{Monomial, PolyRing, Polynomial, VarId};
use num_rational::BigRational;
use num_traits::One;
use tracing::debug;

use crate::ideal::Ideal;

/// Drops monomials divisible by another one in the list.
pub(crate) fn minimal_monomials(monomials: impl IntoIterator<Item = Monomial>) -> Vec<Monomial> {
    let mut sorted: Vec<Monomial> = monomials.into_iter().collect();
    sorted.sort_by(|a, b| a.degree().cmp(&b.degree()).then_with(|| b.lex_cmp(a)));
    let mut kept: Vec<Monomial> = Vec::new();
    for candidate in sorted {
        if !kept.iter().any(|m| m.divides(&candidate)) {
            kept.push(candidate);
        }
    }
    kept
}

fn as_polynomials(monomials: Vec<Monomial>) -> Vec<Polynomial> {
    monomials
        .into_iter()
        .map(|m| Polynomial::monomial(BigRational::one(), m))
        .collect()
}

/// Pure-power component `(x_1^{a_1}, .., x_k^{a_k})`.
type Component = BTreeMap<VarId, u32>;

/// `a ⊇ b` for pure-power components: every generator of `b` lies in `a`.
fn component_contains(a: &Component, b: &Component) -> bool {
    b.iter()
        .all(|(var, exp)| a.get(var).map(|own| own <= exp).unwrap_or(false))
}

struct Splitter {
    max_depth: usize,
    components: BTreeSet<Component>,
}

impl Splitter {
    fn split(&mut self, generators: Vec<Monomial>, depth: usize) -> Result<(), AlgebraError> {
        if depth > self.max_depth {
            return Err(AlgebraError::Computation(
                ErrorInfo::new("split-depth", "monomial decomposition exceeded its depth guard")
                    .with_context("max_split_depth", self.max_depth.to_string())
                    .with_hint("raise max_split_depth in the check policy"),
            ));
        }
        let generators = minimal_monomials(generators);
        if generators.iter().any(Monomial::is_one) {
            return Ok(());
        }
        let mixed = generators.iter().find(|m| !m.is_pure_power()).cloned();
        match mixed {
            None => {
                let component: Component = generators
                    .iter()
                    .flat_map(|m| m.powers().collect::<Vec<_>>())
                    .collect();
                self.components.insert(component);
                Ok(())
            }
            Some(mixed) => {
                let Some((var, exp)) = mixed.powers().next() else {
                    return Ok(());
                };
                let power = Monomial::var_power(var, exp);
                let cofactor = power.quotient_of(&mixed).unwrap_or_else(Monomial::one);
                let rest: Vec<Monomial> =
                    generators.iter().filter(|m| **m != mixed).cloned().collect();

                let mut left = rest.clone();
                left.push(power);
                self.split(left, depth + 1)?;

                let mut right = rest;
                right.push(cofactor);
                self.split(right, depth + 1)
            }
        }
    }
}

fn prime_of_support(support: &BTreeSet<VarId>) -> Vec<Polynomial> {
    support.iter().map(|var| Polynomial::var(*var)).collect()
}

impl Ideal {
    fn monomial_generators(&self) -> Result<Vec<Monomial>, AlgebraError> {
        if !self.is_monomial() {
            return Err(AlgebraError::Computation(
                ErrorInfo::new("non-monomial-ideal", "operation requires a monomial ideal")
                    .with_context("ideal", self.describe()),
            ));
        }
        Ok(self
            .generators()
            .iter()
            .filter_map(Polynomial::leading_monomial)
            .cloned()
            .collect())
    }

    /// Intersection of two monomial ideals, generated by pairwise lcms.
    pub fn intersection(&self, other: &Ideal) -> Result<Ideal, AlgebraError> {
        self.ensure_same_ring(other)?;
        let left = self.monomial_generators()?;
        let right = other.monomial_generators()?;
        let lcms = left
            .iter()
            .flat_map(|a| right.iter().map(move |b| a.lcm(b)));
        Ok(self.derived(as_polynomials(minimal_monomials(lcms))))
    }

    /// Intersection of a family of monomial ideals of `ring`.
    ///
    /// The empty family intersects to the unit ideal.
    pub fn intersect_all(ring: &Arc<PolyRing>, ideals: &[Ideal]) -> Result<Ideal, AlgebraError> {
        let limits = ideals.first().map(Ideal::limits).unwrap_or_default();
        let mut acc = Ideal::unit(ring).with_limits(limits);
        for ideal in ideals {
            acc = acc.intersection(ideal)?;
        }
        Ok(acc)
    }

    /// Irredundant irreducible components of a monomial ideal.
    ///
    /// Each component is generated by pure powers of variables. The zero
    /// ideal is its own single component; the unit ideal has none.
    pub fn irreducible_components(&self) -> Result<Vec<Ideal>, AlgebraError> {
        if self.is_zero() {
            return Ok(vec![self.clone()]);
        }
        let mut splitter = Splitter {
            max_depth: self.limits().max_split_depth,
            components: BTreeSet::new(),
        };
        splitter.split(self.monomial_generators()?, 0)?;
        let all: Vec<Component> = splitter.components.into_iter().collect();
        let irredundant: Vec<&Component> = all
            .iter()
            .filter(|a| !all.iter().any(|b| b != *a && component_contains(a, b)))
            .collect();
        debug!(
            ideal = %self,
            raw = all.len(),
            kept = irredundant.len(),
            "monomial decomposition"
        );
        Ok(irredundant
            .into_iter()
            .map(|component| {
                let monomials = component
                    .iter()
                    .map(|(var, exp)| Monomial::var_power(*var, *exp))
                    .collect();
                self.derived(as_polynomials(monomials))
            })
            .collect())
    }

    /// Associated primes of `R / I` for a monomial ideal `I`.
    ///
    /// These are the distinct radicals of the irredundant irreducible
    /// components, each generated by a set of variables.
    pub fn associated_primes(&self) -> Result<Vec<Ideal>, AlgebraError> {
        let supports: BTreeSet<BTreeSet<VarId>> = self
            .irreducible_components()?
            .iter()
            .map(|component| {
                component
                    .generators()
                    .iter()
                    .flat_map(|g| g.support())
                    .collect()
            })
            .collect();
        Ok(supports
            .iter()
            .map(|support| self.derived(prime_of_support(support)))
            .collect())
    }

    /// Minimal elements of the associated primes under inclusion.
    pub fn minimal_primes(&self) -> Result<Vec<Ideal>, AlgebraError> {
        let primes = self.associated_primes()?;
        let supports: Vec<BTreeSet<VarId>> = primes
            .iter()
            .map(|p| p.generators().iter().flat_map(|g| g.support()).collect())
            .collect();
        Ok(primes
            .iter()
            .zip(&supports)
            .filter(|(_, support)| {
                !supports
                    .iter()
                    .any(|other| other != *support && other.is_subset(support))
            })
            .map(|(prime, _)| prime.clone())
            .collect())
    }
}
