use std::sync::Arc;

use noether_core::errors::{AlgebraError, ErrorInfo};
use noether_poly::{divide, PolyRing, Polynomial};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::structure::reduction_basis;

/// Work bounds applied to reductions and monomial splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionLimits {
    /// Maximum rewrite steps for a single reduction.
    pub max_steps: usize,
    /// Maximum recursion depth of the monomial splitting rule.
    pub max_split_depth: usize,
}

impl Default for ReductionLimits {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            max_split_depth: 64,
        }
    }
}

/// Ideal of a polynomial ring given by finitely many generators.
///
/// Primality, maximality and the radical are derived from the generators on
/// every call; nothing about the ideal is asserted at construction.
#[derive(Debug, Clone)]
pub struct Ideal {
    ring: Arc<PolyRing>,
    generators: Vec<Polynomial>,
    limits: ReductionLimits,
}

impl Ideal {
    /// Creates an ideal, dropping zero generators.
    ///
    /// Fails with `VariableOutOfScope` when a generator uses a variable the
    /// ring does not declare.
    pub fn new(
        ring: &Arc<PolyRing>,
        generators: impl IntoIterator<Item = Polynomial>,
    ) -> Result<Self, AlgebraError> {
        let mut kept = Vec::new();
        for generator in generators {
            ring.check_scope(&generator)?;
            if !generator.is_zero() && !kept.contains(&generator) {
                kept.push(generator);
            }
        }
        Ok(Self {
            ring: Arc::clone(ring),
            generators: kept,
            limits: ReductionLimits::default(),
        })
    }

    /// Parses every generator with the ring's variable names.
    pub fn parse(ring: &Arc<PolyRing>, generators: &[&str]) -> Result<Self, AlgebraError> {
        let polys = generators
            .iter()
            .map(|text| ring.parse(text))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ring, polys)
    }

    /// The zero ideal.
    pub fn zero(ring: &Arc<PolyRing>) -> Self {
        Self {
            ring: Arc::clone(ring),
            generators: Vec::new(),
            limits: ReductionLimits::default(),
        }
    }

    /// The unit ideal, i.e. the whole ring.
    pub fn unit(ring: &Arc<PolyRing>) -> Self {
        Self {
            ring: Arc::clone(ring),
            generators: vec![Polynomial::one()],
            limits: ReductionLimits::default(),
        }
    }

    /// Replaces the work bounds used by this ideal's computations.
    pub fn with_limits(mut self, limits: ReductionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns a copy with the same ring and limits but new generators.
    pub(crate) fn derived(&self, generators: Vec<Polynomial>) -> Self {
        let mut kept: Vec<Polynomial> = Vec::new();
        for generator in generators {
            if !generator.is_zero() && !kept.contains(&generator) {
                kept.push(generator);
            }
        }
        Self {
            ring: Arc::clone(&self.ring),
            generators: kept,
            limits: self.limits,
        }
    }

    /// Ring this ideal belongs to.
    pub fn ring(&self) -> &Arc<PolyRing> {
        &self.ring
    }

    /// Generators in construction order.
    pub fn generators(&self) -> &[Polynomial] {
        &self.generators
    }

    /// Work bounds in effect.
    pub fn limits(&self) -> ReductionLimits {
        self.limits
    }

    /// True when the ideal has no non-zero generator.
    pub fn is_zero(&self) -> bool {
        self.generators.is_empty()
    }

    /// True when some generator is a non-zero constant.
    ///
    /// Ideals whose unit only appears after reduction are detected by
    /// [`Ideal::is_proper`].
    pub fn has_unit_generator(&self) -> bool {
        self.generators.iter().any(Polynomial::is_unit)
    }

    /// True when the ideal has a single generator.
    pub fn is_principal(&self) -> bool {
        self.generators.len() == 1
    }

    /// True when every generator is a single term.
    pub fn is_monomial(&self) -> bool {
        self.generators.iter().all(Polynomial::is_monomial)
    }

    /// Remainder of `p` under lex order.
    ///
    /// Linear generators are brought to echelon form first, so ideals of
    /// linear forms, with or without one further generator, reduce by a
    /// Gröbner basis whatever their leading variables.
    pub fn normal_form(&self, p: &Polynomial) -> Result<Polynomial, AlgebraError> {
        let basis = reduction_basis(self)?;
        self.normal_form_by(p, &basis)
    }

    fn normal_form_by(
        &self,
        p: &Polynomial,
        basis: &[Polynomial],
    ) -> Result<Polynomial, AlgebraError> {
        self.ring.check_scope(p)?;
        let division = divide(p, basis, self.limits.max_steps)?;
        trace!(steps = division.steps, "normal form computed");
        Ok(division.remainder)
    }

    /// Ideal membership: `p` has zero normal form.
    ///
    /// Exact for monomial ideals, principal ideals and ideals of linear
    /// forms plus at most one other generator. Elsewhere the divisors need
    /// not be a Gröbner basis and members can be missed.
    pub fn contains(&self, p: &Polynomial) -> Result<bool, AlgebraError> {
        Ok(self.normal_form(p)?.is_zero())
    }

    /// Normal form of every entry of `row`, as used when a relation matrix is
    /// read in the quotient by this ideal.
    pub fn reduce_modulo(&self, row: &[Polynomial]) -> Result<Vec<Polynomial>, AlgebraError> {
        let basis = reduction_basis(self)?;
        row.iter()
            .map(|entry| self.normal_form_by(entry, &basis))
            .collect()
    }

    /// True when every generator of `self` lies in `other`.
    pub fn is_subset_of(&self, other: &Ideal) -> Result<bool, AlgebraError> {
        self.ensure_same_ring(other)?;
        for generator in &self.generators {
            if !other.contains(generator)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Mutual containment.
    pub fn equals(&self, other: &Ideal) -> Result<bool, AlgebraError> {
        Ok(self.is_subset_of(other)? && other.is_subset_of(self)?)
    }

    /// Fails with `ForeignIdeal` unless both ideals share a ring.
    pub fn ensure_same_ring(&self, other: &Ideal) -> Result<(), AlgebraError> {
        if self.ring.id() == other.ring.id() {
            return Ok(());
        }
        Err(AlgebraError::ForeignIdeal(
            ErrorInfo::new("ring-mismatch", "ideals belong to different rings")
                .with_context("left", self.ring.name().to_string())
                .with_context("right", other.ring.name().to_string()),
        ))
    }

    /// Drops every generator that lies in the ideal of the remaining ones.
    pub fn minimalized(&self) -> Result<Ideal, AlgebraError> {
        let mut kept = self.generators.clone();
        let mut idx = 0;
        while idx < kept.len() {
            let others: Vec<Polynomial> = kept
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != idx)
                .map(|(_, poly)| poly.clone())
                .collect();
            let rest = self.derived(others);
            if kept.len() > 1 && rest.contains(&kept[idx])? {
                kept.remove(idx);
            } else {
                idx += 1;
            }
        }
        Ok(self.derived(kept))
    }

    /// Sum `self + other`.
    pub fn sum(&self, other: &Ideal) -> Result<Ideal, AlgebraError> {
        self.ensure_same_ring(other)?;
        let mut generators = self.generators.clone();
        generators.extend(other.generators.iter().cloned());
        Ok(self.derived(generators))
    }

    /// Renders the ideal as `(g1, g2, ..)`.
    pub fn describe(&self) -> String {
        if self.generators.is_empty() {
            return "(0)".to_string();
        }
        let parts: Vec<String> = self
            .generators
            .iter()
            .map(|generator| self.ring.render(generator))
            .collect();
        format!("({})", parts.join(", "))
    }
}

impl std::fmt::Display for Ideal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
