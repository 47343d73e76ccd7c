use std::sync::Arc;

use noether_core::errors::{AlgebraError, ErrorInfo};
use noether_ideal::Ideal;
use noether_poly::{PolyRing, Polynomial};
use tracing::debug;

use crate::elimination::Presentation;

/// Finitely presented module `R^n / (relations)`.
///
/// Each relation is a row of `n` ring elements, one per generator. Rank and
/// freeness are recomputed from the presentation on every query.
#[derive(Debug, Clone)]
pub struct Module {
    ring: Arc<PolyRing>,
    name: String,
    generators: Vec<String>,
    relations: Vec<Vec<Polynomial>>,
}

impl Module {
    /// Builds a module from generator names and relation rows.
    ///
    /// Every row must have one entry per generator; entries must only use
    /// the ring's variables.
    pub fn new(
        ring: &Arc<PolyRing>,
        name: impl Into<String>,
        generators: Vec<String>,
        relations: Vec<Vec<Polynomial>>,
    ) -> Result<Self, AlgebraError> {
        let name = name.into();
        for (idx, row) in relations.iter().enumerate() {
            if row.len() != generators.len() {
                return Err(AlgebraError::Computation(
                    ErrorInfo::new("relation-width", "relation row width differs from generator count")
                        .with_context("module", name.clone())
                        .with_context("row", idx.to_string())
                        .with_context("width", row.len().to_string())
                        .with_context("generators", generators.len().to_string()),
                ));
            }
            for entry in row {
                ring.check_scope(entry)?;
            }
        }
        Ok(Self {
            ring: Arc::clone(ring),
            name,
            generators,
            relations,
        })
    }

    /// Free module of the given rank with generators `e1 .. en`.
    pub fn free(ring: &Arc<PolyRing>, name: impl Into<String>, rank: usize) -> Self {
        Self {
            ring: Arc::clone(ring),
            name: name.into(),
            generators: (1..=rank).map(|idx| format!("e{idx}")).collect(),
            relations: Vec::new(),
        }
    }

    /// Module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ring the module is defined over.
    pub fn ring(&self) -> &Arc<PolyRing> {
        &self.ring
    }

    /// Generator names.
    pub fn generators(&self) -> &[String] {
        &self.generators
    }

    /// Relation rows.
    pub fn relations(&self) -> &[Vec<Polynomial>] {
        &self.relations
    }

    fn presentation(&self) -> Presentation {
        Presentation::new(self.relations.clone(), self.generators.len())
    }

    /// Generator count of the minimal presentation.
    ///
    /// A relation with a unit entry expresses that generator through the
    /// others, so it is eliminated together with the relation.
    pub fn rank(&self) -> usize {
        self.presentation().eliminate_plain(Polynomial::is_unit)
    }

    /// Rank over the fraction field: generators minus the rank of the
    /// relation matrix, by fraction-free elimination.
    pub fn generic_rank(&self) -> usize {
        self.presentation()
            .eliminate_plain(|entry| !entry.is_zero())
    }

    /// Minimal number of generators of the localization at `prime`.
    ///
    /// Entries outside `prime` become units; the matrix is kept reduced
    /// modulo the ideal so a non-zero entry is exactly one outside it.
    pub fn local_rank(&self, prime: &Ideal) -> Result<usize, AlgebraError> {
        self.ensure_ring(prime)?;
        let mut presentation = self.presentation();
        presentation.map_rows(|row| prime.reduce_modulo(row))?;
        let rank = presentation.eliminate(
            |entry| !entry.is_zero(),
            |matrix| matrix.map_rows(|row| prime.reduce_modulo(row)),
        )?;
        debug!(module = %self.name, prime = %prime, rank, "local rank");
        Ok(rank)
    }

    /// Projective over a Noetherian domain: the minimal presentation carries
    /// no relation beyond those forcing the generic rank.
    pub fn is_projective(&self) -> bool {
        self.rank() == self.generic_rank()
    }

    /// The localization at `prime` is free of the generic rank.
    pub fn is_free_at_localization(&self, prime: &Ideal) -> Result<bool, AlgebraError> {
        Ok(self.local_rank(prime)? == self.generic_rank())
    }

    fn ensure_ring(&self, ideal: &Ideal) -> Result<(), AlgebraError> {
        if ideal.ring().id() == self.ring.id() {
            return Ok(());
        }
        Err(AlgebraError::ForeignIdeal(
            ErrorInfo::new("foreign-ideal", "ideal belongs to a different ring than the module")
                .with_context("module", self.name.clone())
                .with_context("ring", self.ring.name().to_string())
                .with_context("ideal_ring", ideal.ring().name().to_string()),
        ))
    }

    /// One-line description such as `P = A^3, relations: 0`.
    pub fn describe(&self) -> String {
        format!(
            "{} = {}^{}, relations: {}",
            self.name,
            self.ring.name(),
            self.generators.len(),
            self.relations.len()
        )
    }
}
