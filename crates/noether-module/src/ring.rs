use std::sync::Arc;

use noether_core::errors::{AlgebraError, ErrorInfo};
use noether_ideal::{Ideal, ReductionLimits};
use noether_poly::{BaseField, PolyRing};
use tracing::debug;

/// Ideal registered against a ring under a label.
#[derive(Debug, Clone)]
pub struct LabelledIdeal {
    /// Registration label, unique within the ring.
    pub label: String,
    /// The registered ideal.
    pub ideal: Ideal,
}

/// Polynomial ring together with the ideals registered against it.
#[derive(Debug, Clone)]
pub struct NoetherianRing {
    ring: Arc<PolyRing>,
    ideals: Vec<LabelledIdeal>,
}

impl NoetherianRing {
    /// Wraps a polynomial ring with an empty ideal collection.
    pub fn new(ring: Arc<PolyRing>) -> Self {
        Self {
            ring,
            ideals: Vec::new(),
        }
    }

    /// Applies `limits` to every registered ideal.
    pub fn with_limits(mut self, limits: ReductionLimits) -> Self {
        self.ideals = self
            .ideals
            .into_iter()
            .map(|entry| LabelledIdeal {
                label: entry.label,
                ideal: entry.ideal.with_limits(limits),
            })
            .collect();
        self
    }

    /// Underlying polynomial ring.
    pub fn poly_ring(&self) -> &Arc<PolyRing> {
        &self.ring
    }

    /// Ring name.
    pub fn name(&self) -> &str {
        self.ring.name()
    }

    /// Appends `ideal` under `label`.
    ///
    /// Fails with `ForeignIdeal` when the ideal was built over another ring
    /// and with a computation error when the label is already taken.
    pub fn register_ideal(
        &mut self,
        label: impl Into<String>,
        ideal: Ideal,
    ) -> Result<(), AlgebraError> {
        let label = label.into();
        if ideal.ring().id() != self.ring.id() {
            return Err(AlgebraError::ForeignIdeal(
                ErrorInfo::new("foreign-ideal", "ideal belongs to a different ring")
                    .with_context("ring", self.ring.name().to_string())
                    .with_context("ideal_ring", ideal.ring().name().to_string())
                    .with_context("label", label),
            ));
        }
        if self.ideals.iter().any(|entry| entry.label == label) {
            return Err(AlgebraError::Computation(
                ErrorInfo::new("duplicate-label", "ideal label already registered")
                    .with_context("ring", self.ring.name().to_string())
                    .with_context("label", label),
            ));
        }
        debug!(ring = self.ring.name(), label = %label, ideal = %ideal, "registered ideal");
        self.ideals.push(LabelledIdeal { label, ideal });
        Ok(())
    }

    /// Registered ideals in registration order.
    pub fn ideals(&self) -> &[LabelledIdeal] {
        &self.ideals
    }

    /// Looks up a registered ideal by label.
    pub fn ideal(&self, label: &str) -> Option<&Ideal> {
        self.ideals
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.ideal)
    }

    /// Registered ideals that are prime, in registration order.
    pub fn get_prime_ideals(&self) -> Result<Vec<&LabelledIdeal>, AlgebraError> {
        let mut primes = Vec::new();
        for entry in &self.ideals {
            if entry.ideal.is_prime()? {
                primes.push(entry);
            }
        }
        Ok(primes)
    }

    /// Registered ideals that are maximal, in registration order.
    pub fn get_maximal_ideals(&self) -> Result<Vec<&LabelledIdeal>, AlgebraError> {
        let mut maximal = Vec::new();
        for entry in &self.ideals {
            if entry.ideal.is_maximal()? {
                maximal.push(entry);
            }
        }
        Ok(maximal)
    }

    /// Finitely many variables over a field: Noetherian by the Hilbert basis
    /// theorem.
    pub fn is_noetherian(&self) -> bool {
        match self.ring.field() {
            BaseField::Rationals => true,
        }
    }
}
