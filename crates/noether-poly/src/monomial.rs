use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use noether_core::errors::{AlgebraError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Identifier for a ring variable, numbered in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VarId(u32);

impl VarId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Returns the declaration index of the variable.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Product of ring variables raised to non-negative exponents.
///
/// Variables with exponent zero are never stored, so two monomials are equal
/// exactly when they are structurally equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monomial {
    powers: BTreeMap<VarId, u32>,
}

impl Monomial {
    /// The unit monomial `1`.
    pub fn one() -> Self {
        Self::default()
    }

    /// Builds a monomial from dense exponents given in declaration order.
    pub fn new(exponents: &[i64]) -> Result<Self, AlgebraError> {
        let mut powers = BTreeMap::new();
        for (idx, &exp) in exponents.iter().enumerate() {
            if exp < 0 {
                return Err(AlgebraError::InvalidExponent(
                    ErrorInfo::new("negative-exponent", "monomial exponents must be non-negative")
                        .with_context("position", idx.to_string())
                        .with_context("exponent", exp.to_string()),
                ));
            }
            let exp = u32::try_from(exp).map_err(|_| {
                AlgebraError::InvalidExponent(
                    ErrorInfo::new("exponent-overflow", "exponent does not fit in 32 bits")
                        .with_context("position", idx.to_string()),
                )
            })?;
            if exp > 0 {
                powers.insert(VarId::from_raw(idx as u32), exp);
            }
        }
        Ok(Self { powers })
    }

    /// Builds a monomial from sparse `(variable, exponent)` pairs, summing repeats.
    pub fn from_powers(pairs: impl IntoIterator<Item = (VarId, u32)>) -> Self {
        let mut powers = BTreeMap::new();
        for (var, exp) in pairs {
            if exp > 0 {
                let slot = powers.entry(var).or_insert(0u32);
                *slot = slot.saturating_add(exp);
            }
        }
        Self { powers }
    }

    /// The monomial consisting of a single variable.
    pub fn var(var: VarId) -> Self {
        Self::var_power(var, 1)
    }

    /// The monomial `var^exp`.
    pub fn var_power(var: VarId, exp: u32) -> Self {
        Self::from_powers([(var, exp)])
    }

    /// Exponent of `var` (zero when absent).
    pub fn exponent(&self, var: VarId) -> u32 {
        self.powers.get(&var).copied().unwrap_or(0)
    }

    /// Iterates over `(variable, exponent)` pairs with non-zero exponent.
    pub fn powers(&self) -> impl Iterator<Item = (VarId, u32)> + '_ {
        self.powers.iter().map(|(var, exp)| (*var, *exp))
    }

    /// Variables appearing with a non-zero exponent.
    pub fn support(&self) -> BTreeSet<VarId> {
        self.powers.keys().copied().collect()
    }

    /// Highest variable index used, if any.
    pub fn max_var(&self) -> Option<VarId> {
        self.powers.keys().next_back().copied()
    }

    /// Returns true for the unit monomial.
    pub fn is_one(&self) -> bool {
        self.powers.is_empty()
    }

    /// Total degree (sum of exponents).
    pub fn degree(&self) -> u32 {
        self.powers
            .values()
            .fold(0u32, |acc, exp| acc.saturating_add(*exp))
    }

    /// Exponent-wise sum. Exponents saturate at `u32::MAX`; see
    /// [`Monomial::checked_multiply`].
    pub fn multiply(&self, other: &Monomial) -> Monomial {
        Monomial::from_powers(self.powers().chain(other.powers()))
    }

    /// Exponent-wise sum, failing with `InvalidExponent` when an exponent
    /// leaves the 32-bit range.
    pub fn checked_multiply(&self, other: &Monomial) -> Result<Monomial, AlgebraError> {
        let mut powers = self.powers.clone();
        for (var, exp) in other.powers() {
            let slot = powers.entry(var).or_insert(0);
            *slot = slot.checked_add(exp).ok_or_else(|| {
                AlgebraError::InvalidExponent(
                    ErrorInfo::new("exponent-overflow", "exponent does not fit in 32 bits")
                        .with_context("variable", var.as_raw().to_string()),
                )
            })?;
        }
        Ok(Self { powers })
    }

    /// True when every exponent of `self` is at most the matching exponent of `other`.
    pub fn divides(&self, other: &Monomial) -> bool {
        self.powers
            .iter()
            .all(|(var, exp)| other.exponent(*var) >= *exp)
    }

    /// Exact quotient `other / self`, or `None` when `self` does not divide `other`.
    pub fn quotient_of(&self, other: &Monomial) -> Option<Monomial> {
        if !self.divides(other) {
            return None;
        }
        Some(Monomial::from_powers(
            other
                .powers()
                .map(|(var, exp)| (var, exp - self.exponent(var))),
        ))
    }

    /// Least common multiple (exponent-wise maximum).
    pub fn lcm(&self, other: &Monomial) -> Monomial {
        let mut powers = self.powers.clone();
        for (var, exp) in other.powers() {
            let entry = powers.entry(var).or_insert(0);
            *entry = (*entry).max(exp);
        }
        Monomial { powers }
    }

    /// Greatest common divisor (exponent-wise minimum).
    pub fn gcd(&self, other: &Monomial) -> Monomial {
        Monomial::from_powers(
            self.powers()
                .map(|(var, exp)| (var, exp.min(other.exponent(var)))),
        )
    }

    /// True when no variable has exponent above one.
    pub fn is_squarefree(&self) -> bool {
        self.powers.values().all(|exp| *exp == 1)
    }

    /// Product of the support variables, i.e. every exponent clamped to one.
    pub fn squarefree_part(&self) -> Monomial {
        Monomial::from_powers(self.powers.keys().map(|var| (*var, 1)))
    }

    /// True when the monomial is a power of a single variable.
    pub fn is_pure_power(&self) -> bool {
        self.powers.len() == 1
    }

    /// True when the two monomials share no variable.
    pub fn is_coprime_to(&self, other: &Monomial) -> bool {
        self.powers.keys().all(|var| other.exponent(*var) == 0)
    }

    /// Lexicographic comparison; the earliest declared variable is most significant.
    pub fn lex_cmp(&self, other: &Monomial) -> Ordering {
        let vars: BTreeSet<VarId> = self
            .powers
            .keys()
            .chain(other.powers.keys())
            .copied()
            .collect();
        for var in vars {
            match self.exponent(var).cmp(&other.exponent(var)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Graded lexicographic comparison (total degree first, then lex).
    pub fn grlex_cmp(&self, other: &Monomial) -> Ordering {
        match self.degree().cmp(&other.degree()) {
            Ordering::Equal => self.lex_cmp(other),
            ord => ord,
        }
    }
}

/// Term order used when selecting leading monomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonomialOrder {
    /// Pure lexicographic order on declaration order.
    #[default]
    Lex,
    /// Graded lexicographic order.
    GrLex,
}

impl MonomialOrder {
    /// Compares two monomials under this order.
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => a.lex_cmp(b),
            MonomialOrder::GrLex => a.grlex_cmp(b),
        }
    }
}
