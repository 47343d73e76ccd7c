use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use noether_core::errors::{AlgebraError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::monomial::VarId;
use crate::parse;
use crate::polynomial::Polynomial;

static NEXT_RING_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`PolyRing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RingId(u64);

impl RingId {
    fn fresh() -> Self {
        Self(NEXT_RING_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Coefficient field of a polynomial ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseField {
    /// The rational numbers.
    #[default]
    Rationals,
}

impl std::fmt::Display for BaseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseField::Rationals => f.write_str("Q"),
        }
    }
}

/// Polynomial ring `k[x_0, .., x_{n-1}]` over a base field.
///
/// Rings are shared through `Arc`; two rings are the same ring only when
/// their [`RingId`]s match, even if they declare identical variables.
#[derive(Debug)]
pub struct PolyRing {
    id: RingId,
    name: String,
    variables: Vec<String>,
    field: BaseField,
}

impl PolyRing {
    /// Declares a ring over the rationals with the given variable names.
    pub fn new<I, S>(name: impl Into<String>, variables: I) -> Result<Arc<Self>, AlgebraError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let variables: Vec<String> = variables.into_iter().map(Into::into).collect();
        for (idx, var) in variables.iter().enumerate() {
            if !parse::is_identifier(var) {
                return Err(AlgebraError::Parse(
                    ErrorInfo::new("invalid-variable", "variable names must be identifiers")
                        .with_context("ring", name.clone())
                        .with_context("variable", var.clone()),
                ));
            }
            if variables[..idx].contains(var) {
                return Err(AlgebraError::Parse(
                    ErrorInfo::new("duplicate-variable", "variable declared twice")
                        .with_context("ring", name.clone())
                        .with_context("variable", var.clone()),
                ));
            }
        }
        Ok(Arc::new(Self {
            id: RingId::fresh(),
            name,
            variables,
            field: BaseField::Rationals,
        }))
    }

    /// Ring identity.
    pub fn id(&self) -> RingId {
        self.id
    }

    /// Ring name used in rendering.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coefficient field.
    pub fn field(&self) -> BaseField {
        self.field
    }

    /// Declared variable names in declaration order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Number of declared variables.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Resolves a variable name.
    pub fn var(&self, name: &str) -> Result<VarId, AlgebraError> {
        self.variables
            .iter()
            .position(|candidate| candidate == name)
            .map(|idx| VarId::from_raw(idx as u32))
            .ok_or_else(|| {
                AlgebraError::VariableOutOfScope(
                    ErrorInfo::new("unknown-variable", "variable is not declared by the ring")
                        .with_context("ring", self.name.clone())
                        .with_context("variable", name.to_string()),
                )
            })
    }

    /// The polynomial consisting of the named variable.
    pub fn variable(&self, name: &str) -> Result<Polynomial, AlgebraError> {
        Ok(Polynomial::var(self.var(name)?))
    }

    /// All ring variables as polynomials, in declaration order.
    pub fn all_variables(&self) -> Vec<Polynomial> {
        (0..self.variables.len())
            .map(|idx| Polynomial::var(VarId::from_raw(idx as u32)))
            .collect()
    }

    /// Fails with `VariableOutOfScope` when `poly` uses an undeclared variable.
    pub fn check_scope(&self, poly: &Polynomial) -> Result<(), AlgebraError> {
        match poly.max_var() {
            Some(var) if var.index() >= self.variables.len() => {
                Err(AlgebraError::VariableOutOfScope(
                    ErrorInfo::new(
                        "variable-out-of-scope",
                        "polynomial references a variable outside the ring",
                    )
                    .with_context("ring", self.name.clone())
                    .with_context("variable_index", var.as_raw().to_string())
                    .with_context("declared", self.variables.len().to_string()),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Parses a polynomial written with this ring's variable names.
    pub fn parse(&self, text: &str) -> Result<Polynomial, AlgebraError> {
        parse::parse_polynomial(self, text)
    }

    /// Renders a polynomial with this ring's variable names.
    pub fn render(&self, poly: &Polynomial) -> String {
        poly.render_with(&self.variables)
    }

    /// Human readable ring descriptor, e.g. `Q[x, y, z]`.
    pub fn describe(&self) -> String {
        format!("{}[{}]", self.field, self.variables.join(", "))
    }
}
