use noether_core::errors::AlgebraError;
use noether_poly::{divide, Polynomial};
use tracing::debug;

use crate::ideal::Ideal;

/// Shape of an ideal after eliminating its linear generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shape {
    /// No non-zero generator.
    Zero,
    /// The ideal contains a non-zero constant.
    Unit,
    /// Generated by linear forms with `pivots` distinct leading variables.
    Linear { pivots: usize },
    /// Linear forms plus a single residual in the free variables.
    LinearPlusOne { pivots: usize, residual: Polynomial },
    /// Anything the structural rules do not cover.
    Other,
}

/// Linear generators in echelon form plus the non-linear generators reduced
/// modulo them.
#[derive(Debug, Clone)]
enum Echelon {
    Zero,
    Unit,
    Reduced {
        rows: Vec<Polynomial>,
        residuals: Vec<Polynomial>,
    },
}

/// Gaussian elimination on the linear generators, then reduction of the
/// remaining generators modulo the echelon rows.
///
/// Echelon rows have pairwise distinct leading variables, so they form a
/// lex Gröbner basis and every residual is expressed in the free variables.
fn echelon(ideal: &Ideal) -> Result<Echelon, AlgebraError> {
    if ideal.is_zero() {
        return Ok(Echelon::Zero);
    }
    if ideal.has_unit_generator() {
        return Ok(Echelon::Unit);
    }
    let max_steps = ideal.limits().max_steps;
    let mut rows: Vec<Polynomial> = Vec::new();
    let mut pending: Vec<Polynomial> = Vec::new();
    for generator in ideal.generators() {
        if generator.is_linear() {
            if push_row(&mut rows, generator, max_steps)? {
                return Ok(Echelon::Unit);
            }
        } else {
            pending.push(generator.clone());
        }
    }

    loop {
        let mut residuals: Vec<Polynomial> = Vec::new();
        let mut new_row = None;
        for generator in &pending {
            let residual = divide(generator, &rows, max_steps)?.remainder;
            if residual.is_zero() {
                continue;
            }
            if residual.is_constant() {
                return Ok(Echelon::Unit);
            }
            if residual.is_linear() {
                new_row = Some(residual);
                break;
            }
            let residual = residual.make_monic();
            if !residuals.contains(&residual) {
                residuals.push(residual);
            }
        }
        match new_row {
            Some(row) => {
                if push_row(&mut rows, &row, max_steps)? {
                    return Ok(Echelon::Unit);
                }
            }
            None => return Ok(Echelon::Reduced { rows, residuals }),
        }
    }
}

/// Structural shape of `ideal`.
pub(crate) fn classify(ideal: &Ideal) -> Result<Shape, AlgebraError> {
    let shape = match echelon(ideal)? {
        Echelon::Zero => Shape::Zero,
        Echelon::Unit => Shape::Unit,
        Echelon::Reduced {
            rows,
            mut residuals,
        } => {
            let pivots = rows.len();
            if residuals.len() > 1 {
                Shape::Other
            } else {
                match residuals.pop() {
                    None => Shape::Linear { pivots },
                    Some(residual) => Shape::LinearPlusOne { pivots, residual },
                }
            }
        }
    };
    debug!(ideal = %ideal, ?shape, "classified ideal");
    Ok(shape)
}

/// Divisors used for normal forms: the echelon rows followed by the
/// residuals.
///
/// With at most one residual the leading monomials are pairwise coprime, so
/// the divisors form a lex Gröbner basis of the ideal.
pub(crate) fn reduction_basis(ideal: &Ideal) -> Result<Vec<Polynomial>, AlgebraError> {
    Ok(match echelon(ideal)? {
        Echelon::Zero => Vec::new(),
        Echelon::Unit => vec![Polynomial::one()],
        Echelon::Reduced {
            mut rows,
            residuals,
        } => {
            rows.extend(residuals);
            rows
        }
    })
}

/// Reduces `row` against the echelon rows and appends it when non-zero.
/// Returns true when the row reduced to a non-zero constant.
fn push_row(
    rows: &mut Vec<Polynomial>,
    row: &Polynomial,
    max_steps: usize,
) -> Result<bool, AlgebraError> {
    let reduced = divide(row, rows, max_steps)?.remainder;
    if reduced.is_zero() {
        return Ok(false);
    }
    if reduced.is_constant() {
        return Ok(true);
    }
    rows.push(reduced.make_monic());
    Ok(false)
}

impl Ideal {
    /// True unless the generators reduce to a non-zero constant.
    pub fn is_proper(&self) -> Result<bool, AlgebraError> {
        Ok(classify(self)? != Shape::Unit)
    }

    /// True when the ideal is recognisably the whole ring.
    pub fn is_unit(&self) -> Result<bool, AlgebraError> {
        Ok(!self.is_proper()?)
    }

    /// Structural primality test.
    ///
    /// Prime: the zero ideal, ideals of linear forms, and linear forms plus
    /// one residual that is irreducible in the free variables. Every other
    /// shape, including residuals of undecided irreducibility, is reported
    /// as not prime.
    pub fn is_prime(&self) -> Result<bool, AlgebraError> {
        Ok(match classify(self)? {
            Shape::Zero | Shape::Linear { .. } => true,
            Shape::LinearPlusOne { residual, .. } => residual.is_irreducible(),
            Shape::Unit | Shape::Other => false,
        })
    }

    /// Structural maximality test.
    ///
    /// Maximal: linear forms pinning every variable (a rational point), or
    /// linear forms pinning all but one variable plus an irreducible
    /// univariate residual in the remaining one.
    pub fn is_maximal(&self) -> Result<bool, AlgebraError> {
        let vars = self.ring().num_vars();
        Ok(match classify(self)? {
            Shape::Zero => vars == 0,
            Shape::Linear { pivots } => pivots == vars,
            Shape::LinearPlusOne { pivots, residual } => {
                pivots + 1 == vars
                    && residual.univariate_var().is_some()
                    && residual.is_irreducible()
            }
            Shape::Unit | Shape::Other => false,
        })
    }
}
