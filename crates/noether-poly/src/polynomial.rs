//! Sparse multivariate polynomials with rational coefficients.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::monomial::{Monomial, MonomialOrder, VarId};

/// A single `coefficient * monomial` term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Non-zero rational coefficient.
    pub coeff: BigRational,
    /// Monomial part of the term.
    pub monomial: Monomial,
}

impl Term {
    /// Creates a new term.
    pub fn new(coeff: BigRational, monomial: Monomial) -> Self {
        Self { coeff, monomial }
    }
}

/// Polynomial over the rationals.
///
/// Terms are kept in strictly descending lexicographic order, no two terms
/// share a monomial and no coefficient is zero. The zero polynomial has no
/// terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

/// Integer helper used by fixtures and tests.
pub fn rational(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    /// A constant polynomial.
    pub fn constant(c: BigRational) -> Self {
        Self::from_terms([Term::new(c, Monomial::one())])
    }

    /// A constant polynomial from an integer.
    pub fn from_int(value: i64) -> Self {
        Self::constant(BigRational::from_integer(BigInt::from(value)))
    }

    /// The polynomial consisting of a single variable.
    pub fn var(var: VarId) -> Self {
        Self::monomial(BigRational::one(), Monomial::var(var))
    }

    /// A single-term polynomial.
    pub fn monomial(coeff: BigRational, monomial: Monomial) -> Self {
        Self::from_terms([Term::new(coeff, monomial)])
    }

    /// Builds a polynomial from arbitrary terms, combining like monomials.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut raw: Vec<Term> = terms.into_iter().collect();
        raw.sort_by(|a, b| b.monomial.lex_cmp(&a.monomial));
        let mut merged: Vec<Term> = Vec::with_capacity(raw.len());
        for term in raw {
            match merged.last_mut() {
                Some(last) if last.monomial == term.monomial => {
                    last.coeff = &last.coeff + &term.coeff;
                }
                _ => merged.push(term),
            }
        }
        merged.retain(|term| !term.coeff.is_zero());
        Self { terms: merged }
    }

    /// Terms in descending lex order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of non-zero terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Returns true for the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true for constants, including zero.
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|term| term.monomial.is_one())
    }

    /// Returns true for non-zero constants, the units of the ring.
    pub fn is_unit(&self) -> bool {
        !self.is_zero() && self.is_constant()
    }

    /// Returns true when the polynomial has exactly one term.
    pub fn is_monomial(&self) -> bool {
        self.terms.len() == 1
    }

    /// Value of a constant polynomial.
    pub fn constant_value(&self) -> Option<BigRational> {
        if !self.is_constant() {
            return None;
        }
        Some(
            self.terms
                .first()
                .map(|term| term.coeff.clone())
                .unwrap_or_else(BigRational::zero),
        )
    }

    /// Leading term under lex order.
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Leading monomial under lex order.
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|term| &term.monomial)
    }

    /// Leading coefficient (zero for the zero polynomial).
    pub fn leading_coeff(&self) -> BigRational {
        self.terms
            .first()
            .map(|term| term.coeff.clone())
            .unwrap_or_else(BigRational::zero)
    }

    /// Largest monomial under an arbitrary term order.
    pub fn max_monomial(&self, order: MonomialOrder) -> Option<&Monomial> {
        self.terms
            .iter()
            .map(|term| &term.monomial)
            .max_by(|a, b| order.compare(a, b))
    }

    /// Total degree (zero for constants and the zero polynomial).
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|term| term.monomial.degree())
            .max()
            .unwrap_or(0)
    }

    /// Degree in a single variable.
    pub fn degree_in(&self, var: VarId) -> u32 {
        self.terms
            .iter()
            .map(|term| term.monomial.exponent(var))
            .max()
            .unwrap_or(0)
    }

    /// Variables appearing in at least one term.
    pub fn support(&self) -> BTreeSet<VarId> {
        self.terms
            .iter()
            .flat_map(|term| term.monomial.support())
            .collect()
    }

    /// Highest variable index used, if any.
    pub fn max_var(&self) -> Option<VarId> {
        self.support().into_iter().next_back()
    }

    /// The variable of a univariate, non-constant polynomial.
    pub fn univariate_var(&self) -> Option<VarId> {
        let support = self.support();
        if support.len() == 1 {
            support.into_iter().next()
        } else {
            None
        }
    }

    /// Returns true when every term has total degree at most one.
    pub fn is_linear(&self) -> bool {
        self.total_degree() <= 1
    }

    /// Coefficient of `var^power`, as a polynomial in the remaining variables.
    pub fn coefficient_of(&self, var: VarId, power: u32) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().filter_map(|term| {
            if term.monomial.exponent(var) != power {
                return None;
            }
            let stripped = Monomial::from_powers(
                term.monomial.powers().filter(|(other, _)| *other != var),
            );
            Some(Term::new(term.coeff.clone(), stripped))
        }))
    }

    /// Sum of two polynomials.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().chain(other.terms.iter()).cloned())
    }

    /// Difference of two polynomials.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.neg())
    }

    /// Additive inverse.
    pub fn neg(&self) -> Polynomial {
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|term| Term::new(-term.coeff.clone(), term.monomial.clone()))
                .collect(),
        }
    }

    /// Multiplies every coefficient by `c`.
    pub fn scale(&self, c: &BigRational) -> Polynomial {
        if c.is_zero() {
            return Polynomial::zero();
        }
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|term| Term::new(&term.coeff * c, term.monomial.clone()))
                .collect(),
        }
    }

    /// Multiplies by a single term.
    pub fn mul_term(&self, coeff: &BigRational, monomial: &Monomial) -> Polynomial {
        if coeff.is_zero() {
            return Polynomial::zero();
        }
        // Multiplying by a monomial preserves the lex order of the terms.
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|term| Term::new(&term.coeff * coeff, term.monomial.multiply(monomial)))
                .collect(),
        }
    }

    /// Product of two polynomials.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for lhs in &self.terms {
            for rhs in &other.terms {
                terms.push(Term::new(
                    &lhs.coeff * &rhs.coeff,
                    lhs.monomial.multiply(&rhs.monomial),
                ));
            }
        }
        Polynomial::from_terms(terms)
    }

    /// Raises the polynomial to a non-negative power.
    pub fn pow(&self, exp: u32) -> Polynomial {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Formal partial derivative with respect to `var`.
    pub fn derivative(&self, var: VarId) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().filter_map(|term| {
            let exp = term.monomial.exponent(var);
            if exp == 0 {
                return None;
            }
            let lowered = Monomial::from_powers(term.monomial.powers().map(|(other, e)| {
                if other == var {
                    (other, e - 1)
                } else {
                    (other, e)
                }
            }));
            Some(Term::new(
                &term.coeff * BigRational::from_integer(BigInt::from(exp)),
                lowered,
            ))
        }))
    }

    /// Scales the polynomial so that its leading coefficient is one.
    pub fn make_monic(&self) -> Polynomial {
        let lc = self.leading_coeff();
        if lc.is_zero() || lc.is_one() {
            return self.clone();
        }
        self.scale(&lc.recip())
    }

    /// Greatest common monomial divisor of all terms.
    pub fn monomial_content(&self) -> Monomial {
        let mut iter = self.terms.iter();
        let Some(first) = iter.next() else {
            return Monomial::one();
        };
        iter.fold(first.monomial.clone(), |acc, term| acc.gcd(&term.monomial))
    }

    /// Splits `self = content * rest` where `content` is the monomial content.
    pub fn split_monomial_content(&self) -> (Monomial, Polynomial) {
        let content = self.monomial_content();
        if content.is_one() {
            return (content, self.clone());
        }
        let rest = Polynomial::from_terms(self.terms.iter().filter_map(|term| {
            content
                .quotient_of(&term.monomial)
                .map(|m| Term::new(term.coeff.clone(), m))
        }));
        (content, rest)
    }

    /// Division with remainder by a single divisor under lex order.
    ///
    /// Returns `(q, r)` with `self = q * divisor + r` and no term of `r`
    /// divisible by the leading monomial of `divisor`. A zero divisor yields
    /// `(0, self)`.
    pub fn div_rem(&self, divisor: &Polynomial) -> (Polynomial, Polynomial) {
        let Some(lead) = divisor.leading_term() else {
            return (Polynomial::zero(), self.clone());
        };
        let mut quotient = Polynomial::zero();
        let mut remainder = Polynomial::zero();
        let mut rest = self.clone();
        while let Some(term) = rest.leading_term().cloned() {
            match lead.monomial.quotient_of(&term.monomial) {
                Some(factor) => {
                    let coeff = &term.coeff / &lead.coeff;
                    quotient = quotient.add(&Polynomial::monomial(coeff.clone(), factor.clone()));
                    rest = rest.sub(&divisor.mul_term(&coeff, &factor));
                }
                None => {
                    let single = Polynomial::monomial(term.coeff, term.monomial);
                    remainder = remainder.add(&single);
                    rest = rest.sub(&single);
                }
            }
        }
        (quotient, remainder)
    }

    /// Evaluates a univariate polynomial at a rational point.
    pub fn eval_univariate(&self, value: &BigRational) -> BigRational {
        self.terms.iter().fold(BigRational::zero(), |acc, term| {
            let exp = term.monomial.degree();
            let mut power = BigRational::one();
            for _ in 0..exp {
                power = &power * value;
            }
            acc + &term.coeff * power
        })
    }

    /// Renders the polynomial with the supplied variable names.
    pub fn render_with(&self, names: &[String]) -> String {
        if self.terms.is_empty() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (idx, term) in self.terms.iter().enumerate() {
            let negative = term.coeff.is_negative();
            match (idx, negative) {
                (0, true) => out.push('-'),
                (0, false) => {}
                (_, true) => out.push_str(" - "),
                (_, false) => out.push_str(" + "),
            }
            let magnitude = term.coeff.abs();
            let vars: Vec<String> = term
                .monomial
                .powers()
                .map(|(var, exp)| {
                    let name = names
                        .get(var.index())
                        .cloned()
                        .unwrap_or_else(|| format!("x{}", var.as_raw()));
                    if exp == 1 {
                        name
                    } else {
                        format!("{name}^{exp}")
                    }
                })
                .collect();
            if vars.is_empty() {
                out.push_str(&magnitude.to_string());
            } else {
                if !magnitude.is_one() {
                    out.push_str(&magnitude.to_string());
                    out.push('*');
                }
                out.push_str(&vars.join("*"));
            }
        }
        out
    }

    /// Lex comparison of leading monomials, used to sort generator lists.
    pub fn leading_cmp(&self, other: &Polynomial) -> Ordering {
        match (self.leading_monomial(), other.leading_monomial()) {
            (Some(a), Some(b)) => a.lex_cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&[]))
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::mul(self, rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}
