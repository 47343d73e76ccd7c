//! Multivariate gcd by primitive remainder sequences.

use num_rational::BigRational;
use num_traits::One;
use tracing::trace;

use crate::monomial::{Monomial, VarId};
use crate::polynomial::Polynomial;

impl Polynomial {
    /// Monic greatest common divisor over the rationals.
    ///
    /// Recursive in the variables: both inputs are split into content and
    /// primitive part with respect to their first common variable, the
    /// contents recurse on fewer variables and the primitive parts run a
    /// pseudo-remainder sequence. `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() {
            return other.make_monic();
        }
        if other.is_zero() {
            return self.make_monic();
        }
        if self.is_constant() || other.is_constant() {
            return Polynomial::one();
        }
        let support: Vec<VarId> = self.support().union(&other.support()).copied().collect();
        let Some(&var) = support.first() else {
            return Polynomial::one();
        };

        if self.degree_in(var) == 0 {
            return self.gcd(&other.content_in(var));
        }
        if other.degree_in(var) == 0 {
            return self.content_in(var).gcd(other);
        }

        let (a_content, mut a) = self.split_content_in(var);
        let (b_content, mut b) = other.split_content_in(var);
        let content = a_content.gcd(&b_content);
        if a.degree_in(var) < b.degree_in(var) {
            std::mem::swap(&mut a, &mut b);
        }
        let mut rounds = 0usize;
        while !b.is_zero() {
            let r = a.pseudo_remainder(&b, var);
            a = b;
            b = if r.is_zero() { r } else { r.split_content_in(var).1 };
            rounds += 1;
        }
        trace!(var = var.as_raw(), rounds, "multivariate gcd");
        content.mul(&a).make_monic()
    }

    /// Gcd of the coefficients of `self` seen as a polynomial in `var`.
    pub fn content_in(&self, var: VarId) -> Polynomial {
        (0..=self.degree_in(var))
            .map(|power| self.coefficient_of(var, power))
            .fold(Polynomial::zero(), |acc, coeff| acc.gcd(&coeff))
    }

    /// Splits `self = content * primitive` with respect to `var`.
    fn split_content_in(&self, var: VarId) -> (Polynomial, Polynomial) {
        let content = self.content_in(var);
        if content.is_zero() || content.is_unit() {
            return (Polynomial::one(), self.clone());
        }
        let (primitive, _) = self.div_rem(&content);
        (content, primitive)
    }

    /// Remainder of `lc(b)^k * self` on division by `b` in `var`, with
    /// coefficients in the remaining variables.
    fn pseudo_remainder(&self, divisor: &Polynomial, var: VarId) -> Polynomial {
        let divisor_degree = divisor.degree_in(var);
        let divisor_lead = divisor.coefficient_of(var, divisor_degree);
        let mut rest = self.clone();
        while !rest.is_zero() && rest.degree_in(var) >= divisor_degree {
            let degree = rest.degree_in(var);
            let lead = rest.coefficient_of(var, degree);
            let shift = Monomial::var_power(var, degree - divisor_degree);
            let cancel = divisor.mul(&lead).mul_term(&BigRational::one(), &shift);
            rest = rest.mul(&divisor_lead).sub(&cancel);
        }
        rest
    }
}
