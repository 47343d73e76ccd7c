//! Univariate gcd and squarefree parts.

use num_rational::BigRational;
use num_traits::One;
use tracing::trace;

use crate::polynomial::Polynomial;

impl Polynomial {
    /// Monic gcd of two polynomials in (at most) one common variable.
    ///
    /// Euclid's algorithm over the rationals. Multivariate inputs are not
    /// rejected, but the result is then only a common divisor.
    pub fn univariate_gcd(&self, other: &Polynomial) -> Polynomial {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r;
        }
        a.make_monic()
    }

    /// Squarefree part, normalized to be monic.
    ///
    /// The monomial content has every exponent clamped to one. The cofactor
    /// `f` is replaced by `f / gcd(f, ∂f/∂x1, .., ∂f/∂xn)`, which over the
    /// rationals removes every repeated factor.
    pub fn squarefree_part(&self) -> Polynomial {
        if self.is_zero() {
            return Polynomial::zero();
        }
        if self.is_constant() {
            return Polynomial::one();
        }
        let (content, rest) = self.split_monomial_content();
        let repeated = rest
            .support()
            .into_iter()
            .fold(rest.clone(), |acc, var| acc.gcd(&rest.derivative(var)));
        let rest = if repeated.is_constant() {
            rest
        } else {
            let (q, _) = rest.div_rem(&repeated);
            trace!(
                terms = rest.num_terms(),
                repeated_degree = repeated.total_degree(),
                "squarefree cofactor"
            );
            q
        };
        rest.mul_term(&BigRational::one(), &content.squarefree_part())
            .make_monic()
    }

    /// True when the polynomial equals its squarefree part up to a unit.
    pub fn is_squarefree(&self) -> bool {
        if self.is_zero() {
            return false;
        }
        self.make_monic() == self.squarefree_part()
    }
}
