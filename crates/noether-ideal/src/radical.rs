use noether_core::errors::AlgebraError;
use noether_poly::Polynomial;
use num_rational::BigRational;
use num_traits::One;
use tracing::debug;

use crate::ideal::Ideal;
use crate::monomial_ideal::minimal_monomials;

impl Ideal {
    /// Radical of the ideal.
    ///
    /// Exact for the zero and unit ideals, for structurally prime ideals, for
    /// principal ideals and for monomial ideals. Otherwise every generator is
    /// replaced by its squarefree part and redundant generators are dropped,
    /// which yields an ideal between `I` and `√I`.
    pub fn radical(&self) -> Result<Ideal, AlgebraError> {
        if self.is_zero() {
            return Ok(self.clone());
        }
        if self.is_unit()? {
            return Ok(Ideal::unit(self.ring()).with_limits(self.limits()));
        }
        if self.is_prime()? {
            return self.minimalized();
        }
        if self.is_principal() {
            let generators = self
                .generators()
                .iter()
                .map(Polynomial::squarefree_part)
                .collect();
            return Ok(self.derived(generators));
        }
        if self.is_monomial() {
            let monomials = self
                .generators()
                .iter()
                .filter_map(Polynomial::leading_monomial)
                .map(|m| m.squarefree_part());
            let generators = minimal_monomials(monomials)
                .into_iter()
                .map(|m| Polynomial::monomial(BigRational::one(), m))
                .collect();
            return Ok(self.derived(generators));
        }
        debug!(ideal = %self, "radical via squarefree generators");
        let generators = self
            .generators()
            .iter()
            .map(Polynomial::squarefree_part)
            .collect();
        self.derived(generators).minimalized()
    }

    /// True when the ideal equals its radical.
    pub fn is_radical(&self) -> Result<bool, AlgebraError> {
        self.equals(&self.radical()?)
    }
}
