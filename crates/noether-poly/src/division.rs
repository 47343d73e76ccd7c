use noether_core::errors::{AlgebraError, ErrorInfo};
use tracing::trace;

use crate::polynomial::Polynomial;

/// Outcome of dividing a polynomial by an ordered list of divisors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    /// One quotient per divisor, in divisor order.
    pub quotients: Vec<Polynomial>,
    /// Remainder; no term is divisible by any divisor's leading monomial.
    pub remainder: Polynomial,
    /// Number of rewrite steps performed.
    pub steps: usize,
}

/// Multivariate division under lex order.
///
/// At every step the leading term of the running dividend is either reduced
/// by the first divisor whose leading monomial divides it, or moved to the
/// remainder. Each step removes the current leading monomial, so the loop
/// terminates; `max_steps` bounds the work and trips a computation error.
pub fn divide(
    dividend: &Polynomial,
    divisors: &[Polynomial],
    max_steps: usize,
) -> Result<Division, AlgebraError> {
    let mut quotients = vec![Polynomial::zero(); divisors.len()];
    let mut remainder = Polynomial::zero();
    let mut rest = dividend.clone();
    let mut steps = 0usize;
    while let Some(term) = rest.leading_term().cloned() {
        steps += 1;
        if steps > max_steps {
            return Err(AlgebraError::Computation(
                ErrorInfo::new("reduction-limit", "polynomial reduction exceeded its step guard")
                    .with_context("max_steps", max_steps.to_string())
                    .with_context("remaining_terms", rest.num_terms().to_string())
                    .with_hint("raise max_reduction_steps in the check policy"),
            ));
        }
        let reducer = divisors.iter().enumerate().find_map(|(idx, divisor)| {
            let lead = divisor.leading_term()?;
            let factor = lead.monomial.quotient_of(&term.monomial)?;
            Some((idx, &term.coeff / &lead.coeff, factor))
        });
        match reducer {
            Some((idx, coeff, factor)) => {
                trace!(step = steps, divisor = idx, "reduce leading term");
                quotients[idx] =
                    quotients[idx].add(&Polynomial::monomial(coeff.clone(), factor.clone()));
                rest = rest.sub(&divisors[idx].mul_term(&coeff, &factor));
            }
            None => {
                let single = Polynomial::monomial(term.coeff, term.monomial);
                remainder = remainder.add(&single);
                rest = rest.sub(&single);
            }
        }
    }
    Ok(Division {
        quotients,
        remainder,
        steps,
    })
}
