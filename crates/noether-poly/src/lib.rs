#![deny(missing_docs)]
#![doc = "Monomials, sparse rational polynomials and polynomial ring contexts for the Noether engine."]

mod division;
mod gcd;
mod irreducible;
mod monomial;
pub mod parse;
mod polynomial;
mod ring;
mod squarefree;

pub use division::{divide, Division};
pub use irreducible::Irreducibility;
pub use monomial::{Monomial, MonomialOrder, VarId};
pub use polynomial::{rational, Polynomial, Term};
pub use ring::{BaseField, PolyRing, RingId};
