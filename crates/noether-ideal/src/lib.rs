#![deny(missing_docs)]
#![doc = "Ideals of polynomial rings: membership, radicals, primality and monomial decomposition."]

mod ideal;
mod monomial_ideal;
mod radical;
mod structure;

pub use ideal::{Ideal, ReductionLimits};
