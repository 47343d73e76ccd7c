use std::sync::Arc;

use noether_core::errors::AlgebraError;
use noether_ideal::Ideal;
use noether_poly::PolyRing;

use crate::module::Module;

/// Cyclic module `R / I`.
#[derive(Debug, Clone)]
pub struct QuotientModule {
    name: String,
    ideal: Ideal,
}

impl QuotientModule {
    /// Quotient of the ring by `ideal`.
    pub fn new(name: impl Into<String>, ideal: Ideal) -> Self {
        Self {
            name: name.into(),
            ideal,
        }
    }

    /// Module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ring the quotient is taken in.
    pub fn ring(&self) -> &Arc<PolyRing> {
        self.ideal.ring()
    }

    /// Defining ideal `I`.
    pub fn defining_ideal(&self) -> &Ideal {
        &self.ideal
    }

    /// `Ann(R / I) = I`.
    pub fn annihilator(&self) -> Ideal {
        self.ideal.clone()
    }

    /// Associated primes of `R / I`; requires a monomial defining ideal.
    pub fn associated_primes(&self) -> Result<Vec<Ideal>, AlgebraError> {
        self.ideal.associated_primes()
    }

    /// Presentation with one generator and one relation per generator of `I`.
    pub fn as_module(&self) -> Result<Module, AlgebraError> {
        let relations = self
            .ideal
            .generators()
            .iter()
            .map(|g| vec![g.clone()])
            .collect();
        Module::new(self.ring(), self.name.clone(), vec!["1".to_string()], relations)
    }

    /// Description such as `M = A / (x*y, y*z)`.
    pub fn describe(&self) -> String {
        format!("{} = {} / {}", self.name, self.ring().name(), self.ideal)
    }
}
