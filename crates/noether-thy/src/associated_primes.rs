use noether_core::errors::AlgebraError;
use noether_core::SchemaVersion;
use noether_ideal::Ideal;
use noether_module::QuotientModule;
use tracing::debug;

use crate::policy::CheckPolicy;
use crate::report::{AssociatedPrimesReport, CheckProvenance};

fn rendered(ideals: &[Ideal]) -> Vec<String> {
    ideals.iter().map(Ideal::describe).collect()
}

/// Checks `⋂ Ass(M) = √Ann(M)` for the cyclic module `M = R / I`.
///
/// Associated primes come from the monomial decomposition of `I`, so a
/// non-monomial defining ideal is reported as a computation error.
pub fn check_associated_primes(
    module: &QuotientModule,
    policy: &CheckPolicy,
) -> Result<AssociatedPrimesReport, AlgebraError> {
    let annihilator = module.annihilator().with_limits(policy.limits());
    let primes = annihilator.associated_primes()?;
    let minimal = annihilator.minimal_primes()?;
    let embedded: Vec<Ideal> = primes
        .iter()
        .filter(|prime| !minimal.iter().any(|m| m.describe() == prime.describe()))
        .cloned()
        .collect();

    let intersection = Ideal::intersect_all(module.ring(), &primes)?;
    let radical = annihilator.radical()?;
    let holds = intersection.equals(&radical)?;
    debug!(
        module = module.name(),
        primes = primes.len(),
        embedded = embedded.len(),
        holds,
        "associated primes"
    );

    let ring = module.ring();
    let provenance = CheckProvenance {
        schema: SchemaVersion::default(),
        policy: policy.clone(),
        ring: format!("{} = {}", ring.name(), ring.describe()),
        module: module.describe(),
    };
    AssociatedPrimesReport::new(
        annihilator.describe(),
        rendered(&primes),
        rendered(&embedded),
        intersection.describe(),
        radical.describe(),
        holds,
        provenance,
    )
}
