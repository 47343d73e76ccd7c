use std::collections::BTreeMap;

use noether_core::errors::AlgebraError;
use noether_core::SchemaVersion;
use noether_module::{LabelledIdeal, Module, NoetherianRing};
use tracing::debug;

use crate::policy::CheckPolicy;
use crate::report::{CheckProvenance, IdealDiagnostic, LocalFreenessReport, TheoremResult};

/// Local ranks computed so far, keyed by ideal label.
type LocalCache = BTreeMap<String, (usize, bool)>;

fn free_at_all(
    module: &Module,
    ideals: &[&LabelledIdeal],
    short_circuit: bool,
    cache: &mut LocalCache,
) -> Result<bool, AlgebraError> {
    let mut holds = true;
    for entry in ideals {
        let free = match cache.get(&entry.label) {
            Some((_, free)) => *free,
            None => {
                let rank = module.local_rank(&entry.ideal)?;
                let free = rank == module.generic_rank();
                cache.insert(entry.label.clone(), (rank, free));
                free
            }
        };
        if !free {
            debug!(module = module.name(), label = %entry.label, "not free at localization");
            holds = false;
            if short_circuit {
                break;
            }
        }
    }
    Ok(holds)
}

/// Checks that projective, free at every prime and free at every maximal
/// ideal agree for `module` over `ring`.
///
/// The conditions run in order; conditions two and three visit the ring's
/// ideals in registration order and, under a short-circuiting policy, stop
/// at the first ideal where the module is not free.
pub fn check_local_freeness(
    ring: &NoetherianRing,
    module: &Module,
    policy: &CheckPolicy,
) -> Result<LocalFreenessReport, AlgebraError> {
    let ring = ring.clone().with_limits(policy.limits());

    let condition1 = module.is_projective();
    debug!(module = module.name(), condition1, "projectivity");

    let primes = ring.get_prime_ideals()?;
    let maximal = ring.get_maximal_ideals()?;
    let mut cache = LocalCache::new();
    let condition2 = free_at_all(module, &primes, policy.short_circuit, &mut cache)?;
    let condition3 = free_at_all(module, &maximal, policy.short_circuit, &mut cache)?;
    let result = TheoremResult::new(condition1, condition2, condition3);
    debug!(?result, "local freeness");

    let diagnostics = if policy.record_diagnostics {
        ring.ideals()
            .iter()
            .map(|entry| {
                let local = cache.get(&entry.label);
                IdealDiagnostic {
                    label: entry.label.clone(),
                    ideal: entry.ideal.describe(),
                    prime: primes.iter().any(|p| p.label == entry.label),
                    maximal: maximal.iter().any(|m| m.label == entry.label),
                    local_rank: local.map(|(rank, _)| *rank),
                    free: local.map(|(_, free)| *free),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let provenance = CheckProvenance {
        schema: SchemaVersion::default(),
        policy: policy.clone(),
        ring: format!("{} = {}", ring.name(), ring.poly_ring().describe()),
        module: module.describe(),
    };
    LocalFreenessReport::new(
        result,
        module.rank(),
        module.generic_rank(),
        diagnostics,
        provenance,
    )
}
