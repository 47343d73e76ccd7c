#![deny(missing_docs)]
#![doc = "Theorem checks over Noetherian rings: local freeness of modules and associated primes of cyclic modules."]

mod associated_primes;
/// Canonical hashing helpers.
pub mod hash;
mod local_freeness;
/// Check policy and YAML loading.
pub mod policy;
/// Report types.
pub mod report;
/// Canonical JSON helpers.
pub mod serde;

pub use associated_primes::check_associated_primes;
pub use local_freeness::check_local_freeness;
pub use policy::CheckPolicy;
pub use report::{
    AssociatedPrimesReport, CheckProvenance, IdealDiagnostic, LocalFreenessReport, TheoremResult,
};
