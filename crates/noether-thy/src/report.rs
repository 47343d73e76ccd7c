use noether_core::errors::AlgebraError;
use noether_core::SchemaVersion;
use serde::{Deserialize, Serialize};

use crate::hash::stable_hash_string;
use crate::policy::CheckPolicy;
use crate::serde::to_canonical_json_bytes;

/// Outcome of the three local freeness conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheoremResult {
    /// The module is projective.
    pub condition1: bool,
    /// The module is free at every registered prime.
    pub condition2: bool,
    /// The module is free at every registered maximal ideal.
    pub condition3: bool,
    /// All three conditions agree.
    pub equivalent: bool,
}

impl TheoremResult {
    /// Builds a result, deriving `equivalent` from the three conditions.
    pub fn new(condition1: bool, condition2: bool, condition3: bool) -> Self {
        Self {
            condition1,
            condition2,
            condition3,
            equivalent: condition1 == condition2 && condition2 == condition3,
        }
    }
}

/// Per-ideal evaluation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealDiagnostic {
    /// Registration label.
    pub label: String,
    /// Rendered generators.
    pub ideal: String,
    /// Structural primality.
    pub prime: bool,
    /// Structural maximality.
    pub maximal: bool,
    /// Minimal generator count of the localization, when evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_rank: Option<usize>,
    /// Whether the localization is free, when evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,
}

/// Inputs and knobs recorded alongside a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckProvenance {
    /// Report schema version.
    pub schema: SchemaVersion,
    /// Policy in effect.
    pub policy: CheckPolicy,
    /// Ring descriptor, e.g. `A = Q[x, y, z]`.
    pub ring: String,
    /// Module descriptor.
    pub module: String,
}

/// Local freeness check output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFreenessReport {
    /// Content hash of everything below.
    pub analysis_hash: String,
    /// Condition outcomes.
    pub result: TheoremResult,
    /// Generator count of the minimal presentation.
    pub module_rank: usize,
    /// Rank over the fraction field.
    pub generic_rank: usize,
    /// Per-ideal rows, empty unless the policy records them.
    #[serde(default)]
    pub diagnostics: Vec<IdealDiagnostic>,
    /// Provenance of the run.
    pub provenance: CheckProvenance,
}

impl LocalFreenessReport {
    /// Assembles a report and computes its content hash.
    pub fn new(
        result: TheoremResult,
        module_rank: usize,
        generic_rank: usize,
        diagnostics: Vec<IdealDiagnostic>,
        provenance: CheckProvenance,
    ) -> Result<Self, AlgebraError> {
        let analysis_hash = stable_hash_string(&(
            &result,
            module_rank,
            generic_rank,
            &diagnostics,
            &provenance,
        ))?;
        Ok(Self {
            analysis_hash,
            result,
            module_rank,
            generic_rank,
            diagnostics,
            provenance,
        })
    }

    /// Canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, AlgebraError> {
        to_canonical_json_bytes(self)
    }
}

/// Associated primes check output for a cyclic module `R / I`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedPrimesReport {
    /// Content hash of everything below.
    pub analysis_hash: String,
    /// `Ann(M)`, rendered.
    pub annihilator: String,
    /// `Ass(M)`, rendered in a deterministic order.
    pub associated_primes: Vec<String>,
    /// Associated primes that are not minimal.
    pub embedded_primes: Vec<String>,
    /// `⋂ Ass(M)`, rendered.
    pub intersection: String,
    /// `√Ann(M)`, rendered.
    pub radical: String,
    /// The intersection equals the radical.
    pub holds: bool,
    /// Provenance of the run.
    pub provenance: CheckProvenance,
}

impl AssociatedPrimesReport {
    /// Assembles a report and computes its content hash.
    pub fn new(
        annihilator: String,
        associated_primes: Vec<String>,
        embedded_primes: Vec<String>,
        intersection: String,
        radical: String,
        holds: bool,
        provenance: CheckProvenance,
    ) -> Result<Self, AlgebraError> {
        let analysis_hash = stable_hash_string(&(
            &annihilator,
            &associated_primes,
            &embedded_primes,
            &intersection,
            &radical,
            holds,
            &provenance,
        ))?;
        Ok(Self {
            analysis_hash,
            annihilator,
            associated_primes,
            embedded_primes,
            intersection,
            radical,
            holds,
            provenance,
        })
    }

    /// Canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, AlgebraError> {
        to_canonical_json_bytes(self)
    }
}
