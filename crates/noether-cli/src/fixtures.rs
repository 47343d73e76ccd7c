use std::fs;
use std::path::Path;
use std::sync::Arc;

use noether_core::errors::{AlgebraError, ErrorInfo};
use noether_ideal::Ideal;
use noether_module::{Module, NoetherianRing, QuotientModule};
use noether_poly::PolyRing;
use serde::{Deserialize, Serialize};
use tracing::debug;

fn fixture_error(code: &str, message: impl Into<String>) -> AlgebraError {
    AlgebraError::Parse(ErrorInfo::new(code, message))
}

/// Ring declaration inside a fixture file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RingSpec {
    pub name: String,
    pub variables: Vec<String>,
}

/// Labelled ideal inside a fixture file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdealSpec {
    pub label: String,
    pub generators: Vec<String>,
}

/// Module presentation inside a fixture file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleSpec {
    pub name: String,
    pub rank: usize,
    #[serde(default)]
    pub relations: Vec<Vec<String>>,
}

/// Cyclic quotient inside a fixture file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotientSpec {
    pub name: String,
    pub ideal: Vec<String>,
}

/// On-disk fixture layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureFile {
    pub ring: RingSpec,
    #[serde(default)]
    pub ideals: Vec<IdealSpec>,
    pub module: ModuleSpec,
    pub quotient: QuotientSpec,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl FixtureFile {
    /// Ring `A = Q[x, y, z]` with `m1 = (x, y, z)`, `p1 = (x)`,
    /// `m2 = (x - 1, y, z)`, the free module `P` of rank 3 and
    /// `M = A / (x*y, y*z)`.
    pub fn builtin() -> Self {
        Self {
            ring: RingSpec {
                name: "A".into(),
                variables: strings(&["x", "y", "z"]),
            },
            ideals: vec![
                IdealSpec {
                    label: "m1".into(),
                    generators: strings(&["x", "y", "z"]),
                },
                IdealSpec {
                    label: "p1".into(),
                    generators: strings(&["x"]),
                },
                IdealSpec {
                    label: "m2".into(),
                    generators: strings(&["x - 1", "y", "z"]),
                },
            ],
            module: ModuleSpec {
                name: "P".into(),
                rank: 3,
                relations: Vec::new(),
            },
            quotient: QuotientSpec {
                name: "M".into(),
                ideal: strings(&["x*y", "y*z"]),
            },
        }
    }

    /// Parses a YAML fixture.
    pub fn from_yaml_str(text: &str) -> Result<Self, AlgebraError> {
        serde_yaml::from_str(text).map_err(|err| fixture_error("fixture-yaml", err.to_string()))
    }

    /// Reads a YAML fixture from disk.
    pub fn load(path: &Path) -> Result<Self, AlgebraError> {
        let text = fs::read_to_string(path).map_err(|err| {
            AlgebraError::Parse(
                ErrorInfo::new("fixture-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    /// Builds the ring, the module and the quotient described by the file.
    pub fn build(&self) -> Result<Fixture, AlgebraError> {
        let poly = PolyRing::new(self.ring.name.clone(), self.ring.variables.iter().cloned())?;
        let mut ring = NoetherianRing::new(Arc::clone(&poly));
        for spec in &self.ideals {
            let generators: Vec<&str> = spec.generators.iter().map(String::as_str).collect();
            ring.register_ideal(spec.label.clone(), Ideal::parse(&poly, &generators)?)?;
        }

        let relations = self
            .module
            .relations
            .iter()
            .map(|row| {
                row.iter()
                    .map(|entry| poly.parse(entry))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let generators = (1..=self.module.rank).map(|idx| format!("e{idx}")).collect();
        let module = Module::new(&poly, self.module.name.clone(), generators, relations)?;

        let quotient_gens: Vec<&str> = self.quotient.ideal.iter().map(String::as_str).collect();
        let quotient = QuotientModule::new(
            self.quotient.name.clone(),
            Ideal::parse(&poly, &quotient_gens)?,
        );
        debug!(
            ring = %poly.describe(),
            ideals = ring.ideals().len(),
            module = %module.describe(),
            "fixture built"
        );
        Ok(Fixture {
            ring,
            module,
            quotient,
        })
    }
}

/// Objects the theorem checks run on.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub ring: NoetherianRing,
    pub module: Module,
    pub quotient: QuotientModule,
}
