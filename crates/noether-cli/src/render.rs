use std::fmt::{self, Write};

use noether_thy::{AssociatedPrimesReport, LocalFreenessReport, TheoremResult};

fn truth(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// The three-condition summary block.
pub fn theorem_result(out: &mut impl Write, result: &TheoremResult) -> fmt::Result {
    writeln!(out, "=== Theorem Verification Results ===")?;
    writeln!(out, "Condition 1 (Projective): {}", truth(result.condition1))?;
    writeln!(out, "Condition 2 (Free at primes): {}", truth(result.condition2))?;
    writeln!(out, "Condition 3 (Free at maximals): {}", truth(result.condition3))?;
    writeln!(
        out,
        "All equivalent: {}",
        if result.equivalent { "YES" } else { "NO" }
    )
}

/// Full text rendering of a local freeness run.
pub fn local_freeness(
    out: &mut impl Write,
    report: &LocalFreenessReport,
    micros: u128,
) -> fmt::Result {
    writeln!(out, "=== Local Freeness ===")?;
    writeln!(out, "Ring: {}", report.provenance.ring)?;
    writeln!(out, "Module: {}", report.provenance.module)?;
    writeln!(
        out,
        "Rank: {} (generic rank {})",
        report.module_rank, report.generic_rank
    )?;
    if !report.diagnostics.is_empty() {
        writeln!(out, "Ideals:")?;
        for row in &report.diagnostics {
            let kind = if row.maximal {
                "maximal"
            } else if row.prime {
                "prime"
            } else {
                "-"
            };
            let local = match (row.local_rank, row.free) {
                (Some(rank), Some(free)) => {
                    format!("local rank {rank}, {}", if free { "free" } else { "not free" })
                }
                _ => "not evaluated".to_string(),
            };
            writeln!(out, "  {} = {} [{}] {}", row.label, row.ideal, kind, local)?;
        }
    }
    writeln!(out)?;
    theorem_result(out, &report.result)?;
    writeln!(out, "\nComputation time: {} microseconds", micros)?;
    if report.result.equivalent {
        writeln!(out, "Theorem verified: projective = locally free.")?;
    }
    Ok(())
}

/// Full text rendering of an associated primes run.
pub fn associated_primes(
    out: &mut impl Write,
    report: &AssociatedPrimesReport,
    micros: u128,
) -> fmt::Result {
    writeln!(out, "=== Associated Primes ===")?;
    writeln!(out, "Module: {}", report.provenance.module)?;
    writeln!(out, "Annihilator: {}", report.annihilator)?;
    let primes: Vec<String> = report
        .associated_primes
        .iter()
        .enumerate()
        .map(|(idx, prime)| format!("p{}={}", idx + 1, prime))
        .collect();
    writeln!(out, "Associated Primes: {}", primes.join(" "))?;
    if !report.embedded_primes.is_empty() {
        writeln!(out, "Embedded Primes: {}", report.embedded_primes.join(" "))?;
    }
    writeln!(out, "Intersection of Ass(M): {}", report.intersection)?;
    writeln!(out, "Radical of Ann(M): {}", report.radical)?;
    writeln!(
        out,
        "\nTheorem verification: {}",
        if report.holds { "PASS" } else { "FAIL" }
    )?;
    writeln!(out, "Computation time: {} microseconds", micros)
}
