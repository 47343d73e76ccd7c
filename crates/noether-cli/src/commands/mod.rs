use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use noether_thy::serde::to_canonical_json_bytes;
use noether_thy::{
    check_associated_primes, check_local_freeness, AssociatedPrimesReport, CheckPolicy,
    LocalFreenessReport,
};
use serde::Serialize;

use crate::fixtures::{Fixture, FixtureFile};
use crate::render;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// YAML fixture describing the ring, its ideals, the module and the quotient.
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,
    /// YAML check policy; missing fields take their defaults.
    #[arg(long, global = true)]
    pub policy: Option<PathBuf>,
    /// Print the canonical JSON report instead of text.
    #[arg(long, global = true)]
    pub json: bool,
}

struct Setup {
    fixture: Fixture,
    policy: CheckPolicy,
}

fn setup(args: &CheckArgs) -> Result<Setup, Box<dyn Error>> {
    let file = match &args.fixture {
        Some(path) => FixtureFile::load(path)?,
        None => FixtureFile::builtin(),
    };
    let policy = match &args.policy {
        Some(path) => CheckPolicy::load(path)?,
        None => CheckPolicy::default(),
    };
    Ok(Setup {
        fixture: file.build()?,
        policy,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let bytes = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(bytes)?);
    Ok(())
}

fn timed_local_freeness(setup: &Setup) -> Result<(LocalFreenessReport, u128), Box<dyn Error>> {
    let start = Instant::now();
    let report = check_local_freeness(&setup.fixture.ring, &setup.fixture.module, &setup.policy)?;
    Ok((report, start.elapsed().as_micros()))
}

fn timed_associated_primes(
    setup: &Setup,
) -> Result<(AssociatedPrimesReport, u128), Box<dyn Error>> {
    let start = Instant::now();
    let report = check_associated_primes(&setup.fixture.quotient, &setup.policy)?;
    Ok((report, start.elapsed().as_micros()))
}

/// Runs the local freeness check.
pub fn local_freeness(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let setup = setup(args)?;
    let (report, micros) = timed_local_freeness(&setup)?;
    if args.json {
        return print_json(&report);
    }
    let mut text = String::new();
    render::local_freeness(&mut text, &report, micros)?;
    print!("{text}");
    Ok(())
}

/// Runs the associated primes check.
pub fn associated_primes(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let setup = setup(args)?;
    let (report, micros) = timed_associated_primes(&setup)?;
    if args.json {
        return print_json(&report);
    }
    let mut text = String::new();
    render::associated_primes(&mut text, &report, micros)?;
    print!("{text}");
    Ok(())
}

#[derive(Serialize)]
struct CombinedReport<'a> {
    local_freeness: &'a LocalFreenessReport,
    associated_primes: &'a AssociatedPrimesReport,
}

/// Runs both checks on the same fixture.
pub fn all(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let setup = setup(args)?;
    let (local, local_micros) = timed_local_freeness(&setup)?;
    let (primes, primes_micros) = timed_associated_primes(&setup)?;
    if args.json {
        return print_json(&CombinedReport {
            local_freeness: &local,
            associated_primes: &primes,
        });
    }
    let mut text = String::new();
    render::local_freeness(&mut text, &local, local_micros)?;
    text.push('\n');
    render::associated_primes(&mut text, &primes, primes_micros)?;
    print!("{text}");
    Ok(())
}
