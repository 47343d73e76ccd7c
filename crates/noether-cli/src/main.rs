use std::error::Error;

use clap::{Parser, Subcommand};

use commands::CheckArgs;

mod commands;
mod fixtures;
mod logging;
mod render;

#[derive(Parser, Debug)]
#[command(
    name = "noether",
    version,
    about = "Check local freeness and associated primes over polynomial rings"
)]
struct Cli {
    #[command(flatten)]
    args: CheckArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run both theorem checks (default).
    All,
    /// Projective, free at primes and free at maximal ideals agree.
    LocalFreeness,
    /// The associated primes of R/I intersect to the radical of I.
    AssociatedPrimes,
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_tracing()?;
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::All) {
        Command::All => commands::all(&cli.args),
        Command::LocalFreeness => commands::local_freeness(&cli.args),
        Command::AssociatedPrimes => commands::associated_primes(&cli.args),
    }
}
