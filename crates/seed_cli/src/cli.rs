use std::io::Write;

use anyhow::Context;
use clap::Parser;
use seed_core::{SeedInputs, SeedReport};

#[derive(Parser, Debug)]
#[command(
    name = "generate_seed",
    version,
    about = "Derive a deterministic 12-character seed from remote, epoch and start",
    long_about = "Joins <REMOTE>|<EPOCH>|<START>, hashes the UTF-8 bytes with SHA-256\n\
                  and prints the first 12 lowercase hex characters of the digest."
)]
pub struct Cli {
    // Inputs are arbitrary strings, including ones that start with `-`.
    /// Remote identifier
    #[arg(allow_hyphen_values = true)]
    pub remote: String,
    /// Epoch value
    #[arg(allow_hyphen_values = true)]
    pub epoch: String,
    /// Start marker
    #[arg(allow_hyphen_values = true)]
    pub start: String,
    /// Also print the scoring coefficients derived from the seed
    #[arg(long)]
    pub coefficients: bool,
    /// Print a single JSON object instead of plain lines
    #[arg(long)]
    pub json: bool,
    /// Tracing filter for diagnostics on stderr
    #[arg(long, env = "GENERATE_SEED_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn inputs(&self) -> SeedInputs {
        SeedInputs::new(
            self.remote.as_str(),
            self.epoch.as_str(),
            self.start.as_str(),
        )
    }
}

pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let inputs = cli.inputs();

    if cli.json {
        let report = SeedReport::from_inputs(inputs);
        let json = report
            .to_json()
            .context("failed to serialize seed report")?;
        writeln!(out, "{json}").context("failed to write seed report")?;
    } else {
        let seed = inputs.seed();
        writeln!(out, "{seed}").context("failed to write seed")?;
        if cli.coefficients {
            writeln!(out, "{}", seed.coefficients()).context("failed to write coefficients")?;
        }
    }

    out.flush().context("failed to flush output")
}
