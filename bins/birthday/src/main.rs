//! birthday: exact generalized birthday-paradox probabilities.
//!
//! Admits people to a room one at a time and prints, after each admission,
//! the exact probability (shown as a decimal) that some day is shared by at
//! least `target` people.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use birthday_core::config::{SimulationConfig, StopRule};
use birthday_core::constants::{DEFAULT_ITERATIONS, DEFAULT_TARGET};
use birthday_engine::{Simulation, StepReport};
use clap::{Parser, ValueEnum};
use tracing::info;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One human-readable line per room size.
    Text,
    /// One JSON object per line.
    Json,
}

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "birthday",
    version,
    about = "Exact probability that some birthday is shared by at least `target` people"
)]
struct Args {
    /// Collision multiplicity (2 is the classical birthday problem)
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    target: u8,

    /// Number of people to admit, one per iteration
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Stop early once a collision is certain
    #[arg(long)]
    stop_when_exhausted: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Include exact fractions in the report
    #[arg(long)]
    exact: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Args {
    /// Convert CLI args into a SimulationConfig.
    fn to_config(&self) -> SimulationConfig {
        let stop_rule = if self.stop_when_exhausted {
            StopRule::Exhausted
        } else {
            StopRule::Fixed
        };
        SimulationConfig {
            target: self.target,
            iterations: self.iterations,
            stop_rule,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, &args.log_format);

    let config = args.to_config();
    let mut simulation = Simulation::new(config).context("invalid simulation parameters")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut written = Ok(());
    let summary = simulation.run_with(|report| {
        if written.is_ok() {
            written = write_report(&mut out, report, args.format, args.exact);
        }
    });
    written.context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    info!(
        people = summary.steps,
        first_even_odds = ?summary.first_even_odds,
        remaining_states = simulation.population().len(),
        "done"
    );
    Ok(())
}

fn write_report<W: Write>(
    out: &mut W,
    report: &StepReport,
    format: Format,
    exact: bool,
) -> Result<()> {
    match format {
        Format::Text => {
            write!(
                out,
                "With {} people in the room, P(target reached) = {:.8}, P(just reached) = {:.8}",
                report.people,
                report.cumulative_f64(),
                report.incremental_f64()
            )?;
            if exact {
                write!(out, " [{} ; {}]", report.cumulative, report.incremental)?;
            }
            writeln!(out)?;
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, &report.to_record(exact))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only the report stream.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .init();
    }
}
