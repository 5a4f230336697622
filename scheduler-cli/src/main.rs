//! scheduler-cli: command-line wrapper around `scheduler-core`.
//!
//! Reads a descriptor (file or stdin), solves it, and writes the same
//! descriptor back out with every talk annotated with its chosen slot,
//! time, venue, and attendance.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scheduler_core::domain::Descriptor;
use scheduler_core::{Session, SolverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scheduler-cli")]
#[command(about = "Solve a conference schedule descriptor", long_about = None)]
struct Cli {
    /// Input descriptor JSON. Reads stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output path. Writes stdout when omitted.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Solver wall-clock budget in seconds (0 = unlimited).
    #[arg(long, default_value_t = 0.0)]
    time_limit: f64,

    /// Worker thread hint passed to the solver (0 = solver default).
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Determinism seed passed through to the solver where supported.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Pretty-print the JSON output (sorted keys, 4-space indent).
    #[arg(long, default_value_t = true)]
    pretty: bool,
}

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging already initialized: {err}");
    }

    let cli = Cli::parse();

    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading descriptor from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading descriptor from stdin")?;
            buf
        }
    };

    let descriptor: Descriptor =
        serde_json::from_str(&raw).context("parsing descriptor JSON")?;

    let config = SolverConfig {
        time_limit_seconds: cli.time_limit,
        threads: cli.threads,
        seed: cli.seed,
        mip_gap: 0.0,
    };

    let mut talks = descriptor.talks.clone();
    let mut session = Session::new(&descriptor).context("loading descriptor")?;
    session
        .schedule(&mut talks, &config)
        .context("solving schedule")?;

    let mut out_descriptor = descriptor;
    out_descriptor.talks = talks;

    let rendered = if cli.pretty {
        render_pretty(&out_descriptor)?
    } else {
        serde_json::to_string(&out_descriptor).context("serializing output")?
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?,
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
            println!();
        }
    }

    Ok(())
}

/// Sorted-keys, 4-space-indent JSON, matching SPEC_FULL.md §6's output
/// contract. `serde_json`'s `Value` sorts map keys on serialize by default
/// once the `preserve_order` feature is off, which is the case here.
fn render_pretty(descriptor: &Descriptor) -> Result<String> {
    let value = serde_json::to_value(descriptor).context("converting output to JSON value")?;
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(&value, &mut serializer).context("rendering pretty JSON")?;
    Ok(String::from_utf8(buf).expect("serde_json always emits valid UTF-8"))
}
