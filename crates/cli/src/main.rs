//! Branch predictor trace replay CLI.
//!
//! This binary feeds a branch trace through one configured predictor. It performs:
//! 1. **Configuration:** Builds a predictor from flags or a JSON config file.
//! 2. **Replay:** Reads `<pc> <outcome>` records from a file or stdin, predicting then training each.
//! 3. **Reporting:** Prints the branch count, mispredictions and misprediction rate.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bpsim_core::trace::TraceReader;
use bpsim_core::{BranchPredictor, Predictor, PredictorConfig, PredictorKind, sim};

#[derive(Parser, Debug)]
#[command(
    name = "bpsim",
    author,
    version,
    about = "Trace-driven branch predictor simulator",
    long_about = "Replay a branch trace through a gshare, tournament, perceptron or static predictor.\n\nEach trace line is '<hex pc> <0|1>'. The trace is read from TRACE or from stdin.\n\nExamples:\n  bzcat fp_1.bz2 | bpsim -p gshare --ghistory-bits 13\n  bpsim -p tournament --ghistory-bits 9 --lhistory-bits 10 --pc-index-bits 10 int_1.trace\n  bpsim -c perceptron.json mm_1.trace"
)]
struct Cli {
    /// Trace file to replay (stdin when omitted).
    trace: Option<PathBuf>,

    /// Predictor to simulate.
    #[arg(short, long, value_enum, default_value_t = Kind::Static)]
    predictor: Kind,

    /// Global history width in bits.
    #[arg(long, default_value_t = PredictorConfig::default().ghistory_bits)]
    ghistory_bits: u32,

    /// Local history width in bits (tournament).
    #[arg(long, default_value_t = PredictorConfig::default().lhistory_bits)]
    lhistory_bits: u32,

    /// PC bits used to select a local history or weight vector.
    #[arg(long, default_value_t = PredictorConfig::default().pc_index_bits)]
    pc_index_bits: u32,

    /// Perceptron weight width in bits.
    #[arg(long, default_value_t = 8)]
    weight_bits: u32,

    /// JSON predictor configuration; replaces the predictor and width flags.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log configuration details to stderr (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Static,
    Gshare,
    Tournament,
    #[value(alias = "custom")]
    Perceptron,
}

impl From<Kind> for PredictorKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Static => Self::Static,
            Kind::Gshare => Self::Gshare,
            Kind::Tournament => Self::Tournament,
            Kind::Perceptron => Self::Perceptron,
        }
    }
}

impl Cli {
    /// Resolves the predictor configuration from the config file or the flags.
    fn predictor_config(&self) -> Result<PredictorConfig, bpsim_core::ConfigError> {
        if let Some(path) = &self.config {
            return PredictorConfig::from_file(path);
        }
        let kind = PredictorKind::from(self.predictor);
        Ok(PredictorConfig {
            predictor: kind,
            ghistory_bits: self.ghistory_bits,
            lhistory_bits: self.lhistory_bits,
            pc_index_bits: self.pc_index_bits,
            weight_bits: (kind == PredictorKind::Perceptron).then_some(self.weight_bits),
        })
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("[!] {e}");
        process::exit(1);
    }
}

/// Installs a stderr subscriber; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Configures the predictor, replays the trace and prints the report.
fn run(cli: &Cli) -> bpsim_core::common::error::Result<()> {
    let config = cli.predictor_config()?;
    let mut predictor = Predictor::configure(&config)?;

    let stats = match &cli.trace {
        Some(path) => {
            info!(trace = %path.display(), "replaying trace file");
            sim::replay(&mut predictor, TraceReader::from_path(path)?)?
        }
        None => {
            info!("replaying trace from stdin");
            sim::replay(&mut predictor, TraceReader::new(io::stdin().lock()))?
        }
    };

    println!("{}", predictor.name());
    stats.print();
    Ok(())
}
