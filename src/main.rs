use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use wordbench::corpus::Corpus;
use wordbench::driver;
use wordbench::report;
use wordbench::sizer::{DEFAULT_SEED, WorkloadSizer};

#[derive(Parser)]
#[command(
    name = "wordbench",
    version,
    about = "Word-count latency microbenchmark over a synthetic workload distribution"
)]
struct Cli {
    /// Variance control for the workload-size distribution (>= 0)
    mutability: f64,

    /// Number of timed invocations to run
    invocations: u64,

    /// Destination CSV for per-invocation timings (overwritten if present)
    output: PathBuf,

    /// Corpus text file, one record per line
    #[arg(default_value = "resource.txt")]
    corpus: PathBuf,

    /// Seed for the workload sizer's random stream
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Emit the summary as JSON instead of the console report
    #[arg(long)]
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let corpus = Corpus::load(&cli.corpus)?;
    let sizer = WorkloadSizer::new(cli.seed);

    let summary = driver::drive(
        &corpus,
        sizer,
        cli.mutability,
        cli.invocations,
        &cli.output,
    )?;

    if cli.json {
        print!("{}", report::format_json(&summary));
    } else {
        report::report(&summary);
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
