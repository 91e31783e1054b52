use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use u_cpusched::analysis::{Comparison, SweepConfig};
use u_cpusched::input::load_jobs;
use u_cpusched::models::JobLedger;
use u_cpusched::report::{render_json, render_text};
use u_cpusched::validation::{validate_ledger, validate_sweep};
use u_cpusched::workload::WorkloadGenerator;
use u_cpusched::{Result, SimError};

#[derive(Parser, Debug)]
#[command(name = "u-cpusched")]
#[command(version)]
#[command(about = "Simulate FCFS, SJF and Round-Robin CPU scheduling")]
struct Args {
    /// Job file: whitespace-separated "arrival burst" pairs (seconds)
    #[arg(default_value = "process_data.txt")]
    input: PathBuf,

    /// Round-Robin quanta to sweep, in ms (comma-separated)
    #[arg(long, short = 'q', value_delimiter = ',')]
    quantum: Option<Vec<u32>>,

    /// Context-switch overheads to sweep, in ms (comma-separated)
    #[arg(long, short = 'c', value_delimiter = ',')]
    overhead: Option<Vec<u32>>,

    /// Run sweep cells on worker threads
    #[arg(long)]
    parallel: bool,

    /// Generate N synthetic jobs instead of reading the input file
    #[arg(long, value_name = "N")]
    synthetic: Option<usize>,

    /// Seed for --synthetic
    #[arg(long, requires = "synthetic")]
    seed: Option<u64>,

    /// Output format
    #[arg(long, short = 'o', default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Args {
    fn sweep_config(&self) -> SweepConfig {
        let mut config = SweepConfig::default().with_parallel(self.parallel);
        if let Some(q) = &self.quantum {
            config = config.with_quantums(q.clone());
        }
        if let Some(o) = &self.overhead {
            config = config.with_overheads(o.clone());
        }
        config
    }

    fn ledger(&self) -> Result<JobLedger> {
        if let Some(count) = self.synthetic {
            return Ok(WorkloadGenerator::new(count)
                .with_seed(self.seed.unwrap_or_default())
                .generate());
        }

        Ok(load_jobs(&self.input)?.ledger)
    }
}

fn run(args: &Args) -> Result<String> {
    let config = args.sweep_config();
    validate_sweep(&config).map_err(SimError::Validation)?;

    let ledger = args.ledger()?;
    validate_ledger(&ledger).map_err(SimError::Validation)?;

    tracing::info!(
        jobs = ledger.len(),
        cells = config.cell_count(),
        "Running scheduling comparison"
    );
    let cmp = Comparison::run(&ledger, &config)?;

    match args.format {
        OutputFormat::Text => Ok(render_text(&cmp)),
        OutputFormat::Json => render_json(&cmp),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Simulation failed");
            ExitCode::FAILURE
        }
    }
}
