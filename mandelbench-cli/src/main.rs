//! `mandelbench`: time a fixed Mandelbrot escape-time walk and print its checksum.
//!
//! With no arguments it walks 1000x1000 pixels over `[-2, 1] x [-1.5, 1.5]`
//! at 512 iterations and prints exactly two lines on stdout. Logging goes to
//! stderr.

use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use mandelbench_compute::{
    run_benchmark, BenchConfig, BenchError, ExecutionMode, Precision, DEFAULT_TILE_SIZE,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Bench(#[from] BenchError),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PrecisionArg {
    F64,
    F32,
}

impl From<PrecisionArg> for Precision {
    fn from(arg: PrecisionArg) -> Self {
        match arg {
            PrecisionArg::F64 => Precision::F64,
            PrecisionArg::F32 => Precision::F32,
        }
    }
}

/// Mandelbrot escape-time micro-benchmark
#[derive(Debug, Parser)]
#[command(name = "mandelbench", version, about)]
struct Cli {
    /// Skip the cardioid and period-2 bulb membership tests
    #[arg(long)]
    no_shortcuts: bool,

    /// Split the grid into tiles and evaluate them in parallel
    #[arg(long)]
    parallel: bool,

    /// Tile edge length in pixels (parallel mode)
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, requires = "parallel")]
    tile_size: u32,

    /// Worker threads (parallel mode, defaults to one per core)
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Floating point width of the iteration loop. f32 changes the checksum.
    #[arg(long, value_enum, default_value_t = PrecisionArg::F64)]
    precision: PrecisionArg,

    /// Print the full report as JSON instead of the two summary lines
    #[arg(long)]
    json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn to_config(&self) -> BenchConfig {
        let mode = if self.parallel {
            ExecutionMode::Parallel {
                tile_size: self.tile_size,
                threads: self.threads,
            }
        } else {
            ExecutionMode::Sequential
        };

        BenchConfig::default()
            .with_shortcuts(!self.no_shortcuts)
            .with_precision(self.precision.into())
            .with_mode(mode)
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let report = run_benchmark(&cli.to_config())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level().as_str()),
    )
    .format_timestamp_micros()
    .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("mandelbench: {e}");
            ExitCode::FAILURE
        }
    }
}
