//! `leapfrog` command-line tool: run the distributed transport solver and
//! print the run report.

use std::num::NonZeroUsize;
use std::thread;

use clap::Parser;
use leapfrog::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Distributed leapfrog solver for du/dt + a du/dx = f(t, x)
#[derive(Parser, Debug)]
#[command(name = "leapfrog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Distributed leapfrog solver for the 1-D transport equation", long_about = None)]
struct Cli {
    /// Spatial cells M
    #[arg(default_value_t = 1000)]
    cells: usize,

    /// Time steps K
    #[arg(default_value_t = 1000)]
    steps: usize,

    /// Worker count (default: available parallelism)
    #[arg(short = 'p', long)]
    workers: Option<usize>,

    /// Transport speed a
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    speed: f64,

    /// Domain length X
    #[arg(long, default_value_t = 1.0)]
    length: f64,

    /// Simulated time T
    #[arg(long, default_value_t = 1.0)]
    duration: f64,

    /// Also run the serial reference and report the maximum deviation
    #[arg(long)]
    verify: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SolverConfig {
        cells: cli.cells,
        steps: cli.steps,
        speed: cli.speed,
        length: cli.length,
        duration: cli.duration,
    };
    let workers = cli.workers.unwrap_or_else(|| {
        thread::available_parallelism().map_or(1, NonZeroUsize::get)
    });

    let solution = solve_parallel(&config, &SineTransport, workers, GroupConfig::default())?;
    println!("{}", solution.report);

    if cli.verify {
        let oracle = solve_serial(&config, &SineTransport)?;
        let deviation = max_deviation(&solution.values, &oracle);
        println!("  max deviation from serial: {deviation:e}");
    }
    Ok(())
}
