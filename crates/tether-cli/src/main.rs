//! `tether`: run a coverage scenario from the command line.
//!
//! ```text
//! tether scenarios/reference.toml --map --rounds
//! tether scenarios/reference.txt --budget 12 -v
//! ```

#![forbid(unsafe_code)]

mod render;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tether_engine::CoverageSession;
use tether_scenario::Scenario;

/// Energy-bounded coverage of a grid scenario.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file: `.toml`, or the three-line text format otherwise
    scenario: PathBuf,

    /// Override the scenario's energy budget
    #[arg(short, long)]
    budget: Option<u32>,

    /// Override the exploration fraction beta
    #[arg(long)]
    beta: Option<f64>,

    /// Override the decay rate delta
    #[arg(long)]
    delta: Option<f64>,

    /// Print the final coverage map
    #[arg(short, long)]
    map: bool,

    /// Print one line per round
    #[arg(short, long)]
    rounds: bool,

    /// Record and print every agent step
    #[arg(short, long)]
    trace: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match run(&args) {
        Ok(complete) => {
            if complete {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Run the scenario. `Ok(false)` when unvisited nodes remain.
fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let mut scenario = Scenario::load(&args.scenario)?;
    if let Some(budget) = args.budget {
        scenario.budget = budget;
    }
    if let Some(beta) = args.beta {
        scenario.schedule.beta = beta;
    }
    if let Some(delta) = args.delta {
        scenario.schedule.delta = delta;
    }
    info!("loaded {}", args.scenario.display());

    let mut session = CoverageSession::new(scenario.into_config(args.trace)?)?;
    let report = session.run()?;

    if args.rounds {
        print!("{}", render::render_rounds(&report));
    }
    if let Some(trace) = session.trace() {
        print!("{}", render::render_trace(trace));
    }
    if args.map {
        print!("{}", render::render_map(session.environment(), session.graph()));
    }
    print!("{}", render::render_summary(&report, session.graph()));

    Ok(report.metrics.frontier_remaining == 0)
}
