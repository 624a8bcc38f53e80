//! fuel-dispatch - staged vehicle-to-destination assignment for fuel distribution.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use fuel_dispatch::config::{PlannerConfig, SolverKind};
use fuel_dispatch::generator::{random_scenario, ScenarioParams};
use fuel_dispatch::models::Scenario;
use fuel_dispatch::report;
use fuel_dispatch::staging::StagedPlanner;
use fuel_dispatch::Result;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "fuel-dispatch")]
#[command(version)]
#[command(about = "Staged vehicle-to-destination assignment for fuel distribution")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan stages until every destination is covered
    Run {
        /// Scenario file (.json or .toml)
        scenario: PathBuf,

        /// Planner config file (.json or .toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Solver backend. Uses config value if not specified.
        #[arg(long)]
        solver: Option<SolverKind>,

        /// Stage limit. Uses config value if not specified.
        #[arg(long)]
        max_stages: Option<usize>,

        /// Append the delivery ledger to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the assignment matrices to this PNG file
        #[arg(long)]
        png: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print a random fictitious scenario as JSON
    Generate {
        /// Fleet size
        #[arg(long, default_value_t = 3)]
        vehicles: usize,

        /// Number of destinations
        #[arg(long, default_value_t = 5)]
        destinations: usize,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            scenario,
            config,
            solver,
            max_stages,
            csv,
            png,
            format,
        } => {
            let mut planner_config = match config {
                Some(path) => PlannerConfig::load(path)?,
                None => PlannerConfig::default(),
            };
            if let Some(solver) = solver {
                planner_config = planner_config.with_solver(solver);
            }
            if let Some(max_stages) = max_stages {
                planner_config = planner_config.with_max_stages(max_stages);
            }

            let scenario = Scenario::load(&scenario)?;
            info!(
                vehicles = scenario.vehicles().len(),
                destinations = scenario.destinations().len(),
                solver = %planner_config.solver,
                "scenario loaded"
            );

            let planner = StagedPlanner::new(planner_config)?;
            let plan = planner.run(&scenario)?;

            match format {
                OutputFormat::Table => print!("{}", report::render_table(&plan)),
                OutputFormat::Json => println!("{}", report::to_json(&plan)?),
            }
            if let Some(path) = csv {
                report::append_ledger(&plan, &path)?;
                info!(path = %path.display(), "ledger written");
            }
            if let Some(path) = png {
                report::save_assignment_image(&plan, &path)?;
                info!(path = %path.display(), "assignment image written");
            }
            Ok(())
        }
        Commands::Generate {
            vehicles,
            destinations,
            seed,
        } => {
            let params = ScenarioParams::default().with_size(vehicles, destinations);
            let mut rng = u_numflow::random::create_rng(seed);
            let scenario = random_scenario(&params, &mut rng)?;
            println!("{}", scenario.to_json()?);
            Ok(())
        }
    }
}
