//! Planimetry command-line interface.
//!
//! Compute area and perimeter reports from TOML job files:
//! ```sh
//! planimetry-cli run job.toml
//! planimetry-cli validate job.toml
//! planimetry-cli shapes
//! planimetry-cli measure rectangle R1 3 5
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use anyhow::Context;
use planimetry_geometry::{Figure, FigureKind};

#[derive(Parser)]
#[command(name = "planimetry-cli")]
#[command(about = "Planimetry: area and perimeter of planar figures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the report for every figure in a TOML job file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a job file without printing the report.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// List the supported shapes and their measurements.
    Shapes,
    /// Report a single figure given on the command line.
    Measure {
        /// Shape type, e.g. "square" or "trapeze".
        shape: String,
        /// Display name.
        name: String,
        /// Measurements in the order listed by `shapes`.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            let job = config::load_config(&config)
                .with_context(|| format!("Cannot load {}", config.display()))?;
            log::debug!("Configuration: {}", config.display());

            let figures = runner::build_figures(&job)?;
            for figure in &figures {
                println!("{}", figure);
            }

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_report {
                runner::write_report_text(&figures, &out_dir.join("report.txt"))?;
            }

            if job.output.save_json {
                runner::write_report_json(&figures, &out_dir.join("figures.json"))?;
            }

            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)
                .with_context(|| format!("Cannot load {}", config.display()))?;
            let figures = runner::build_figures(&job)?;
            println!(
                "Configuration is valid: {} ({} figures)",
                config.display(),
                figures.len()
            );
            Ok(())
        }
        Commands::Shapes => {
            println!("Available shapes:");
            println!();
            for kind in FigureKind::ALL {
                println!(
                    "  {:<14} fields: {:<14} area: {:<10} perimeter: {}",
                    kind.as_str(),
                    kind.fields().join(", "),
                    kind.area_formula(),
                    kind.perimeter_formula()
                );
            }
            Ok(())
        }
        Commands::Measure {
            shape,
            name,
            values,
        } => {
            let kind: FigureKind = shape.parse()?;
            let figure = Figure::from_measurements(kind, name, &values)?;
            println!("{}", figure);
            Ok(())
        }
    }
}
