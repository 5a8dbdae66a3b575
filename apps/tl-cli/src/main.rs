mod error;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use report::LineReport;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tl-cli")]
#[command(about = "TowerLine CLI - overhead transmission line constants from tower geometry", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate design file syntax and structure
    Validate {
        /// Path to the design file (YAML, or JSON by extension)
        design_path: PathBuf,
    },
    /// Compute per-km and segment parameters for design lines
    Compute {
        /// Path to the design file (YAML, or JSON by extension)
        design_path: PathBuf,
        /// Only this line
        #[arg(short, long)]
        line: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the built-in conductor materials
    Materials,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { design_path } => cmd_validate(&design_path),
        Commands::Compute {
            design_path,
            line,
            format,
        } => cmd_compute(&design_path, line.as_deref(), format),
        Commands::Materials => {
            cmd_materials();
            Ok(())
        }
    }
}

fn load(design_path: &Path) -> CliResult<tl_project::Design> {
    tl_project::load_design(design_path).map_err(|source| CliError::Load {
        path: design_path.to_path_buf(),
        source,
    })
}

fn cmd_validate(design_path: &Path) -> CliResult<()> {
    println!("Validating design: {}", design_path.display());
    let design = load(design_path)?;
    println!(
        "✓ Design '{}' is valid ({} conductors, {} lines)",
        design.name,
        design.conductors.len(),
        design.lines.len()
    );
    Ok(())
}

fn cmd_compute(design_path: &Path, line: Option<&str>, format: Format) -> CliResult<()> {
    let design = load(design_path)?;
    info!(design = %design.name, "computing line constants");

    let models = match line {
        Some(id) => vec![tl_project::build_line(&design, id)?],
        None => tl_project::build_all(&design)?,
    };
    let reports: Vec<LineReport> = models.iter().map(LineReport::from).collect();

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        Format::Text => {
            if reports.is_empty() {
                println!("No lines found in design");
            }
            for report in &reports {
                report.print_text();
            }
        }
    }
    Ok(())
}

fn cmd_materials() {
    println!("Materials:");
    for entry in tl_geometry::materials::catalog() {
        println!(
            "  {} ({}) - mu_r = {}, rho = {:.3e} ohm*m, aliases: {}",
            entry.canonical_id,
            entry.display_name,
            entry.relative_permeability,
            entry.resistivity,
            entry.aliases.join(", ")
        );
    }
}
