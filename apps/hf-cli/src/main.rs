use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use hf_air::{AirError, MoistAir};
use hf_case::{CaseError, FlowCase, LATEST_VERSION};
use hf_core::units::{celsius, pa};
use hf_flow::{FlowError, FlowKind, NamedFlow, share};

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "HumidFlow CLI - synchronized humid air flow quantities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and structure
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Print the flow report for every flow in a case
    Report {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Convert a single flow value to all four representations
    Convert(ConvertArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Locked flow value in kg/s or m3/s
    #[arg(long)]
    value: f64,
    /// Locked quantity: moist_mass, moist_volume, dry_mass or dry_volume
    #[arg(long)]
    kind: FlowKind,
    /// Dry-bulb temperature in °C
    #[arg(long, default_value_t = 20.0)]
    temperature_c: f64,
    /// Relative humidity in %
    #[arg(long, conflicts_with = "x")]
    rh: Option<f64>,
    /// Humidity ratio in kg/kg
    #[arg(long)]
    x: Option<f64>,
    /// Absolute pressure in Pa
    #[arg(long, default_value_t = 101_325.0)]
    pressure_pa: f64,
    /// Flow name used in the report
    #[arg(long, default_value = "flow")]
    name: String,
    /// Write the flow as a case file
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Case(#[from] CaseError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Air(#[from] AirError),
}

type CliResult<T> = Result<T, CliError>;

/// Relative humidity used when neither --rh nor --x is given.
const DEFAULT_RH_PCT: f64 = 50.0;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Report { case_path } => cmd_report(&case_path),
        Commands::Convert(args) => cmd_convert(args),
    }
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = hf_case::load_yaml(case_path)?;
    println!(
        "✓ Case is valid ({} flows, {} shared airs)",
        case.flows.len(),
        case.airs.len()
    );
    Ok(())
}

fn cmd_report(case_path: &Path) -> CliResult<()> {
    let case = hf_case::load_yaml(case_path)?;
    let flows = hf_case::instantiate_all(&case)?;

    if flows.is_empty() {
        println!("No flows found in case");
        return Ok(());
    }
    if !case.name.is_empty() {
        println!("Case: {}\n", case.name);
    }
    for flow in &flows {
        println!("{flow}");
    }
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> CliResult<()> {
    let t = celsius(args.temperature_c);
    let p = pa(args.pressure_pa);
    let air = match args.x {
        Some(x) => MoistAir::from_humidity_ratio(t, x, p)?,
        None => MoistAir::new(t, args.rh.unwrap_or(DEFAULT_RH_PCT), p)?,
    };
    tracing::debug!(?air, "air state");

    let flow = NamedFlow::new(args.name, args.value, args.kind, share(air))?;
    print!("{flow}");

    if let Some(path) = args.save {
        let case = FlowCase {
            version: LATEST_VERSION,
            name: String::new(),
            airs: Vec::new(),
            flows: vec![hf_case::capture(&flow)?],
        };
        hf_case::save_yaml(&path, &case)?;
        println!("✓ Saved case: {}", path.display());
    }
    Ok(())
}
