//! GEOMAG: magnetic field lookup from the compiled-in WMM-2020 grid.
//!
//! This program can operate in three modes:
//!
//! - point: look up declination, inclination, and strength at one position.
//! - batch: look up every `latitude,longitude` row of a CSV file and write the results to CSV.
//! - config: write a default output configuration (TOML/JSON/YAML) to edit and pass back with
//!   `--config`.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;

use geomag::GeomagneticLookup;
use geomag::batch::process_file;
use geomag::config::{AngleUnit, OutputConfig, StrengthUnit};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about = "Magnetic declination, inclination, and field strength from a gridded WMM table.")]
struct Cli {
    /// Output configuration file (TOML/JSON/YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Log file path (if not specified, logs to stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

/// Top-level commands
#[derive(Subcommand, Clone)]
enum Command {
    #[command(name = "point", about = "Look up the magnetic field at a single position")]
    Point(PointArgs),
    #[command(name = "batch", about = "Look up the magnetic field for every row of a CSV file")]
    Batch(BatchArgs),
    #[command(name = "config", about = "Write a default output configuration file")]
    Config(ConfigArgs),
}

#[derive(Args, Clone, Debug)]
struct UnitArgs {
    /// Angle unit, overrides the configuration file
    #[arg(long, value_enum)]
    angle_unit: Option<AngleUnit>,
    /// Strength unit, overrides the configuration file
    #[arg(long, value_enum)]
    strength_unit: Option<StrengthUnit>,
}

#[derive(Args, Clone, Debug)]
struct PointArgs {
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    latitude: f64,
    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    longitude: f64,
    #[command(flatten)]
    units: UnitArgs,
}

#[derive(Args, Clone, Debug)]
struct BatchArgs {
    /// Input CSV with latitude and longitude columns
    #[arg(short, long)]
    input: PathBuf,
    /// Output CSV path
    #[arg(short, long)]
    output: PathBuf,
    /// Skip rows with non-finite coordinates instead of failing
    #[arg(long)]
    skip_invalid: bool,
    #[command(flatten)]
    units: UnitArgs,
}

#[derive(Args, Clone, Debug)]
struct ConfigArgs {
    /// Where to write the configuration (extension selects the format)
    #[arg(short, long, default_value = "geomag.toml")]
    output: PathBuf,
}

/// Parse a `--log-level` value, falling back to `info` for anything unrecognised.
fn parse_level(log_level: &str) -> log::LevelFilter {
    log_level.parse().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
        log::LevelFilter::Info
    })
}

/// Set up `env_logger` at `log_level`, writing to `log_file` when given.
///
/// `RUST_LOG`, when set, refines the level per module on top of `log_level`.
fn init_logger(log_level: &str, log_file: Option<&PathBuf>) -> Result<()> {
    use std::io::Write;

    let mut builder = env_logger::Builder::new();
    builder.filter_level(parse_level(log_level));
    builder.parse_default_env();
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("installing logger")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>, units: &UnitArgs) -> Result<OutputConfig> {
    let mut config = match path {
        Some(path) => OutputConfig::from_file(path)
            .with_context(|| format!("reading configuration {}", path.display()))?,
        None => OutputConfig::default(),
    };
    if let Some(angle_unit) = units.angle_unit {
        config.angle_unit = angle_unit;
    }
    if let Some(strength_unit) = units.strength_unit {
        config.strength_unit = strength_unit;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let lookup = GeomagneticLookup::wmm2020();
    match &cli.command {
        Command::Point(args) => {
            let config = load_config(cli.config.as_ref(), &args.units)?;
            let field = lookup.lookup(args.latitude, args.longitude)?;
            println!(
                "lat {:.4} lon {:.4} | {}",
                args.latitude,
                args.longitude,
                config.format_field(&field)
            );
        }
        Command::Batch(args) => {
            let mut config = load_config(cli.config.as_ref(), &args.units)?;
            config.skip_invalid |= args.skip_invalid;
            info!("Using table {}", lookup.table().info());
            let written = process_file(&lookup, &args.input, &args.output, &config)
                .with_context(|| format!("processing {}", args.input.display()))?;
            println!("Wrote {} records to {}", written, args.output.display());
        }
        Command::Config(args) => {
            OutputConfig::default()
                .to_file(&args.output)
                .with_context(|| format!("writing configuration {}", args.output.display()))?;
            println!("Configuration written to {}", args.output.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level, cli.log_file.as_ref())?;
    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels() {
        assert_eq!(parse_level("debug"), log::LevelFilter::Debug);
        assert_eq!(parse_level("OFF"), log::LevelFilter::Off);
        assert_eq!(parse_level("loud"), log::LevelFilter::Info);
    }
    #[test]
    fn point_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "geomag", "point", "--latitude", "-33.9", "--longitude", "-70.6", "--angle-unit",
            "radians",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "info");
        match cli.command {
            Command::Point(args) => {
                assert_eq!(args.latitude, -33.9);
                assert_eq!(args.longitude, -70.6);
                assert_eq!(args.units.angle_unit, Some(AngleUnit::Radians));
                assert_eq!(args.units.strength_unit, None);
            }
            _ => panic!("expected the point command"),
        }
    }
    #[test]
    fn units_override_configuration() {
        let units = UnitArgs {
            angle_unit: None,
            strength_unit: Some(StrengthUnit::Gauss),
        };
        let config = load_config(None, &units).unwrap();
        assert_eq!(config.angle_unit, AngleUnit::Degrees);
        assert_eq!(config.strength_unit, StrengthUnit::Gauss);
    }
}
