//! dimensa - units-of-measure calculator
//!
//! Usage:
//!   dimensa convert 5 minute --to second        # Conversion
//!   dimensa simplify 30 meter^2 inch foot^-1    # Simplification
//!   dimensa units --definition length           # Catalog listing
//!
//! Dimensions are unit keys, optionally prefixed (`kilometer`) and raised to
//! an integer power (`second^-2`).

mod report;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use dimensa_core::{Dimension, Engine, Numeric, Quantity, Settings};
use env_logger::Env;
use log::{debug, info};
use rust_decimal::Decimal;
use serde::Serialize;

use report::{QuantityReport, UnitReport};

#[derive(Parser, Debug)]
#[command(name = "dimensa")]
#[command(about = "Convert and simplify units of measure", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Read algebra settings from a JSON file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compute with exact decimals instead of floating point
    #[arg(long, global = true)]
    decimal: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a quantity into other dimensions
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Source dimensions
        #[arg(required = true)]
        dimensions: Vec<String>,

        /// Target dimensions
        #[arg(long, required = true, num_args = 1..)]
        to: Vec<String>,
    },
    /// Simplify a quantity, merging units and finding derived dimensions
    Simplify {
        #[arg(allow_negative_numbers = true)]
        value: String,

        #[arg(required = true)]
        dimensions: Vec<String>,
    },
    /// List units in the catalog
    Units {
        /// Only units of this dimension definition
        #[arg(long)]
        definition: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Default level depends on --debug (overridden by RUST_LOG)
    let env = if args.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let engine = load_engine(args.config.as_deref())?;
    if args.decimal {
        run::<Decimal>(&engine, args.command, args.json)
    } else {
        run::<f64>(&engine, args.command, args.json)
    }
}

fn load_engine(config: Option<&Path>) -> Result<Engine> {
    let engine = Engine::standard()?;
    let Some(path) = config else {
        return Ok(engine);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    let settings = Settings::from_json(&text)?;
    info!("Loaded settings from {}", path.display());
    debug!("{settings:?}");
    Ok(engine.with_settings(settings)?)
}

fn run<T>(engine: &Engine, command: Command, json: bool) -> Result<()>
where
    T: Numeric + fmt::Display + Serialize + FromStr,
    T::Err: fmt::Display,
{
    let quantity = match command {
        Command::Convert {
            value,
            dimensions,
            to,
        } => {
            let source = parse_dimensions(engine, &dimensions)?;
            let target = parse_dimensions(engine, &to)?;
            Quantity::new(parse_value::<T>(&value)?, source).convert(engine, &target)?
        }
        Command::Simplify { value, dimensions } => {
            Quantity::new(parse_value::<T>(&value)?, parse_dimensions(engine, &dimensions)?)
                .simplify(engine)?
        }
        Command::Units { definition } => return list_units(engine, definition.as_deref(), json),
    };

    if json {
        let report = QuantityReport::new(engine, &quantity);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", quantity.display(engine));
    }
    Ok(())
}

fn parse_value<T>(input: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    input
        .trim()
        .parse()
        .map_err(|e| anyhow!("Invalid value '{input}': {e}"))
}

/// `name` or `name^power`
fn parse_dimension(engine: &Engine, token: &str) -> Result<Dimension> {
    let (name, power) = match token.split_once('^') {
        Some((name, power)) => {
            let power = power
                .parse::<i32>()
                .with_context(|| format!("Invalid power in '{token}'"))?;
            (name, power)
        }
        None => (token, 1),
    };
    Ok(engine.dimension_by_name(name, power)?)
}

fn parse_dimensions(engine: &Engine, tokens: &[String]) -> Result<Vec<Dimension>> {
    tokens.iter().map(|t| parse_dimension(engine, t)).collect()
}

fn list_units(engine: &Engine, definition: Option<&str>, json: bool) -> Result<()> {
    let catalog = engine.catalog();
    let filter = definition.map(|key| catalog.definition_id(key)).transpose()?;
    if let (Some(key), Some(id)) = (definition, filter) {
        if !engine.definitions().any(|(visible, _)| visible == id) {
            bail!("Dimension definition '{key}' is hidden; set allowVectorDimensions to list it");
        }
    }

    let mut reports = Vec::new();
    for (id, def) in engine.definitions() {
        if filter.is_some_and(|f| f != id) {
            continue;
        }
        if !json {
            println!("{} ({})", def.key, def.name);
        }
        for unit in &def.units {
            let report = UnitReport::new(engine, *unit);
            if !json {
                println!("  {:<24} {}", report.key, report.symbol);
            }
            reports.push(report);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
