use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use itertools::Itertools;
use liftcalc_rs::{
    bar::Bar,
    body_fat::body_fat,
    catalog::catalog,
    config::Config,
    ffmi::ffmi,
    one_rep_max::one_rep_max,
    output::{
        OutputFormat, body_fat_text, distribution_text, ffmi_text, one_rep_max_text, render,
        tdee_text,
    },
    plate::Plate,
    tdee::tdee,
    unit::{MeasurementSystem, Sex, WeightUnit},
    validation::{
        validate_body_fat_input, validate_ffmi_input, validate_one_rep_max_input,
        validate_plate_input, validate_tdee_input,
    },
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "liftcalc", version, about = "Strength training calculators")]
struct Cli {
    /// Config file. Defaults to <config dir>/liftcalc/config.toml.
    #[arg(long, global = true, env = "LIFTCALC_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (text, json). Uses the config value if not specified.
    #[arg(long, short = 'f', global = true)]
    format: Option<OutputFormat>,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plates to load on each side of a barbell
    Plates {
        /// Target weight, bar included
        #[arg(allow_hyphen_values = true)]
        target: String,

        /// Bar weight. Defaults to the configured or standard bar.
        #[arg(long, short, allow_hyphen_values = true)]
        bar: Option<String>,

        #[arg(long, short)]
        unit: Option<WeightUnit>,
    },

    /// Estimate a one rep max from a set
    OneRepMax {
        #[arg(allow_hyphen_values = true)]
        weight: String,

        #[arg(allow_hyphen_values = true)]
        reps: String,

        #[arg(long, short)]
        unit: Option<WeightUnit>,

        /// Report the estimates in another unit
        #[arg(long)]
        to: Option<WeightUnit>,

        /// Also print training loads from 100% to 50%
        #[arg(long)]
        table: bool,
    },

    /// Body fat percentage by the US Navy method
    BodyFat {
        #[arg(long)]
        sex: Sex,

        #[arg(long, allow_hyphen_values = true)]
        height: String,

        #[arg(long, allow_hyphen_values = true)]
        waist: String,

        #[arg(long, allow_hyphen_values = true)]
        neck: String,

        /// Required for females
        #[arg(long, allow_hyphen_values = true)]
        hip: Option<String>,

        #[arg(long, short)]
        system: Option<MeasurementSystem>,
    },

    /// Fat-free mass index
    Ffmi {
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Body fat percentage
        #[arg(long, allow_hyphen_values = true)]
        body_fat: String,

        #[arg(long, short)]
        system: Option<MeasurementSystem>,
    },

    /// Total daily energy expenditure
    Tdee {
        #[arg(long, allow_hyphen_values = true)]
        age: String,

        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        #[arg(long, allow_hyphen_values = true)]
        height: String,

        #[arg(long)]
        sex: Sex,

        /// sedentary, light, moderate, active, extreme, or a multiplier
        #[arg(long, default_value = "moderate", allow_hyphen_values = true)]
        activity: String,

        #[arg(long, short)]
        system: Option<MeasurementSystem>,
    },

    /// List the available plates and the default bar
    Catalog {
        #[arg(long, short)]
        unit: Option<WeightUnit>,
    },
}

#[derive(Serialize)]
struct CatalogView {
    unit: WeightUnit,
    bar: Bar,
    plates: &'static [Plate],
}

fn catalog_text(view: &CatalogView) -> String {
    format!(
        "Plates ({}): {}\nBar: {}",
        view.unit,
        view.plates.iter().join(", "),
        view.bar
    )
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Command, config: &Config, format: OutputFormat) -> anyhow::Result<String> {
    let output = match command {
        Command::Plates { target, bar, unit } => {
            let unit = unit.unwrap_or(config.unit);
            let bar = bar.unwrap_or_else(|| config.bar_weight(unit).to_string());
            let distribution = validate_plate_input(&target, &bar, unit)?.distribute();
            info!(%distribution, "plates");
            render(format, &distribution, distribution_text)?
        }
        Command::OneRepMax {
            weight,
            reps,
            unit,
            to,
            table,
        } => {
            let input = validate_one_rep_max_input(&weight, &reps, unit.unwrap_or(config.unit))?;
            let to = to.unwrap_or(input.unit);
            let result = one_rep_max(&input).convert(input.unit, to);
            render(format, &result, |r| one_rep_max_text(r, to, table))?
        }
        Command::BodyFat {
            sex,
            height,
            waist,
            neck,
            hip,
            system,
        } => {
            let input = validate_body_fat_input(
                &height,
                &waist,
                &neck,
                hip.as_deref(),
                sex,
                system.unwrap_or(config.system),
            )?;
            render(format, &body_fat(&input), body_fat_text)?
        }
        Command::Ffmi {
            weight,
            height,
            body_fat,
            system,
        } => {
            let input =
                validate_ffmi_input(&weight, &height, &body_fat, system.unwrap_or(config.system))?;
            render(format, &ffmi(&input), |r| ffmi_text(r, input.system))?
        }
        Command::Tdee {
            age,
            weight,
            height,
            sex,
            activity,
            system,
        } => {
            let input = validate_tdee_input(
                &age,
                &weight,
                &height,
                &activity,
                sex,
                system.unwrap_or(config.system),
            )?;
            render(format, &tdee(&input), tdee_text)?
        }
        Command::Catalog { unit } => {
            let unit = unit.unwrap_or(config.unit);
            let view = CatalogView {
                unit,
                bar: Bar::new(config.bar_weight(unit), unit),
                plates: catalog(unit),
            };
            render(format, &view, catalog_text)?
        }
    };

    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let format = cli.format.unwrap_or(config.format);

    println!("{}", run(cli.command, &config, format)?);

    Ok(())
}
