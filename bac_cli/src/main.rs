use bac_core::input::{parse_drink_spec, parse_hours, parse_weight, DrinkSpec};
use bac_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod display;
mod repl;

#[derive(Parser)]
#[command(name = "bac")]
#[command(about = "Blood alcohol concentration estimator (Widmark formula)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate BAC once from command-line values
    Calc {
        /// Drink consumed, as TYPE or TYPE=COUNT (repeatable)
        #[arg(long = "drink", value_parser = parse_drink_spec)]
        drinks: Vec<DrinkSpec>,

        /// Body weight in kg
        #[arg(long, value_parser = parse_weight)]
        weight: Option<f64>,

        /// Biological sex (male, female)
        #[arg(long, value_parser = parse_sex)]
        sex: Option<BiologicalSex>,

        /// Hours since drinking started
        #[arg(long, value_parser = parse_hours)]
        hours: Option<f64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: add and remove drinks, then calculate (default)
    Session,

    /// List the available drink types
    Drinks,

    /// Save default profile values to the config file
    Profile {
        /// Body weight in kg
        #[arg(long, value_parser = parse_weight)]
        weight: Option<f64>,

        /// Biological sex (male, female)
        #[arg(long, value_parser = parse_sex)]
        sex: Option<BiologicalSex>,

        /// Default hours since drinking started
        #[arg(long, value_parser = parse_hours)]
        hours: Option<f64>,
    },
}

fn parse_sex(raw: &str) -> Result<BiologicalSex> {
    raw.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Results go to stdout; keep logs quiet unless asked
    bac_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_or_default(path)?,
        None => Config::load()?,
    };
    let config_path = cli.config.unwrap_or_else(Config::default_config_path);

    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    match cli.command {
        Some(Commands::Calc {
            drinks,
            weight,
            sex,
            hours,
            json,
        }) => cmd_calc(&config, drinks, weight, sex, hours, json),
        Some(Commands::Session) | None => cmd_session(&config),
        Some(Commands::Drinks) => cmd_drinks(),
        Some(Commands::Profile { weight, sex, hours }) => {
            cmd_profile(config, &config_path, weight, sex, hours)
        }
    }
}

fn cmd_calc(
    config: &Config,
    drinks: Vec<DrinkSpec>,
    weight: Option<f64>,
    sex: Option<BiologicalSex>,
    hours: Option<f64>,
    json: bool,
) -> Result<()> {
    let mut session = Session::from_profile(&config.profile);
    if let Some(weight) = weight {
        session.set_weight_kg(weight)?;
    }
    if let Some(sex) = sex {
        session.set_sex(sex);
    }
    if let Some(hours) = hours {
        session.set_elapsed_hours(hours)?;
    }

    for spec in drinks {
        session.ledger_mut().add_by_key(&spec.key, spec.quantity)?;
    }

    let result = session.calculate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let report = serde_json::json!({
            "drinks": session.ledger().list(),
            "result": result,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        display::write_ledger(&mut out, session.ledger())?;
        display::write_result(&mut out, &result, config.display.show_sober_clock)?;
    }

    Ok(())
}

fn cmd_session(config: &Config) -> Result<()> {
    let mut session = Session::from_profile(&config.profile);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    repl::run(
        &mut session,
        stdin.lock(),
        &mut out,
        config.display.show_sober_clock,
    )
}

fn cmd_drinks() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    display::write_catalog(&mut out, get_default_catalog())?;
    Ok(())
}

fn cmd_profile(
    mut config: Config,
    config_path: &std::path::Path,
    weight: Option<f64>,
    sex: Option<BiologicalSex>,
    hours: Option<f64>,
) -> Result<()> {
    if let Some(weight) = weight {
        config.profile.weight_kg = Some(weight);
    }
    if let Some(sex) = sex {
        config.profile.sex = sex;
    }
    if let Some(hours) = hours {
        config.profile.elapsed_hours = hours;
    }

    config.save_to(config_path)?;

    println!("✓ Profile saved to {}", config_path.display());
    match config.profile.weight_kg {
        Some(weight) => println!("  Weight: {} kg", weight),
        None => println!("  Weight: (not set)"),
    }
    println!("  Sex: {}", config.profile.sex);
    println!("  Hours: {}", config.profile.elapsed_hours);

    Ok(())
}
