use chrono::{DateTime, Utc};
use log::{error, info};
use mg_standard_lib::app::settings::SessionSettings;
use mg_standard_lib::gate::{GateDecision, GateReport};
use mg_standard_lib::session_calculator::{Clock, FixedClock, SessionCalculator, SystemClock};
use std::error::Error;
use std::path::PathBuf;
use std::process::{exit, Command};
use structopt::StructOpt;

#[derive(Debug, StructOpt, Clone)]
#[structopt(name = "market-gate", about = "Checks the equities session before running a market alert")]
struct GateOptions {
    /// Session settings file (toml)
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Exchange time zone, overrides the settings file
    #[structopt(short = "e", long = "exchange_zone")]
    pub exchange_zone: Option<String>,

    /// Observer time zone, overrides the settings file
    #[structopt(short = "o", long = "observer_zone")]
    pub observer_zone: Option<String>,

    /// Evaluate at this RFC 3339 instant instead of the system clock
    #[structopt(short = "a", long = "at", parse(try_from_str = parse_instant))]
    pub at: Option<DateTime<Utc>>,

    /// Print the session status as json
    #[structopt(short = "j", long = "json")]
    pub json: bool,

    /// Write the effective settings to this file and exit
    #[structopt(long = "save_config", parse(from_os_str))]
    pub save_config: Option<PathBuf>,

    /// Command to run when the market is open
    #[structopt(last = true)]
    pub command: Vec<String>,
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.to_utc())
}

fn load_settings(options: &GateOptions) -> Result<SessionSettings, Box<dyn Error>> {
    let mut settings = match &options.config {
        Some(path) => {
            info!("Loading session settings from {}", path.display());
            SessionSettings::from_file(path)?
        }
        None => SessionSettings::default(),
    };
    if let Some(zone) = &options.exchange_zone {
        settings.exchange_zone = zone.clone();
    }
    if let Some(zone) = &options.observer_zone {
        settings.observer_zone = zone.clone();
    }
    Ok(settings)
}

fn run_command(command: &[String]) -> Result<i32, Box<dyn Error>> {
    let (program, args) = match command.split_first() {
        Some(split) => split,
        None => return Ok(0),
    };
    info!("Running {}", command.join(" "));
    let status = Command::new(program).args(args).status()?;
    Ok(status.code().unwrap_or(1))
}

fn run(options: GateOptions) -> Result<i32, Box<dyn Error>> {
    let settings = load_settings(&options)?;
    let config = settings.to_config()?;

    if let Some(path) = &options.save_config {
        settings.save_to_file(path)?;
        println!("Saved session settings to {}", path.display());
        return Ok(0);
    }

    let clock: Box<dyn Clock> = match options.at {
        Some(at) => Box::new(FixedClock(at)),
        None => Box::new(SystemClock),
    };

    let calculator = SessionCalculator::new(config);
    let status = calculator.current_session_info(clock.as_ref());
    let decision = GateDecision::evaluate(&status, calculator.config().observer_hours.as_ref());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&GateReport::new(&status, &decision))?);
    } else {
        println!("{}", status);
        if let GateDecision::Skip(reason) = &decision {
            println!("Skipping run: {}", reason);
        }
    }

    if !decision.should_proceed() {
        return Ok(0);
    }
    run_command(&options.command)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = GateOptions::from_args();
    match run(options) {
        Ok(code) => exit(code),
        Err(e) => {
            error!("{}", e);
            exit(2);
        }
    }
}
