use crate::infra::{build_probe, build_registry};
use crate::server;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use employment_history::config::AppConfig;
use employment_history::error::AppError;
use employment_history::lookup::EmploymentHistoryService;
use employment_history::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "employment-history",
    about = "Look up a person's employment history across the employment and income registries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run one lookup and print the records as JSON
    Lookup(LookupArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// National identity number of the person
    #[arg(long)]
    pub(crate) person: String,
    /// First day of the period (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) from: NaiveDate,
    /// Last day of the period (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) to: NaiveDate,
    /// Registry fixture to read instead of APP_REGISTRY_FIXTURE
    #[arg(long)]
    pub(crate) fixture: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Lookup(args) => run_lookup(args),
    }
}

fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = args.fixture {
        config.registry.fixture_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let registry = build_registry(&config.registry)?;
    let service =
        EmploymentHistoryService::new(registry.clone(), registry, build_probe(&config.probe));

    let records = service.find_employment_history(&args.person, args.from, args.to)?;
    let rendered = serde_json::to_string_pretty(&records)
        .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))?;
    println!("{rendered}");

    Ok(())
}
