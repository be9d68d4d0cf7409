//! gis-material-update - main entry point
//!
//! Reads the deployment profile signal once, then hands everything else to the
//! library orchestrator.

use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use gis_material_update::cli::Cli;
use gis_material_update::orchestrator::{self, RunOrchestrator};
use gis_material_update::profile::DEPLOYMENT_PROFILE_ENV;
use gis_material_update::registry::ProcessorRegistry;
use gis_material_update::settings::SettingsFile;

/// Exit status when `--strict` is set and some items were not recognized
const EXIT_UNRECOGNIZED: u8 = 2;

/// Initialize the logger with appropriate settings
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let registry = ProcessorRegistry::with_defaults();

    if cli.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let settings = match &cli.config {
        Some(path) => SettingsFile::load_from_file(path)
            .with_context(|| format!("Failed to load settings file {:?}", path))?,
        None => SettingsFile::default(),
    };

    let signal = std::env::var(DEPLOYMENT_PROFILE_ENV).ok();
    debug!("{}={:?}", DEPLOYMENT_PROFILE_ENV, signal);
    let config = orchestrator::setup(signal.as_deref(), settings);

    let summary = RunOrchestrator::new(&registry, config)
        .run(&cli.items)
        .context("Processing aborted")?;

    if summary.has_unrecognized() {
        warn!(
            "{} item(s) not recognized: {}",
            summary.unrecognized.len(),
            summary.unrecognized.join(", ")
        );
        if cli.strict {
            error!("Strict mode: failing run because of unrecognized items");
            return Ok(ExitCode::from(EXIT_UNRECOGNIZED));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_logger();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed: {:?}", cli);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
