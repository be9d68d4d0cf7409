//! Run orchestration
//!
//! A run has two phases. Setup resolves the deployment profile and builds the
//! shared [`Config`]. Processing walks the requested items in order and drives
//! each processor through `process`, `persist_to_database`, `save_to_file`.
//!
//! # Failure Modes
//!
//! - Unknown item name: logged, recorded in the [`RunSummary`], run continues.
//!   No lifecycle method is called for it.
//! - Lifecycle error: returned immediately, remaining items are not processed.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{GisError, Result};
use crate::processors::GisProcessor;
use crate::profile::resolve_deployment_profile;
use crate::registry::ProcessorRegistry;
use crate::settings::SettingsFile;

/// Build the shared configuration from the raw profile signal.
///
/// The signal is looked up by the caller so this stays free of environment access.
pub fn setup(profile_signal: Option<&str>, settings: SettingsFile) -> Arc<Config> {
    let profile = resolve_deployment_profile(profile_signal);
    Arc::new(
        Config::build()
            .with_deployment_profile(profile)
            .with_settings(settings),
    )
}

/// What happened to the items of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Items that completed all three lifecycle steps, in run order
    pub processed: Vec<String>,
    /// Items with no registered processor, in run order
    pub unrecognized: Vec<String>,
}

impl RunSummary {
    pub fn has_unrecognized(&self) -> bool {
        !self.unrecognized.is_empty()
    }
}

/// Drives processors for one run
#[derive(Debug)]
pub struct RunOrchestrator<'a> {
    registry: &'a ProcessorRegistry,
    config: Arc<Config>,
}

impl<'a> RunOrchestrator<'a> {
    pub fn new(registry: &'a ProcessorRegistry, config: Arc<Config>) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Process `items` strictly in the given order.
    pub fn run<I, S>(&self, items: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        info!("Processing data.");
        let mut summary = RunSummary::default();

        for item in items {
            let item = item.as_ref();
            info!("Processing item: {}", item);

            let processor = match self
                .registry
                .instantiate_processor(item, Arc::clone(&self.config))
            {
                Ok(processor) => processor,
                Err(e @ GisError::UnknownItem(_)) => {
                    error!("{}", e);
                    summary.unrecognized.push(item.to_string());
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Err(e) = Self::run_lifecycle(processor) {
                error!("Processing item {} failed: {}", item, e);
                return Err(e);
            }
            summary.processed.push(item.to_string());
        }

        info!(
            "Run finished: {} processed, {} unrecognized",
            summary.processed.len(),
            summary.unrecognized.len()
        );
        Ok(summary)
    }

    /// process, persist, save; the first error stops the item
    fn run_lifecycle(mut processor: Box<dyn GisProcessor>) -> Result<()> {
        debug!("Running {} processor", processor.kind());
        processor.process()?;
        processor.persist_to_database()?;
        processor.save_to_file()?;
        Ok(())
    }
}
