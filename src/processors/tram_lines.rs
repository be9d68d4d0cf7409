//! Tram lines from the HSL route material.

use std::sync::Arc;

use tracing::info;

use super::hsl::{routes_of_type, HSL_ROUTES_SOURCE};
use super::{route_type, Dataset, GisProcessor, ProcessorKind};
use crate::config::Config;
use crate::error::Result;
use crate::features::FeatureCollection;

const DATASET: Dataset = Dataset {
    item: "tram_lines",
    source_file: HSL_ROUTES_SOURCE,
    table: "tram_lines",
};

#[derive(Debug)]
pub struct TramLines {
    config: Arc<Config>,
    result: Option<FeatureCollection>,
}

impl TramLines {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            result: None,
        }
    }
}

impl GisProcessor for TramLines {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::TramLines
    }

    fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn process(&mut self) -> Result<()> {
        let source = DATASET.load_source(&self.config)?;
        let lines = routes_of_type(source, route_type::TRAM);
        info!("Kept {} tram lines", lines.len());
        self.result = Some(FeatureCollection::new(lines));
        Ok(())
    }

    fn persist_to_database(&self) -> Result<()> {
        DATASET.persist(&self.config, self.result.as_ref())
    }

    fn save_to_file(&self) -> Result<()> {
        DATASET.save(&self.config, self.result.as_ref())
    }
}
