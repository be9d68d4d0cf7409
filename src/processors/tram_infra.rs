//! Tram track infrastructure.

use std::sync::Arc;

use tracing::info;

use super::{Dataset, GisProcessor, ProcessorKind};
use crate::config::Config;
use crate::error::Result;
use crate::features::FeatureCollection;

const DATASET: Dataset = Dataset {
    item: "tram_infra",
    source_file: "tram_infra.geojson",
    table: "tram_infra",
};

#[derive(Debug)]
pub struct TramInfra {
    config: Arc<Config>,
    result: Option<FeatureCollection>,
}

impl TramInfra {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            result: None,
        }
    }
}

impl GisProcessor for TramInfra {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::TramInfrastructure
    }

    fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn process(&mut self) -> Result<()> {
        let source = DATASET.load_source(&self.config)?;
        let tracks: FeatureCollection = source
            .features
            .into_iter()
            .filter(|f| f.has_linear_geometry())
            .map(|mut f| {
                f.set_property("infra_type", "tram");
                f
            })
            .collect();
        info!("Kept {} tram track segments", tracks.len());
        self.result = Some(tracks);
        Ok(())
    }

    fn persist_to_database(&self) -> Result<()> {
        DATASET.persist(&self.config, self.result.as_ref())
    }

    fn save_to_file(&self) -> Result<()> {
        DATASET.save(&self.config, self.result.as_ref())
    }
}
