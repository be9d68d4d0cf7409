//! Street areas from the public area register (YLRE katualueet).

use std::sync::Arc;

use tracing::info;

use super::{Dataset, GisProcessor, ProcessorKind};
use crate::config::Config;
use crate::error::Result;
use crate::features::FeatureCollection;

const DATASET: Dataset = Dataset {
    item: "ylre_katualueet",
    source_file: "ylre_katualueet.geojson",
    table: "ylre_katualueet",
};

#[derive(Debug)]
pub struct YlreKatualueet {
    config: Arc<Config>,
    result: Option<FeatureCollection>,
}

impl YlreKatualueet {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            result: None,
        }
    }
}

impl GisProcessor for YlreKatualueet {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::StreetAreas
    }

    fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn process(&mut self) -> Result<()> {
        let source = DATASET.load_source(&self.config)?;
        let areas: FeatureCollection = source
            .features
            .into_iter()
            .filter(|f| f.has_polygonal_geometry())
            .collect();
        info!("Kept {} street areas", areas.len());
        self.result = Some(areas);
        Ok(())
    }

    fn persist_to_database(&self) -> Result<()> {
        DATASET.persist(&self.config, self.result.as_ref())
    }

    fn save_to_file(&self) -> Result<()> {
        DATASET.save(&self.config, self.result.as_ref())
    }
}
