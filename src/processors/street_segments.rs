//! Street segments from the public area register (YLRE katuosat).
//!
//! The register's `ylre_class` is exposed as `street_class`; segments
//! without a class are not usable downstream and are dropped.

use std::sync::Arc;

use tracing::info;

use super::{Dataset, GisProcessor, ProcessorKind};
use crate::config::Config;
use crate::error::Result;
use crate::features::FeatureCollection;

const DATASET: Dataset = Dataset {
    item: "ylre_katuosat",
    source_file: "ylre_katuosat.geojson",
    table: "ylre_katuosat",
};

#[derive(Debug)]
pub struct YlreKatuosat {
    config: Arc<Config>,
    result: Option<FeatureCollection>,
}

impl YlreKatuosat {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            result: None,
        }
    }
}

impl GisProcessor for YlreKatuosat {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::StreetSegments
    }

    fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn process(&mut self) -> Result<()> {
        let source = DATASET.load_source(&self.config)?;
        let segments: FeatureCollection = source
            .features
            .into_iter()
            .filter_map(|mut f| {
                let class = f.property_str("ylre_class")?.to_string();
                f.properties.remove("ylre_class");
                f.set_property("street_class", class);
                Some(f)
            })
            .collect();
        info!("Kept {} classified street segments", segments.len());
        self.result = Some(segments);
        Ok(())
    }

    fn persist_to_database(&self) -> Result<()> {
        DATASET.persist(&self.config, self.result.as_ref())
    }

    fn save_to_file(&self) -> Result<()> {
        DATASET.save(&self.config, self.result.as_ref())
    }
}
