//! Cycling infrastructure.
//!
//! The source `cycleway` attribute is collapsed into a coarse `cycle_class`:
//!
//! | `cycleway` | `cycle_class` |
//! |------------|---------------|
//! | `track`    | `main`        |
//! | `lane`     | `lane`        |
//! | other      | `other`       |

use std::sync::Arc;

use tracing::info;

use super::{Dataset, GisProcessor, ProcessorKind};
use crate::config::Config;
use crate::error::Result;
use crate::features::FeatureCollection;

const DATASET: Dataset = Dataset {
    item: "cycle_infra",
    source_file: "cycle_infra.geojson",
    table: "cycle_infra",
};

fn cycle_class(cycleway: &str) -> &'static str {
    match cycleway {
        "track" => "main",
        "lane" => "lane",
        _ => "other",
    }
}

#[derive(Debug)]
pub struct CycleInfra {
    config: Arc<Config>,
    result: Option<FeatureCollection>,
}

impl CycleInfra {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            result: None,
        }
    }
}

impl GisProcessor for CycleInfra {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::CyclingInfrastructure
    }

    fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn process(&mut self) -> Result<()> {
        let source = DATASET.load_source(&self.config)?;
        let ways: FeatureCollection = source
            .features
            .into_iter()
            .filter_map(|mut f| {
                let class = cycle_class(f.property_str("cycleway")?);
                f.set_property("cycle_class", class);
                Some(f)
            })
            .collect();
        info!("Kept {} cycleway features", ways.len());
        self.result = Some(ways);
        Ok(())
    }

    fn persist_to_database(&self) -> Result<()> {
        DATASET.persist(&self.config, self.result.as_ref())
    }

    fn save_to_file(&self) -> Result<()> {
        DATASET.save(&self.config, self.result.as_ref())
    }
}
