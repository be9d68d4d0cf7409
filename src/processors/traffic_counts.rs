//! Traffic volume counts (MAKA autoliikennemäärät).
//!
//! Each count point carries its daily `volume`. Points are bucketed into
//! `volume_class` 1..=5 so downstream consumers do not need the raw numbers.

use std::sync::Arc;

use tracing::{info, warn};

use super::{Dataset, GisProcessor, ProcessorKind};
use crate::config::Config;
use crate::error::Result;
use crate::features::FeatureCollection;

const DATASET: Dataset = Dataset {
    item: "maka_autoliikennemaarat",
    source_file: "autoliikennemaarat.geojson",
    table: "maka_autoliikennemaarat",
};

/// Lower bounds (vehicles per day) of classes 2..=5
const VOLUME_CLASS_BOUNDS: [f64; 4] = [5_000.0, 10_000.0, 15_000.0, 20_000.0];

pub fn volume_class(volume: f64) -> u8 {
    let above = VOLUME_CLASS_BOUNDS.iter().filter(|b| volume >= **b).count();
    // at most four bounds, fits in u8
    1 + above as u8
}

#[derive(Debug)]
pub struct MakaAutoliikennemaarat {
    config: Arc<Config>,
    result: Option<FeatureCollection>,
}

impl MakaAutoliikennemaarat {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            result: None,
        }
    }
}

impl GisProcessor for MakaAutoliikennemaarat {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::TrafficCounts
    }

    fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn process(&mut self) -> Result<()> {
        let source = DATASET.load_source(&self.config)?;
        let total = source.len();

        let counts: FeatureCollection = source
            .features
            .into_iter()
            .filter_map(|mut f| {
                let volume = f.property_f64("volume").filter(|v| *v >= 0.0)?;
                f.set_property("volume_class", volume_class(volume));
                Some(f)
            })
            .collect();

        if counts.len() < total {
            warn!("Dropped {} count points without a volume", total - counts.len());
        }
        info!("Classified {} traffic count points", counts.len());
        self.result = Some(counts);
        Ok(())
    }

    fn persist_to_database(&self) -> Result<()> {
        DATASET.persist(&self.config, self.result.as_ref())
    }

    fn save_to_file(&self) -> Result<()> {
        DATASET.save(&self.config, self.result.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::test_support::{config_in, write_source};
    use serde_json::json;

    #[test]
    fn test_volume_class_bounds() {
        assert_eq!(volume_class(0.0), 1);
        assert_eq!(volume_class(4_999.0), 1);
        assert_eq!(volume_class(5_000.0), 2);
        assert_eq!(volume_class(14_999.9), 3);
        assert_eq!(volume_class(19_999.0), 4);
        assert_eq!(volume_class(20_000.0), 5);
        assert_eq!(volume_class(250_000.0), 5);
    }

    #[test]
    fn test_drops_points_without_volume() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        write_source(
            &cfg,
            DATASET.source_file,
            json!({"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [24.9, 60.2]},
                 "properties": {"volume": 12000}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [24.8, 60.2]},
                 "properties": {"volume": null}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [24.7, 60.2]},
                 "properties": {"volume": -1}}
            ]}),
        );

        let mut processor = MakaAutoliikennemaarat::new(cfg);
        processor.process().unwrap();

        let result = processor.result.as_ref().unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.features[0].properties["volume_class"], json!(3));
    }
}
