//! Processor capability contract.
//!
//! Every data source is handled by a struct implementing [`GisProcessor`].
//! The orchestrator drives each processor through the same lifecycle:
//!
//! 1. `process()` reads the downloaded source material and transforms it.
//! 2. `persist_to_database()` replaces the item's table in the feature store.
//! 3. `save_to_file()` writes the result as GeoJSON into the output directory.
//!
//! # Invariants
//!
//! - Processors never mutate the shared [`Config`].
//! - Steps 2 and 3 read the state produced by step 1. Calling them first
//!   returns [`GisError::NotProcessed`] and writes nothing.

pub mod cycle_infra;
pub mod hsl;
pub mod street_areas;
pub mod street_segments;
pub mod traffic_counts;
pub mod tram_infra;
pub mod tram_lines;

use std::path::PathBuf;
use std::sync::Arc;

use strum::Display;
use tracing::info;

use crate::config::Config;
use crate::error::{GisError, Result};
use crate::features::FeatureCollection;
use crate::store::FeatureStore;

pub use cycle_infra::CycleInfra;
pub use hsl::HslBuses;
pub use street_areas::YlreKatualueet;
pub use street_segments::YlreKatuosat;
pub use traffic_counts::MakaAutoliikennemaarat;
pub use tram_infra::TramInfra;
pub use tram_lines::TramLines;

/// Processor variant, one per supported data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ProcessorKind {
    BusRoutes,
    TrafficCounts,
    StreetAreas,
    StreetSegments,
    TramInfrastructure,
    TramLines,
    CyclingInfrastructure,
}

/// Three-step lifecycle shared by all data sources.
///
/// # Contract
///
/// - `process()`: fetch and transform; source errors propagate to the caller.
/// - `persist_to_database()`: write the processed result to the feature store.
/// - `save_to_file()`: write the processed result to a GeoJSON file.
pub trait GisProcessor {
    fn kind(&self) -> ProcessorKind;

    /// Configuration this processor was constructed with
    fn config(&self) -> &Arc<Config>;

    /// Whether extra input validation is switched on
    fn validation_enabled(&self) -> bool {
        false
    }

    fn process(&mut self) -> Result<()>;

    fn persist_to_database(&self) -> Result<()>;

    fn save_to_file(&self) -> Result<()>;
}

/// Where an item's data comes from and where it goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dataset {
    /// Item name as given on the command line
    pub item: &'static str,
    /// File name under the download directory
    pub source_file: &'static str,
    /// Table name in the feature store
    pub table: &'static str,
}

impl Dataset {
    pub fn source_path(&self, cfg: &Config) -> PathBuf {
        cfg.download_dir().join(self.source_file)
    }

    pub fn output_path(&self, cfg: &Config) -> PathBuf {
        cfg.output_dir().join(format!("{}.geojson", self.item))
    }

    /// Read the downloaded source collection
    pub fn load_source(&self, cfg: &Config) -> Result<FeatureCollection> {
        let path = self.source_path(cfg);
        if !path.is_file() {
            return Err(GisError::MissingSource(path));
        }
        info!("Reading {} source material from {:?}", self.item, path);
        FeatureCollection::load_from_file(&path)
    }

    /// Replace the item's table with the processed result
    pub fn persist(&self, cfg: &Config, result: Option<&FeatureCollection>) -> Result<()> {
        let features = self.processed(result)?;
        let store = FeatureStore::open(cfg.database_dir())?;
        let rows = store.replace_table(self.table, features)?;
        info!("Persisted {} rows of {} to table {}", rows, self.item, self.table);
        Ok(())
    }

    /// Write the processed result as GeoJSON
    pub fn save(&self, cfg: &Config, result: Option<&FeatureCollection>) -> Result<()> {
        let features = self.processed(result)?;
        let path = self.output_path(cfg);
        features.save_to_file(&path)?;
        info!("Saved {} features of {} to {:?}", features.len(), self.item, path);
        Ok(())
    }

    fn processed<'a>(
        &self,
        result: Option<&'a FeatureCollection>,
    ) -> Result<&'a FeatureCollection> {
        result.ok_or_else(|| GisError::NotProcessed(self.item.to_string()))
    }
}

/// GTFS route type codes used by the HSL route material
pub(crate) mod route_type {
    pub const TRAM: f64 = 0.0;
    pub const BUS: f64 = 3.0;
}


#[cfg(test)]
mod tests {
    use super::test_support::config_in;
    use super::*;
    use crate::features::Feature;
    use serde_json::Map;

    const DATASET: Dataset = Dataset {
        item: "sample",
        source_file: "sample.geojson",
        table: "sample",
    };

    #[test]
    fn test_missing_source_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());

        match DATASET.load_source(&cfg) {
            Err(GisError::MissingSource(path)) => assert!(path.ends_with("sample.geojson")),
            other => panic!("Expected MissingSource, got {:?}", other),
        }
    }

    #[test]
    fn test_persist_and_save_require_result() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());

        assert!(matches!(DATASET.persist(&cfg, None), Err(GisError::NotProcessed(_))));
        assert!(matches!(DATASET.save(&cfg, None), Err(GisError::NotProcessed(_))));
        assert!(!cfg.output_dir().exists());
        assert!(!cfg.database_dir().exists());
    }

    #[test]
    fn test_persist_and_save_write_result() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        let result: FeatureCollection =
            vec![Feature::new(None, Map::new())].into_iter().collect();

        DATASET.persist(&cfg, Some(&result)).unwrap();
        DATASET.save(&cfg, Some(&result)).unwrap();

        assert!(cfg.database_dir().join("sample.json").is_file());
        assert!(cfg.output_dir().join("sample.geojson").is_file());
    }
}
