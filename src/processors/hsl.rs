//! HSL bus routes.
//!
//! Source material is the HSL route shape export, one feature per route with
//! the GTFS `route_type` in its properties. Only bus routes are kept.

use std::sync::Arc;

use tracing::{info, warn};

use super::{route_type, Dataset, GisProcessor, ProcessorKind};
use crate::config::Config;
use crate::error::{GisError, Result};
use crate::features::{Feature, FeatureCollection};

pub(crate) const HSL_ROUTES_SOURCE: &str = "hsl_routes.geojson";

const DATASET: Dataset = Dataset {
    item: "hsl",
    source_file: HSL_ROUTES_SOURCE,
    table: "hsl_buses",
};

/// Routes whose GTFS `route_type` equals `code`
pub(crate) fn routes_of_type(source: FeatureCollection, code: f64) -> Vec<Feature> {
    source
        .features
        .into_iter()
        .filter(|f| f.property_f64("route_type") == Some(code))
        .collect()
}

/// Bus route processor
#[derive(Debug)]
pub struct HslBuses {
    config: Arc<Config>,
    validate_gtfs: bool,
    result: Option<FeatureCollection>,
}

impl HslBuses {
    pub fn new(config: Arc<Config>, validate_gtfs: bool) -> Self {
        Self {
            config,
            validate_gtfs,
            result: None,
        }
    }

    fn validate(routes: &[Feature]) -> Result<()> {
        for (index, route) in routes.iter().enumerate() {
            let Some(route_id) = route.property_str("route_id") else {
                return Err(GisError::validation(format!(
                    "bus route #{} has no route_id",
                    index
                )));
            };
            if !route.has_linear_geometry() {
                return Err(GisError::validation(format!(
                    "bus route {} has no line geometry",
                    route_id
                )));
            }
        }
        Ok(())
    }
}

impl GisProcessor for HslBuses {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::BusRoutes
    }

    fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn validation_enabled(&self) -> bool {
        self.validate_gtfs
    }

    fn process(&mut self) -> Result<()> {
        let source = DATASET.load_source(&self.config)?;
        let total = source.len();
        let routes = routes_of_type(source, route_type::BUS);

        if self.validate_gtfs {
            Self::validate(&routes)?;
        } else if routes.iter().any(|r| !r.has_linear_geometry()) {
            warn!("Some bus routes have no line geometry, validation is disabled");
        }

        info!("Kept {} bus routes out of {} routes", routes.len(), total);
        self.result = Some(FeatureCollection::new(routes));
        Ok(())
    }

    fn persist_to_database(&self) -> Result<()> {
        DATASET.persist(&self.config, self.result.as_ref())
    }

    fn save_to_file(&self) -> Result<()> {
        DATASET.save(&self.config, self.result.as_ref())
    }
}
