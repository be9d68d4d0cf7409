//! Processor registry.
//!
//! Maps an item name to a constructor closure. Adding a data source means
//! registering one more entry; the orchestrator never branches on names.
//!
//! Instantiation only constructs. No source material is touched until the
//! orchestrator calls `process()`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::error::{GisError, Result};
use crate::processors::{
    CycleInfra, GisProcessor, HslBuses, MakaAutoliikennemaarat, TramInfra, TramLines,
    YlreKatualueet, YlreKatuosat,
};

/// Builds a processor bound to the run's configuration
pub type ProcessorConstructor = Box<dyn Fn(Arc<Config>) -> Box<dyn GisProcessor>>;

/// Name to constructor table
#[derive(Default)]
pub struct ProcessorRegistry {
    constructors: HashMap<String, ProcessorConstructor>,
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("items", &self.names())
            .finish()
    }
}

impl ProcessorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in data source
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("hsl", |cfg| Box::new(HslBuses::new(cfg, false)));
        registry.register("maka_autoliikennemaarat", |cfg| {
            Box::new(MakaAutoliikennemaarat::new(cfg))
        });
        registry.register("ylre_katuosat", |cfg| Box::new(YlreKatuosat::new(cfg)));
        registry.register("ylre_katualueet", |cfg| Box::new(YlreKatualueet::new(cfg)));
        registry.register("tram_infra", |cfg| Box::new(TramInfra::new(cfg)));
        registry.register("tram_lines", |cfg| Box::new(TramLines::new(cfg)));
        registry.register("cycle_infra", |cfg| Box::new(CycleInfra::new(cfg)));
        registry
    }

    /// Register (or replace) the constructor for `item`
    pub fn register<F>(&mut self, item: impl Into<String>, constructor: F)
    where
        F: Fn(Arc<Config>) -> Box<dyn GisProcessor> + 'static,
    {
        let item = item.into();
        debug!("Registering processor for item {}", item);
        self.constructors.insert(item, Box::new(constructor));
    }

    pub fn contains(&self, item: &str) -> bool {
        self.constructors.contains_key(item)
    }

    /// Registered item names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct the processor registered for `item`.
    ///
    /// Returns [`GisError::UnknownItem`] when nothing is registered under the name.
    pub fn instantiate_processor(
        &self,
        item: &str,
        cfg: Arc<Config>,
    ) -> Result<Box<dyn GisProcessor>> {
        let constructor = self
            .constructors
            .get(item)
            .ok_or_else(|| GisError::UnknownItem(item.to_string()))?;
        Ok(constructor(cfg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::ProcessorKind;

    #[test]
    fn test_default_names() {
        let registry = ProcessorRegistry::with_defaults();
        assert_eq!(
            registry.names(),
            vec![
                "cycle_infra",
                "hsl",
                "maka_autoliikennemaarat",
                "tram_infra",
                "tram_lines",
                "ylre_katualueet",
                "ylre_katuosat",
            ]
        );
    }

    #[test]
    fn test_hsl_is_bus_routes_without_validation() {
        let registry = ProcessorRegistry::with_defaults();
        let cfg = Arc::new(Config::build());

        let processor = registry.instantiate_processor("hsl", cfg.clone()).unwrap();
        assert_eq!(processor.kind(), ProcessorKind::BusRoutes);
        assert!(!processor.validation_enabled());
        assert!(Arc::ptr_eq(processor.config(), &cfg));
    }

    #[test]
    fn test_unknown_item() {
        let registry = ProcessorRegistry::with_defaults();
        let err = registry
            .instantiate_processor("bogus_item", Arc::new(Config::build()))
            .err()
            .expect("Unknown item should not instantiate");
        assert!(matches!(err, GisError::UnknownItem(ref name) if name == "bogus_item"));
    }

    #[test]
    fn test_register_replaces_entry() {
        let mut registry = ProcessorRegistry::with_defaults();
        registry.register("hsl", |cfg| Box::new(HslBuses::new(cfg, true)));

        let processor = registry
            .instantiate_processor("hsl", Arc::new(Config::build()))
            .unwrap();
        assert!(processor.validation_enabled());
        assert_eq!(registry.names().len(), 7);
    }
}
