//! gis-material-update library
//!
//! Turns downloaded geographic source material into feature store tables and
//! GeoJSON files, one named item at a time.

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod orchestrator;
pub mod processors;
pub mod profile;
pub mod registry;
pub mod settings;
pub mod store;

// Re-export main types for convenience
pub use config::Config;
pub use error::{GisError, Result};
pub use features::{Feature, FeatureCollection, Geometry};
pub use orchestrator::{setup, RunOrchestrator, RunSummary};
pub use processors::{Dataset, GisProcessor, ProcessorKind};
pub use profile::{
    resolve_deployment_profile, DeploymentProfile, DEFAULT_DEPLOYMENT_PROFILE,
    DEPLOYMENT_PROFILE_ENV,
};
pub use registry::{ProcessorConstructor, ProcessorRegistry};
pub use settings::{ProfileSettings, SettingsFile};
pub use store::FeatureStore;
