//! Feature store backing `persist_to_database`
//!
//! Each table is one JSON document under the store directory. Persisting a
//! table replaces it as a whole: the new content is written next to the old
//! one and renamed over it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GisError, Result};
use crate::features::FeatureCollection;

/// Directory of table snapshots
#[derive(Debug, Clone)]
pub struct FeatureStore {
    root: PathBuf,
}

impl FeatureStore {
    /// Open the store, creating its directory on first use
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn table_path(&self, table: &str) -> Result<PathBuf> {
        let valid = !table.is_empty()
            && table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(GisError::config(format!("Invalid table name '{}'", table)));
        }
        Ok(self.root.join(format!("{}.json", table)))
    }

    /// Replace the contents of `table`, returning the number of rows written
    pub fn replace_table(&self, table: &str, features: &FeatureCollection) -> Result<usize> {
        let path = self.table_path(table)?;
        let staging = path.with_extension("json.tmp");

        let json = serde_json::to_string(features)?;
        fs::write(&staging, json)?;
        if let Err(e) = fs::rename(&staging, &path) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        debug!("Replaced table {} with {} rows", table, features.len());
        Ok(features.len())
    }

    /// Read a table back, `None` if it has never been written
    pub fn read_table(&self, table: &str) -> Result<Option<FeatureCollection>> {
        let path = self.table_path(table)?;
        if !path.exists() {
            return Ok(None);
        }
        FeatureCollection::load_from_file(path).map(Some)
    }
}
