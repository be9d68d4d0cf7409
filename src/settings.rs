//! Settings file handling for per-profile directories.
//!
//! Each deployment profile has built-in directories. A JSON settings file may
//! override them for any profile it names; profiles it leaves out keep their
//! defaults.
//!
//! ```json
//! {
//!   "profiles": {
//!     "local_docker_development": {
//!       "download_dir": "/downloads",
//!       "output_dir": "/gis-output",
//!       "database_dir": "/database"
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::DeploymentProfile;

/// Directories a processor reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Where downloaded source material is found
    pub download_dir: PathBuf,
    /// Where processed GeoJSON files are written
    pub output_dir: PathBuf,
    /// Root of the feature store tables
    pub database_dir: PathBuf,
}

impl ProfileSettings {
    /// Built-in directories for a profile
    pub fn defaults_for(profile: DeploymentProfile) -> Self {
        match profile {
            DeploymentProfile::LocalDevelopment => Self {
                download_dir: PathBuf::from("haitaton-downloads"),
                output_dir: PathBuf::from("haitaton-gis-output"),
                database_dir: PathBuf::from("haitaton-database"),
            },
            DeploymentProfile::LocalDockerDevelopment => Self {
                download_dir: PathBuf::from("/downloads"),
                output_dir: PathBuf::from("/gis-output"),
                database_dir: PathBuf::from("/database"),
            },
        }
    }

    fn validate(&self, profile: DeploymentProfile) -> Result<()> {
        let dirs = [
            ("download_dir", &self.download_dir),
            ("output_dir", &self.output_dir),
            ("database_dir", &self.database_dir),
        ];
        for (name, dir) in dirs {
            if dir.as_os_str().is_empty() {
                anyhow::bail!("{} must not be empty for profile '{}'", name, profile);
            }
        }
        Ok(())
    }
}

/// Per-profile overrides loaded from a settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub profiles: HashMap<DeploymentProfile, ProfileSettings>,
}

impl SettingsFile {
    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let settings: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;
        settings.validate()?;

        Ok(settings)
    }

    /// Validate every profile entry in the file
    pub fn validate(&self) -> Result<()> {
        for (profile, settings) in &self.profiles {
            settings.validate(*profile)?;
        }
        Ok(())
    }

    /// Directories for `profile`, overridden if the file names it
    pub fn for_profile(&self, profile: DeploymentProfile) -> ProfileSettings {
        self.profiles
            .get(&profile)
            .cloned()
            .unwrap_or_else(|| ProfileSettings::defaults_for(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Should create temp file");
        file.write_all(json.as_bytes()).expect("Should write settings");
        file
    }

    #[test]
    fn test_defaults_differ_per_profile() {
        let local = ProfileSettings::defaults_for(DeploymentProfile::LocalDevelopment);
        let docker = ProfileSettings::defaults_for(DeploymentProfile::LocalDockerDevelopment);
        assert_ne!(local, docker);
        assert!(docker.download_dir.is_absolute());
    }

    #[test]
    fn test_override_only_named_profile() {
        let file = write_settings(
            r#"{
                "profiles": {
                    "local_docker_development": {
                        "download_dir": "/data/in",
                        "output_dir": "/data/out",
                        "database_dir": "/data/db"
                    }
                }
            }"#,
        );

        let settings = SettingsFile::load_from_file(file.path()).expect("Should load");
        let docker = settings.for_profile(DeploymentProfile::LocalDockerDevelopment);
        assert_eq!(docker.download_dir, PathBuf::from("/data/in"));

        let local = settings.for_profile(DeploymentProfile::LocalDevelopment);
        assert_eq!(
            local,
            ProfileSettings::defaults_for(DeploymentProfile::LocalDevelopment)
        );
    }

    #[test]
    fn test_empty_object_is_valid() {
        let file = write_settings("{}");
        let settings = SettingsFile::load_from_file(file.path()).expect("Should load");
        assert!(settings.profiles.is_empty());
    }

    #[test]
    fn test_unknown_profile_rejected() {
        let file = write_settings(
            r#"{"profiles": {"production": {
                "download_dir": "a", "output_dir": "b", "database_dir": "c"
            }}}"#,
        );
        assert!(SettingsFile::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_empty_directory_rejected() {
        let file = write_settings(
            r#"{"profiles": {"local_development": {
                "download_dir": "", "output_dir": "b", "database_dir": "c"
            }}}"#,
        );
        let err = SettingsFile::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("download_dir"));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = SettingsFile::load_from_file("/nonexistent/settings.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read settings"));
    }
}
