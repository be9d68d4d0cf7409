//! Per-run configuration
//!
//! Built once by the orchestrator and shared read-only with every processor
//! through an `Arc`.

use std::path::PathBuf;

use crate::profile::DeploymentProfile;
use crate::settings::{ProfileSettings, SettingsFile};

/// Configuration shared by all processors of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    deployment_profile: DeploymentProfile,
    settings: SettingsFile,
}

impl Config {
    /// Default configuration: default profile, built-in directories
    pub fn build() -> Self {
        Self::default()
    }

    /// Select the deployment profile. The value is taken as given.
    pub fn with_deployment_profile(mut self, profile: DeploymentProfile) -> Self {
        self.deployment_profile = profile;
        self
    }

    /// Replace the per-profile directory overrides
    pub fn with_settings(mut self, settings: SettingsFile) -> Self {
        self.settings = settings;
        self
    }

    pub fn deployment_profile(&self) -> DeploymentProfile {
        self.deployment_profile
    }

    /// Directories of the active profile
    pub fn settings(&self) -> ProfileSettings {
        self.settings.for_profile(self.deployment_profile)
    }

    pub fn download_dir(&self) -> PathBuf {
        self.settings().download_dir
    }

    pub fn output_dir(&self) -> PathBuf {
        self.settings().output_dir
    }

    pub fn database_dir(&self) -> PathBuf {
        self.settings().database_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DEFAULT_DEPLOYMENT_PROFILE;

    #[test]
    fn test_build_uses_default_profile() {
        let cfg = Config::build();
        assert_eq!(cfg.deployment_profile(), DEFAULT_DEPLOYMENT_PROFILE);
        assert_eq!(
            cfg.settings(),
            ProfileSettings::defaults_for(DEFAULT_DEPLOYMENT_PROFILE)
        );
    }

    #[test]
    fn test_with_deployment_profile_switches_directories() {
        let cfg =
            Config::build().with_deployment_profile(DeploymentProfile::LocalDockerDevelopment);
        assert_eq!(cfg.deployment_profile(), DeploymentProfile::LocalDockerDevelopment);
        assert_eq!(cfg.download_dir(), PathBuf::from("/downloads"));
    }

    #[test]
    fn test_settings_override_active_profile() {
        let mut settings = SettingsFile::default();
        settings.profiles.insert(
            DeploymentProfile::LocalDevelopment,
            ProfileSettings {
                download_dir: PathBuf::from("in"),
                output_dir: PathBuf::from("out"),
                database_dir: PathBuf::from("db"),
            },
        );

        let cfg = Config::build().with_settings(settings);
        assert_eq!(cfg.download_dir(), PathBuf::from("in"));
        assert_eq!(cfg.output_dir(), PathBuf::from("out"));
        assert_eq!(cfg.database_dir(), PathBuf::from("db"));
    }
}
