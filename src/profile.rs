//! Deployment profile selection
//!
//! The profile is a closed set of operating modes. Anything outside the set
//! resolves to [`DEFAULT_DEPLOYMENT_PROFILE`] instead of failing the run.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::info;

/// Environment variable consulted by the binary to pick a profile.
pub const DEPLOYMENT_PROFILE_ENV: &str = "TORMAYS_DEPLOYMENT_PROFILE";

/// Profile used when the signal is absent or unrecognized.
pub const DEFAULT_DEPLOYMENT_PROFILE: DeploymentProfile = DeploymentProfile::LocalDevelopment;

/// Named operating mode for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeploymentProfile {
    #[default]
    LocalDevelopment,
    LocalDockerDevelopment,
}

/// Resolve the raw profile signal into a profile.
///
/// Only the exact snake_case names are accepted. Absent, empty or misspelled
/// values fall back to the default and are reported at info level.
pub fn resolve_deployment_profile(signal: Option<&str>) -> DeploymentProfile {
    let profile = match signal.map(str::parse::<DeploymentProfile>) {
        Some(Ok(profile)) => profile,
        _ => {
            info!(
                "Deployment profile environment variable is not set, defaulting to '{}'",
                DEFAULT_DEPLOYMENT_PROFILE
            );
            DEFAULT_DEPLOYMENT_PROFILE
        }
    };
    info!("Using deployment profile: '{}'", profile);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_profile_names() {
        assert_eq!(DeploymentProfile::LocalDevelopment.to_string(), "local_development");
        assert_eq!(
            DeploymentProfile::LocalDockerDevelopment.to_string(),
            "local_docker_development"
        );
    }

    #[test]
    fn test_resolve_recognized_signals() {
        for profile in DeploymentProfile::iter() {
            let name = profile.to_string();
            assert_eq!(resolve_deployment_profile(Some(&name)), profile);
        }
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(resolve_deployment_profile(None), DEFAULT_DEPLOYMENT_PROFILE);
        assert_eq!(resolve_deployment_profile(Some("")), DEFAULT_DEPLOYMENT_PROFILE);
        assert_eq!(resolve_deployment_profile(Some("production")), DEFAULT_DEPLOYMENT_PROFILE);
        // Case matters, the signal is compared verbatim
        assert_eq!(
            resolve_deployment_profile(Some("LOCAL_DOCKER_DEVELOPMENT")),
            DEFAULT_DEPLOYMENT_PROFILE
        );
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&DeploymentProfile::LocalDockerDevelopment).unwrap();
        assert_eq!(json, "\"local_docker_development\"");
    }
}
