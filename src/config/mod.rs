//! Profile configuration for oaectl
//!
//! Profiles live in `~/.oaectl/config.yaml`:
//!
//! ```yaml
//! active_profile: cam
//! profiles:
//!   cam:
//!     base_url: cam.oae.com
//!     user_id: u:cam:alice
//!     password: secret
//!   cam-anon:
//!     base_url: cam.oae.com
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::client::{Credentials, RestContext, Tenant};
use crate::error::{ConfigError, Result};

/// Name of the profile used when none is configured
pub const DEFAULT_PROFILE: &str = "default";

/// Configuration file with named profiles
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Profile used when `--profile` is not given
    #[serde(default = "default_profile_name")]
    pub active_profile: String,

    /// Profiles by name
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// One tenant/user pairing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Tenant base URL, e.g. `cam.oae.com`
    pub base_url: Option<String>,

    /// User to act as; anonymous when absent
    pub user_id: Option<String>,

    pub password: Option<String>,
}

fn default_profile_name() -> String {
    DEFAULT_PROFILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_profile: default_profile_name(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Profile {
    /// Build the execution context for this profile.
    ///
    /// `tenant_override` replaces the configured base URL; `anonymous` ignores
    /// the configured user.
    pub fn context(&self, tenant_override: Option<&str>, anonymous: bool) -> Result<RestContext> {
        let base_url = tenant_override
            .or(self.base_url.as_deref())
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingTenant)?;
        let tenant = Tenant::new(base_url);

        if anonymous {
            return Ok(RestContext::anonymous(tenant));
        }

        match (&self.user_id, &self.password) {
            (None, _) => Ok(RestContext::anonymous(tenant)),
            (Some(user_id), Some(password)) => Ok(RestContext::as_user(
                tenant,
                Credentials::new(user_id.clone(), password.clone()),
            )),
            (Some(user_id), None) => Err(ConfigError::Invalid(format!(
                "user '{}' has no password configured",
                user_id
            ))
            .into()),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".oaectl").join("config.yaml"))
    }

    /// Use `path` when given, otherwise the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path` or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Pick the profile named by `name`, or the active profile
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<(&str, &Profile)> {
        let name = name.unwrap_or(&self.active_profile);
        self.profiles
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()).into())
    }
}
