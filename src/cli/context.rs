//! Command execution context
//!
//! Resolves the config file, profile and global overrides into the
//! [`RestContext`] every group command runs with.

use oae_rest::client::{RestClient, RestContext};
use oae_rest::config::{Config, Profile};
use oae_rest::error::{ConfigError, Error, Result};

use crate::cli::{GlobalOptions, OutputFormat};

/// Context for command execution containing the client, the execution
/// context and output preferences.
pub struct CommandContext {
    pub client: RestClient,
    pub ctx: RestContext,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Resolve configuration and build the REST client.
    ///
    /// # Errors
    /// Returns error if no tenant can be resolved or the profile is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let (_, ctx) = resolve(opts)?;
        let client = RestClient::new()?;

        Ok(Self {
            client,
            ctx,
            format: opts.format,
        })
    }
}

/// Resolve the profile name and execution context for the global options.
///
/// A missing config file or profile is fine as long as `--tenant` supplies
/// the base URL; the call then runs anonymously.
pub fn resolve(opts: &GlobalOptions) -> Result<(String, RestContext)> {
    let has_tenant = opts.tenant.is_some();

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound(_))) if has_tenant => Config::default(),
        Err(err) => return Err(err),
    };

    let (name, profile) = match config.resolve_profile(opts.profile_ref()) {
        Ok((name, profile)) => (name.to_string(), profile.clone()),
        Err(Error::Config(ConfigError::UnknownProfile(name)))
            if has_tenant && opts.profile.is_none() =>
        {
            (name, Profile::default())
        }
        Err(err) => return Err(err),
    };

    let ctx = profile.context(opts.tenant_ref(), opts.anonymous)?;
    Ok((name, ctx))
}
