//! Shared CLI argument types

use clap::Args;
use oae_rest::client::{MemberChange, PageParams};

use crate::cli::Cli;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized output
    #[default]
    Pretty,
    /// JSON format - structured for scripts
    Json,
}

/// Paging arguments for member listings
#[derive(Args, Debug, Default, Clone)]
pub struct PageArgs {
    /// Principal id to start after
    #[arg(long)]
    pub start: Option<String>,

    /// Maximum entries to return
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,
}

impl PageArgs {
    /// Convert to API paging params, `None` when nothing was given
    pub fn to_params(&self) -> Option<PageParams> {
        let params = PageParams {
            start: self.start.clone(),
            limit: self.limit,
        };
        (!params.is_empty()).then_some(params)
    }
}

/// Global CLI options passed to all command handlers.
///
/// Precedence: CLI flag > environment variable > config file.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub format: OutputFormat,
    pub config: Option<String>,
    pub profile: Option<String>,
    pub tenant: Option<String>,
    pub anonymous: bool,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            profile: cli.profile.clone(),
            tenant: cli.tenant.clone(),
            anonymous: cli.anonymous,
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn profile_ref(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn tenant_ref(&self) -> Option<&str> {
        self.tenant.as_deref()
    }
}

/// Parse `FIELD=VALUE`; the value may itself contain `=`
pub fn parse_field(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    if field.is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((field.to_string(), value.to_string()))
}

/// Parse `PRINCIPAL=manager|member|remove`
pub fn parse_member_change(s: &str) -> Result<(String, MemberChange), String> {
    let (principal, change) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected PRINCIPAL=ROLE, got '{}'", s))?;
    if principal.is_empty() {
        return Err(format!("missing principal id in '{}'", s));
    }
    Ok((principal.to_string(), change.parse()?))
}
