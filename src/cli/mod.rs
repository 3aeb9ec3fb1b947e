//! CLI command definitions and handlers

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};

pub mod args;
pub mod context;
pub mod group;
pub mod status;

pub use args::{GlobalOptions, OutputFormat, PageArgs};
pub use context::CommandContext;

/// oaectl - command line companion for the OAE group API
#[derive(Parser, Debug)]
#[command(name = "oaectl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "OAECTL_FORMAT",
        default_value = "pretty",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "OAECTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Profile to use instead of the active profile
    #[arg(long, global = true, env = "OAECTL_PROFILE", hide_env = true)]
    pub profile: Option<String>,

    /// Tenant base URL, overrides the profile (e.g. cam.oae.com)
    #[arg(long, global = true, env = "OAECTL_TENANT", hide_env = true)]
    pub tenant: Option<String>,

    /// Act as an anonymous user, ignoring configured credentials
    #[arg(long, global = true)]
    pub anonymous: bool,

    /// Enable debug logging
    #[arg(
        long,
        global = true,
        env = "OAECTL_DEBUG",
        hide_env = true,
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration
    Status,

    /// Display version information
    Version,

    /// Manage groups
    #[command(subcommand)]
    Group(GroupCommands),
}

/// Group subcommands
#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// Create a group
    Create {
        /// Alias of the new group
        alias: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Visibility (public, loggedin, private)
        #[arg(long)]
        visibility: Option<String>,

        /// Joinable policy (yes, no, request)
        #[arg(long)]
        joinable: Option<String>,

        /// Principal id to make a manager (repeatable)
        #[arg(long = "manager")]
        managers: Vec<String>,

        /// Principal id to make a member (repeatable)
        #[arg(long = "member")]
        members: Vec<String>,
    },

    /// Show a group
    Get {
        /// Group id
        group_id: String,
    },

    /// Update profile fields of a group
    Update {
        /// Group id
        group_id: String,

        /// Field to change as FIELD=VALUE (repeatable)
        #[arg(long = "set", value_parser = args::parse_field, required = true)]
        fields: Vec<(String, String)>,
    },

    /// List the members of a group
    Members {
        /// Group id
        group_id: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Add, re-role or remove group members
    SetMembers {
        /// Group id
        group_id: String,

        /// Change as PRINCIPAL=manager|member|remove (repeatable)
        #[arg(long = "set", value_parser = args::parse_member_change, required = true)]
        changes: Vec<(String, oae_rest::client::MemberChange)>,
    },

    /// List the groups a user belongs to
    Memberships {
        /// User id
        user_id: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Check whether a group alias is taken
    Exists {
        /// Alias to check
        alias: String,
    },
}
