//! Output formatting for CLI results

use colored::Colorize;
use oae_rest::error::Result;
use serde_json::{Value, json};

use crate::cli::{CommandContext, OutputFormat};

pub mod json;

/// Print a response body, which the server may have left empty
pub fn print_value(value: Option<&Value>, cmd: &CommandContext) -> Result<()> {
    match (value, cmd.format) {
        (Some(value), OutputFormat::Pretty) => println!("{}", serde_json::to_string_pretty(value)?),
        (None, OutputFormat::Pretty) => println!("{} Done (no content returned)", "✓".green()),
        (_, OutputFormat::Json) => println!("{}", json::format_json(&value, &cmd.ctx)?),
    }
    Ok(())
}

/// Print the outcome of an alias check
pub fn print_exists(alias: &str, exists: bool, cmd: &CommandContext) -> Result<()> {
    match cmd.format {
        OutputFormat::Pretty => {
            if exists {
                println!("{} Group alias '{}' is taken", "✓".green(), alias);
            } else {
                println!("{} Group alias '{}' is available", "✗".yellow(), alias);
            }
        }
        OutputFormat::Json => {
            let data = json!({ "alias": alias, "exists": exists });
            println!("{}", json::format_json(&data, &cmd.ctx)?);
        }
    }
    Ok(())
}

/// Print confirmation of a write that returns no body
pub fn print_updated(group_id: &str, what: &str, cmd: &CommandContext) -> Result<()> {
    match cmd.format {
        OutputFormat::Pretty => println!("{} Updated {} of {}", "✓".green(), what, group_id),
        OutputFormat::Json => {
            let data = json!({ "groupId": group_id, "updated": what });
            println!("{}", json::format_json(&data, &cmd.ctx)?);
        }
    }
    Ok(())
}
