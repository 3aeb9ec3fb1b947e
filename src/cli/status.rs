//! Status command implementation

use colored::Colorize;
use oae_rest::config::Config;
use oae_rest::error::Result;

use crate::cli::GlobalOptions;
use crate::cli::context::resolve;

/// Show which config file, profile, tenant and user commands would use
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "oaectl Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let exists = config_path.exists();
    println!(
        "Config file: {}{}",
        config_path.display().to_string().cyan(),
        if exists { "" } else { " (not found)" }
    );

    let (profile_name, ctx) = resolve(opts)?;
    println!("Profile: {}", profile_name.bold());
    println!("Tenant: {}", ctx.tenant().base_url());

    match ctx.user() {
        Some(user) => println!("{} Acting as {}", "✓".green(), user.user_id),
        None => println!("{} Acting anonymously", "•".yellow()),
    }

    Ok(())
}
