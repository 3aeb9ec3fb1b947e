//! oaectl - command line companion for the OAE group API

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

mod cli;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use oae_rest::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` applies as usual; `--debug` forces debug output for this crate
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder
            .filter_module("oae_rest", LevelFilter::Debug)
            .filter_module("oaectl", LevelFilter::Debug);
    }
    builder.init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("oaectl version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Group(group_cmd) => cli::group::run(group_cmd, &opts).await,
    }
}
