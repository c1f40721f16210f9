//! sdm CLI library.
//!
//! Types, command handlers, and dataset loading behind the `sdm` binary.
//! Other front ends can build a [`Cli`](cli::Cli) programmatically and call
//! [`run`], or use the command handlers in [`commands`] directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod output;

use cli::{Cli, Commands};

/// Dispatch a parsed [`Cli`] to the appropriate command handler.
pub fn run(cli: Cli) -> error::CliResult<()> {
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Schema {
            out,
            format,
            namespace,
        } => commands::schema::run(&config, out.as_deref(), format.map(Into::into), namespace),

        Commands::Map {
            input,
            out,
            format,
            strictness,
            namespace,
            canonical,
        } => commands::map::run(
            &config,
            commands::map::MapOpts {
                input: &input,
                out: out.as_deref(),
                format: format.map(Into::into),
                strictness: strictness.map(Into::into),
                namespace,
                canonical,
            },
            cli.quiet,
        ),

        Commands::Check { input, namespace } => commands::check::run(&config, &input, namespace),
    }
}
