mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use std::{io::{self, IsTerminal}, process::ExitCode};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::builder().with_default_directive(level.into()).from_env_lossy())
        .init();

    let options = cli.render_options();
    let interactive = io::stdin().is_terminal();

    let (result, input) = match &cli.command {
        Commands::Scenes { scenes, no_render } => {
            (commands::scenes::run(scenes, *no_render, &cli.out, options), "")
        },
        Commands::Eval { expr, render } => {
            let expr = expr.as_deref();
            (
                commands::eval::run(expr, interactive, render.as_deref(), options),
                expr.unwrap_or_default(),
            )
        },
        Commands::Gallery { ids } => (commands::gallery::run(ids, &cli.out, options), ""),
        Commands::Explore => (commands::explore::run(interactive, &cli.out, options), ""),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr(input);
            ExitCode::FAILURE
        },
    }
}
