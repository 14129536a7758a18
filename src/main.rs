mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use crate::core::models::swap_request::{Decision, NewRequest};

/// Send diagnostics to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let args = Cli::parse();

    init_tracing(args.verbose);
    cli::output::set_quiet(args.quiet);
    cli::context::init(&args.data_dir);

    let result = match args.command {
        Commands::Request {
            from,
            to,
            with,
            reason,
        } => cli::commands::request::execute(NewRequest {
            from,
            to,
            with,
            reason,
        }),
        Commands::List { status } => cli::commands::list::execute(status),
        Commands::Approve { id } => cli::commands::decide::execute(&id, Decision::Approve),
        Commands::Deny { id } => cli::commands::decide::execute(&id, Decision::Deny),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
