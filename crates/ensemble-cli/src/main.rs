//! ensemble: run several applications from one command line.
//!
//! ```text
//! ensemble [--log-level LEVEL] [--list] APP [ARGS...] [APP [ARGS...]]...
//! ```
//!
//! Everything before the first application name belongs to the launcher.

mod apps;

use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use ensemble_core::{AppRegistry, CancellationToken};
use tracing_subscriber::EnvFilter;

/// Launcher flags (the arguments before the first application name).
#[derive(Debug, Parser)]
#[command(
    name = "ensemble",
    version,
    about = "Run several applications concurrently; the first failure stops them all",
    after_help = "Applications: echo, sleep, wait, fail, exec\nExample: ensemble wait sleep 500 fail boom"
)]
struct Cli {
    /// Log filter (overridden by RUST_LOG).
    #[arg(long, default_value = "info")]
    log_level: String,
    /// Print the available applications and exit.
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let registry = apps::registry().context("failed to register applications")?;
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "ensemble".to_string());

    let (own_args, runnable) = match ensemble_core::run(&registry, args.iter().cloned()) {
        Ok(launch) => launch,
        Err(err) => {
            // no application selected: the whole command line is ours
            match Cli::try_parse_from(&args) {
                Ok(cli) if cli.list => {
                    print_apps(&registry);
                    return Ok(ExitCode::SUCCESS);
                }
                // --help / --version
                Err(clap_err) if !clap_err.use_stderr() => clap_err.exit(),
                _ => {}
            }
            eprintln!("ensemble: {err}");
            eprintln!("available applications: {}", registry.names().join(", "));
            return Ok(ExitCode::from(2));
        }
    };

    let cli = Cli::parse_from(std::iter::once(program).chain(own_args));
    init_tracing(&cli.log_level)?;
    if cli.list {
        print_apps(&registry);
        return Ok(ExitCode::SUCCESS);
    }

    let ctx = CancellationToken::new();
    spawn_signal_listener(ctx.clone());

    tracing::info!(apps = ?runnable.names(), "starting applications");
    match runnable.run(ctx).await {
        Ok(()) => {
            tracing::info!("all applications finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn print_apps(registry: &AppRegistry) {
    for name in registry.names() {
        println!("{name}");
    }
}

/// Ctrl-C cancels the root context; every running application sees it.
fn spawn_signal_listener(ctx: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("received ctrl-c, shutting down");
            ctx.cancel();
        }
    });
}
