// Entry point - CLI parsing and wiring

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod app;
mod backend;
mod config;
mod error;
mod export;
mod mapping;
mod merge;
mod resolver;
mod tree;

use crate::app::App;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "pass-profile", version)]
#[command(about = "Generate environment variables from pass profiles")]
struct Cli {
    /// Profile stored under Profile/ in pass or in ~/.pass-profile/profile/
    #[arg(default_value = "default")]
    profile_name: String,
    /// Log diagnostics to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
    /// Config file (default: $XDG_CONFIG_HOME/pass-profile/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").as_deref(),
        Ok("1") | Ok("true")
    )
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("PASS_PROFILE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), error::Error> {
    let config = Config::load(cli.config.as_deref())?;
    App::new(config).run(&cli.profile_name)
}

fn main() -> ExitCode {
    if !dotenv_disabled() {
        dotenvy::dotenv().ok();
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            ExitCode::FAILURE
        }
    }
}
