mod error;
mod publish;
mod run;
mod summary;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use semrel_ci::{CiPlatform, Environment, GithubPlatform};
use semrel_config::ConfigLoader;
use semrel_engine::{CommandEngine, DEFAULT_ENGINE_PROGRAM};

use crate::error::ActionError;

#[derive(Parser)]
#[command(name = "semrel-action")]
#[command(bin_name = "semrel-action")]
#[command(about = "Drive a semantic-release engine from CI", long_about = None)]
struct Cli {
    /// Working directory override (default: resolved from the working-path input)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Release engine executable
    #[arg(long, env = "SEMREL_ENGINE", default_value = DEFAULT_ENGINE_PROGRAM)]
    engine: String,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let platform = GithubPlatform::new(Environment::capture());
    let loader = ConfigLoader::new();
    let engine = CommandEngine::new(cli.engine);

    match run::run(&platform, &loader, &engine, cli.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            platform.report_failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_error(error: &ActionError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
