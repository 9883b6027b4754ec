mod cli;
mod config;
mod error;
mod event;
mod links;
mod model;
mod pipeline;
mod providers;
mod reconcile;
mod report;
mod status;

use std::process::ExitCode;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use event::Event;
use report::{ActionsReporter, Reporter};

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let reporter = ActionsReporter::from_env();

    match run(&args, &reporter).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            reporter.report_failure(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String], reporter: &ActionsReporter) -> Result<bool> {
    let args = cli::parse_args(args)?;
    if args.help {
        cli::print_help();
        return Ok(true);
    }

    let config = config::load_config()?;
    let event = Event::load(&args.resolve_event_name()?, &args.resolve_event_path()?)?;
    let tracker = providers::create_tracker(&config);

    Ok(pipeline::run(&event, &config, tracker.as_ref(), reporter).await)
}
