use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Where to read the triggering event from. Defaults come from the runner's
/// `GITHUB_EVENT_NAME` and `GITHUB_EVENT_PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub event_name: Option<String>,
    pub event_path: Option<PathBuf>,
    pub help: bool,
}

/// Parse command line arguments (without the program name).
///
/// Supported forms:
///   asana-pr-sync
///   asana-pr-sync --event-name pull_request --event-path event.json
///   asana-pr-sync -n pull_request_review -e review.json
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs {
        event_name: None,
        event_path: None,
        help: false,
    };
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => parsed.help = true,
            flag @ ("-n" | "--event-name") => {
                i += 1;
                let value = args
                    .get(i)
                    .with_context(|| format!("Missing value for {flag} flag"))?;
                parsed.event_name = Some(value.clone());
            }
            flag @ ("-e" | "--event-path") => {
                i += 1;
                let value = args
                    .get(i)
                    .with_context(|| format!("Missing value for {flag} flag"))?;
                parsed.event_path = Some(PathBuf::from(value));
            }
            other => bail!("Unknown argument: {other}\n\nRun with --help for usage."),
        }
        i += 1;
    }

    Ok(parsed)
}

impl CliArgs {
    pub fn resolve_event_name(&self) -> Result<String> {
        match &self.event_name {
            Some(name) => Ok(name.clone()),
            None => std::env::var("GITHUB_EVENT_NAME")
                .context("GITHUB_EVENT_NAME is not set; pass --event-name"),
        }
    }

    pub fn resolve_event_path(&self) -> Result<PathBuf> {
        match &self.event_path {
            Some(path) => Ok(path.clone()),
            None => std::env::var_os("GITHUB_EVENT_PATH")
                .map(PathBuf::from)
                .context("GITHUB_EVENT_PATH is not set; pass --event-path"),
        }
    }
}

pub fn print_help() {
    println!("asana-pr-sync — move linked Asana tasks along with pull request events\n");
    println!("USAGE:");
    println!("  asana-pr-sync [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -n, --event-name <name>  Event name (default: $GITHUB_EVENT_NAME)");
    println!("  -e, --event-path <file>  Event payload JSON (default: $GITHUB_EVENT_PATH)");
    println!("  -h, --help               Show this help");
    println!();
    println!("INPUTS (environment):");
    println!("  INPUT_ASANA-TOKEN             Asana personal access token");
    println!("  INPUT_WHITELIST-GITHUB-USERS  Comma-separated authors that go straight to QA");
    println!("  INPUT_ASANA-BASE-URL          Asana API base URL override");
}
