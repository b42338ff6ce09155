//! CLI definitions and entry point

use anyhow::Context;
use clap::Parser;
use log::debug;

use sitecheck::adapters::TransportFetcher;
use sitecheck::config::GlobalConfig;
use sitecheck::core::services::{CheckEngine, EngineOptions};
use sitecheck::definition::DefinitionSource;
use sitecheck::output::{OutputMode, RunReport};
use sitecheck::plan::plan;

/// sitecheck - Assert that strings appear in websites and files
#[derive(Parser, Debug)]
#[command(
    name = "sitecheck",
    version,
    about = "Assert that strings appear in websites and files",
    long_about = "Check that needles appear in the content of URLs and files.\n\n\
                  The definition maps regexes over target URLs/paths to needles.\n\
                  Capture groups can be substituted into needles as $1, $2, ...\n\
                  Exits 0 when every check passes, 1 otherwise."
)]
pub struct Cli {
    /// Definition file path or inline JSON; read from stdin when omitted
    pub definition: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Per-target fetch timeout in seconds (default: none)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Run the CLI, returning whether every check passed
pub async fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut settings = GlobalConfig::load().fetch;
    if cli.timeout.is_some() {
        settings.timeout_secs = cli.timeout;
    }
    debug!("fetch settings: {settings:?}");

    let loaded = DefinitionSource::from_arg(cli.definition.as_deref()).load()?;
    let targets = plan(&loaded)?;

    let fetcher = TransportFetcher::new(&settings).context("failed to build HTTP client")?;
    let engine = CheckEngine::new(fetcher).with_options(EngineOptions {
        timeout: settings.timeout(),
    });
    let result = engine.run(targets).await;

    RunReport::new(&result).render(output_mode)?;
    Ok(result.overall_pass)
}
