//! tickettrack
//!
//! Watches a Jira project for new issues filed by (or assigned to) one user.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tickettrack_core::models::{PollSettings, TrackingField};
use tickettrack_core::storage::{CredentialsStorage, DEFAULT_CONFIG_PATH};
use tickettrack_daemon::{Consumer, LogHandler, Poller, Stopped};
use tickettrack_jira::JiraClient;

#[derive(Parser, Debug)]
#[command(name = "tickettrack")]
#[command(about = "Report new Jira issues for a user in a project", long_about = None)]
struct Args {
    /// The path to the jira config to connect to
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// The jira project to search for tickets in
    #[arg(long, default_value = "")]
    project: String,

    /// The user to search for tickets for
    #[arg(long, default_value = "")]
    user: String,

    /// Match the user as the issue's reporter or assignee
    #[arg(long, default_value_t = TrackingField::Reporter)]
    track: TrackingField,

    /// Seconds between searches
    #[arg(long, default_value_t = 4)]
    interval: u64,

    /// Max number of issues fetched per search
    #[arg(long, default_value_t = PollSettings::DEFAULT_MAX_RESULTS)]
    max_results: u32,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn poll_settings(&self) -> PollSettings {
        PollSettings {
            user: self.user.clone(),
            project: self.project.clone(),
            field: self.track,
            interval: Duration::from_secs(self.interval),
            max_results: self.max_results,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(&args.log_level)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let settings = args.poll_settings();
    settings.validate()?;

    tracing::info!("Searching in [{}] for {}", settings.project, settings.user);

    let storage = CredentialsStorage::new(&args.config);
    let credentials = storage
        .load()
        .with_context(|| format!("Error loading config {}", storage.path().display()))?;
    let client = JiraClient::new(Arc::new(credentials))?;

    let poller = Poller::new(client, settings);
    let handles = tickettrack_daemon::start(poller, Consumer::new(LogHandler));

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
        }
    };

    match handles.run_until(shutdown).await {
        Stopped::Shutdown => Ok(()),
        Stopped::PollerExited => bail!("Poll loop stopped unexpectedly"),
        Stopped::ConsumerExited => bail!("Issue consumer stopped unexpectedly"),
    }
}
