//! Terminal client for the live alert feed.
//!
//! Polls the alerts server, prints the active alert and recent history for
//! the selected region, and takes commands on stdin.

mod commands;
mod config;
mod console;
mod render;
mod terminal;

use std::time::Duration;

use alert_client::AlertClient;
use alert_core::RegionId;
use alert_map::MarkerRenderer;
use alert_monitor::{AlertMonitor, AudioCue, MonitorCommand, Silent};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::Input;
use crate::config::Config;
use crate::console::ConsoleSurface;
use crate::terminal::{TerminalBell, TerminalNotifier};

#[derive(Debug, Parser)]
#[command(name = "alert-cli")]
#[command(about = "Watch the live alert feed from a terminal")]
struct Args {
    /// Alerts server base URL. Falls back to ALERTS_BASE_URL env.
    #[arg(long)]
    base_url: Option<String>,

    /// Region to show at startup. Falls back to ALERTS_REGION env.
    #[arg(long)]
    region: Option<RegionId>,

    /// Poll interval in milliseconds
    #[arg(long)]
    poll_ms: Option<u64>,

    /// Demo advance interval in milliseconds
    #[arg(long)]
    demo_ms: Option<u64>,

    /// Start in demo mode
    #[arg(long)]
    demo: bool,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,

    /// Do not print notifications
    #[arg(long)]
    no_notify: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.client =
                alert_client::ClientConfig::new(url).with_timeout(config.client.request_timeout);
        }
        if let Some(region) = self.region {
            config.monitor.region = region;
        }
        if let Some(ms) = self.poll_ms.filter(|ms| *ms > 0) {
            config.monitor.poll_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = self.demo_ms.filter(|ms| *ms > 0) {
            config.monitor.demo_interval = Duration::from_millis(ms);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    args.apply(&mut config);

    info!(
        base_url = %config.client.base_url,
        region = %config.monitor.region,
        "Starting alert client"
    );

    let client = AlertClient::new(config.client.clone())?;
    let notifier = if args.no_notify {
        TerminalNotifier::disabled()
    } else {
        TerminalNotifier::new()
    };
    let audio: Box<dyn AudioCue> = if args.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell)
    };

    let (monitor, handle) = AlertMonitor::new(
        client,
        MarkerRenderer::new(ConsoleSurface::new()),
        Box::new(notifier),
        audio,
        config.monitor,
    );
    let mut task = tokio::spawn(monitor.run());

    if args.demo {
        handle.send(MonitorCommand::LoadDemo).await?;
    }

    println!("{}", commands::HELP);

    let mut snapshots = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_rendered = String::new();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let text = render::snapshot(&snapshots.borrow_and_update());
                if text != last_rendered {
                    println!("{text}");
                    last_rendered = text;
                }
            }
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => match commands::parse(&line) {
                    Ok(Input::Command(command)) => handle.send(command).await?,
                    Ok(Input::Help) => println!("{}", commands::HELP),
                    Ok(Input::Regions) => println!("{}", commands::region_list()),
                    Ok(Input::Empty) => {}
                    Err(message) => println!("{message}"),
                },
                Ok(None) => stdin_open = false,
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    stdin_open = false;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                handle.send(MonitorCommand::Shutdown).await?;
            }
            result = &mut task => {
                result??;
                break;
            }
        }
    }

    Ok(())
}
