#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for folio_probe.rs)
pub use app::App;
pub use config::{PERSISTENCE, PROFILE, TIMELINE, WEBRING};
pub use data::{HttpPeerFeed, PeerFeed, StaticPeerFeed, load_neighbors};
pub use domain::{NeighborResult, PeerRecord, ProgressBar, ProgressSnapshot, TimelineWindow};

use anyhow::{Context, Result};
use config::DF;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hostname this copy of the site is served from (used to find our slot in the webring)
    #[arg(long, default_value = WEBRING.default_host)]
    pub host: String,

    /// Skip the webring fetch and keep the ring's generic prev/next links
    #[arg(long, default_value_t = false)]
    pub offline: bool,
}

/// Validate the configured degree window. A bad window is a build-time mistake, so callers treat
/// the error as fatal and refuse to start.
pub fn startup_timeline() -> Result<TimelineWindow> {
    let window = TimelineWindow::configured().context("Invalid TIMELINE configuration")?;
    if DF.log_progress {
        let snapshot = window.compute(utils::now_utc());
        log::info!(
            "Degree window {} .. {}: {}",
            utils::format_date(window.start()),
            utils::format_date(window.end()),
            snapshot.summary()
        );
    }
    Ok(window)
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli, timeline: TimelineWindow) -> App {
    App::new(cc, args, timeline)
}
