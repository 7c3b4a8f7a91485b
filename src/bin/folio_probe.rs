// Terminal view of the two computed widgets: degree progress and the webring neighbors.
// Handy for checking a members list or a new TIMELINE before shipping the site.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod probe {
    use anyhow::{Context, Result, anyhow};
    use clap::Parser;
    use devfolio::{
        HttpPeerFeed, PeerFeed, PeerRecord, ProgressBar, StaticPeerFeed, TimelineWindow, WEBRING,
        domain::{MatchMethod, find_self, normalize_url, resolve},
        utils::{TimeUtils, now_utc},
    };
    use std::path::PathBuf;
    use tabled::{Table, Tabled, settings::Style};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Print degree progress and webring neighbors", long_about = None)]
    struct Args {
        /// Hostname to look up in the ring
        #[arg(long, default_value = WEBRING.default_host)]
        host: String,

        /// Read the member list from a local JSON file instead of the live endpoint
        #[arg(long)]
        feed_file: Option<PathBuf>,

        /// Evaluate progress at this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        now: Option<String>,
    }

    #[derive(Tabled)]
    struct PeerRow {
        #[tabled(rename = "#")]
        index: usize,
        name: String,
        url: String,
        #[tabled(rename = "")]
        marker: &'static str,
    }

    fn peer_rows(peers: &[PeerRecord], host: &str) -> Vec<PeerRow> {
        let me = find_self(peers, host);
        let n = peers.len();
        peers
            .iter()
            .enumerate()
            .map(|(i, peer)| {
                let marker = match me {
                    Some(m) if m.index == i && m.method == MatchMethod::Hostname => "◀ this site",
                    Some(m) if m.index == i => "◀ this site (heuristic)",
                    Some(m) if (m.index + n - 1) % n == i => "prev",
                    Some(m) if (m.index + 1) % n == i => "next",
                    _ => "",
                };
                PeerRow {
                    index: i,
                    name: peer.display_name().to_string(),
                    url: peer
                        .candidate_url()
                        .map(normalize_url)
                        .unwrap_or_else(|| "-".to_string()),
                    marker,
                }
            })
            .collect()
    }

    pub async fn run() -> Result<()> {
        let args = Args::parse();

        let window = TimelineWindow::configured().context("Invalid TIMELINE configuration")?;
        let now = match &args.now {
            Some(text) => TimeUtils::parse_utc_date(text)
                .ok_or_else(|| anyhow!("--now must be YYYY-MM-DD, got '{}'", text))?,
            None => now_utc(),
        };
        let snapshot = window.compute(now);
        println!(
            "Degree Progress {} {}",
            ProgressBar::default().render(snapshot.percentage),
            snapshot.summary()
        );

        let feed: Box<dyn PeerFeed> = match &args.feed_file {
            Some(path) => Box::new(StaticPeerFeed::File(path.clone())),
            None => Box::new(HttpPeerFeed::new(WEBRING.members_url)),
        };

        // Unlike the site, the probe reports feed failures instead of hiding them
        match feed.fetch_peers().await {
            Ok(peers) => {
                println!("{}", Table::new(peer_rows(&peers, &args.host)).with(Style::rounded()));
                let links = resolve(&peers, &args.host);
                println!("prev: {}", links.previous_url);
                println!("next: {}", links.next_url);
            }
            Err(e) => {
                log::warn!("Feed unavailable: {:#}", e);
                let links = devfolio::NeighborResult::placeholders(&args.host);
                println!("feed unavailable ({:#}); placeholder links:", e);
                println!("prev: {}", links.previous_url);
                println!("next: {}", links.next_url);
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    probe::run().await
}
