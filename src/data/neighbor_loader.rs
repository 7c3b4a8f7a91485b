// Best-effort webring enhancement: whatever happens here, the page keeps working.

use {
    crate::{
        config::WEBRING,
        data::{HttpPeerFeed, PeerFeed},
        domain::{NeighborResult, resolve},
    },
    std::sync::mpsc::Sender,
};

#[cfg(debug_assertions)]
use crate::{config::DF, domain::find_self};

/// Fetch the ring and resolve `host`'s neighbors.
/// `None` means "keep the links you already have": feed errors are logged, never returned.
pub async fn load_neighbors<F>(feed: &F, host: &str) -> Option<NeighborResult>
where
    F: PeerFeed + ?Sized,
{
    let peers = match feed.fetch_peers().await {
        Ok(peers) => peers,
        Err(e) => {
            log::warn!("Webring feed unavailable, keeping default links: {:#}", e);
            return None;
        }
    };

    #[cfg(debug_assertions)]
    if DF.log_webring {
        match find_self(&peers, host) {
            Some(found) => log::info!(
                "Webring: '{}' found at index {} of {} via {:?}",
                host,
                found.index,
                peers.len(),
                found.method
            ),
            None => log::info!(
                "Webring: '{}' not in {} members, using placeholder links",
                host,
                peers.len()
            ),
        }
    }

    Some(resolve(&peers, host))
}

/// Fire the one-shot fetch in the background. The result arrives on `tx`;
/// if the receiver is gone by then (widget torn down) the send fails and the result is dropped.
pub fn spawn_neighbor_fetch(host: String, tx: Sender<NeighborResult>) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create runtime for webring fetch: {}", e);
                    return;
                }
            };
            rt.block_on(async move {
                let feed = HttpPeerFeed::new(WEBRING.members_url);
                if let Some(result) = load_neighbors(&feed, &host).await {
                    let _ = tx.send(result);
                }
            });
        });
    }

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            let feed = HttpPeerFeed::new(WEBRING.members_url);
            if let Some(result) = load_neighbors(&feed, &host).await {
                let _ = tx.send(result);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticPeerFeed;
    use crate::domain::PeerRecord;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;

    struct DownFeed;

    #[async_trait]
    impl PeerFeed for DownFeed {
        async fn fetch_peers(&self) -> Result<Vec<PeerRecord>> {
            Err(anyhow!("connection refused"))
        }
    }

    fn ring() -> StaticPeerFeed {
        StaticPeerFeed::Records(vec![
            PeerRecord::new(Some("x"), "website", "https://x.com"),
            PeerRecord::new(Some("y"), "website", "https://y.com"),
            PeerRecord::new(Some("z"), "website", "https://z.com"),
        ])
    }

    #[tokio::test]
    async fn test_failed_feed_keeps_defaults() {
        assert_eq!(load_neighbors(&DownFeed, "y.com").await, None);
    }

    #[tokio::test]
    async fn test_empty_feed_keeps_defaults() {
        let feed = StaticPeerFeed::Records(vec![]);
        assert_eq!(load_neighbors(&feed, "y.com").await, None);
    }

    #[tokio::test]
    async fn test_loaded_neighbors() {
        let result = load_neighbors(&ring(), "www.y.com").await.unwrap();
        assert_eq!(result.previous_url, "https://x.com");
        assert_eq!(result.next_url, "https://z.com");
    }

    #[tokio::test]
    async fn test_unknown_host_still_resolves_to_placeholders() {
        let result = load_neighbors(&ring(), "elsewhere.org").await.unwrap();
        assert_eq!(result, NeighborResult::placeholders("elsewhere.org"));
    }
}
