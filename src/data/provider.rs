use {
    crate::domain::PeerRecord,
    anyhow::{Context, Result, bail},
    async_trait::async_trait,
    serde_json::Value,
    std::path::PathBuf,
};

/// Source of the webring member list.
// reqwest futures aren't Send in the browser
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PeerFeed {
    async fn fetch_peers(&self) -> Result<Vec<PeerRecord>>;
}

/// Accept only a non-empty JSON array. Order is kept, it defines the ring.
pub fn parse_peer_list(body: Value) -> Result<Vec<PeerRecord>> {
    let Value::Array(items) = body else {
        bail!("peer feed is not a JSON array");
    };
    if items.is_empty() {
        bail!("peer feed is an empty array");
    }
    Ok(items.iter().map(PeerRecord::from_value).collect())
}

/// Single GET against the members endpoint. No retry, no custom timeout.
pub struct HttpPeerFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpPeerFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PeerFeed for HttpPeerFeed {
    async fn fetch_peers(&self) -> Result<Vec<PeerRecord>> {
        let body: Value = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("GET {}", self.url))?
            .error_for_status()
            .context("peer feed returned an error status")?
            .json()
            .await
            .context("peer feed body is not JSON")?;
        parse_peer_list(body)
    }
}

/// Member list from memory or a local JSON file.
pub enum StaticPeerFeed {
    Records(Vec<PeerRecord>),
    File(PathBuf),
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PeerFeed for StaticPeerFeed {
    async fn fetch_peers(&self) -> Result<Vec<PeerRecord>> {
        match self {
            Self::Records(records) => {
                if records.is_empty() {
                    bail!("static peer list is empty");
                }
                Ok(records.clone())
            }
            Self::File(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let body: Value = serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                parse_peer_list(body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_neighbors;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Serve a single canned HTTP response on a local port, return the members URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/members.json", addr)
    }

    #[test]
    fn test_parse_peer_list_rejects_non_array() {
        assert!(parse_peer_list(json!({ "members": [] })).is_err());
        assert!(parse_peer_list(json!("nope")).is_err());
        assert!(parse_peer_list(Value::Null).is_err());
    }

    #[test]
    fn test_parse_peer_list_rejects_empty() {
        assert!(parse_peer_list(json!([])).is_err());
    }

    #[test]
    fn test_parse_peer_list_keeps_slots_for_junk() {
        let peers = parse_peer_list(json!([
            { "name": "a", "url": "https://a.dev" },
            17,
            { "name": "c", "site": "https://c.dev" },
        ]))
        .unwrap();
        assert_eq!(peers.len(), 3);
        assert_eq!(peers[1].candidate_url(), None);
        assert_eq!(peers[2].candidate_url(), Some("https://c.dev"));
    }

    #[tokio::test]
    async fn test_static_file_feed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"x","website":"https://x.com"}},{{"name":"y","website":"https://y.com"}}]"#
        )
        .unwrap();
        file.flush().unwrap();

        let feed = StaticPeerFeed::File(file.path().to_path_buf());
        let peers = feed.fetch_peers().await.unwrap();
        assert_eq!(peers.len(), 2);
        assert_eq!(peers[0].name.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_static_file_feed_missing_or_malformed() {
        let missing = StaticPeerFeed::File(PathBuf::from("/nonexistent/members.json"));
        assert!(missing.fetch_peers().await.is_err());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        file.flush().unwrap();
        let broken = StaticPeerFeed::File(file.path().to_path_buf());
        assert!(broken.fetch_peers().await.is_err());
    }

    #[tokio::test]
    async fn test_http_feed_error_status() {
        let url = serve_once("500 Internal Server Error", "oops").await;
        let err = HttpPeerFeed::new(url).fetch_peers().await.unwrap_err();
        assert!(format!("{:#}", err).contains("error status"), "{:#}", err);
    }

    #[tokio::test]
    async fn test_http_feed_resolves_neighbors() {
        let url = serve_once(
            "200 OK",
            r#"[{"name":"x","website":"https://x.com"},{"name":"y","website":"https://y.com"},{"name":"z","website":"https://z.com"}]"#,
        )
        .await;
        let result = load_neighbors(&HttpPeerFeed::new(url), "y.com").await.unwrap();
        assert_eq!(result.previous_url, "https://x.com");
        assert_eq!(result.next_url, "https://z.com");
    }

    #[tokio::test]
    async fn test_http_feed_non_json_body_keeps_defaults() {
        let url = serve_once("200 OK", "<html><body>members</body></html>").await;
        let feed = HttpPeerFeed::new(url);
        assert!(feed.fetch_peers().await.is_err());

        let url = serve_once("200 OK", "<html><body>members</body></html>").await;
        assert_eq!(load_neighbors(&HttpPeerFeed::new(url), "y.com").await, None);
    }

    #[tokio::test]
    async fn test_static_records_empty_is_error() {
        assert!(StaticPeerFeed::Records(vec![]).fetch_peers().await.is_err());
    }
}
