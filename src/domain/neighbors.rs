use {
    crate::{
        config::{WEBRING, placeholder_next_url, placeholder_prev_url},
        domain::PeerRecord,
    },
    url::Url,
};

/// Previous/next links for the webring widget. Never empty: placeholders stand in for anything unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborResult {
    pub previous_url: String,
    pub next_url: String,
}

impl NeighborResult {
    /// The ring's generic prev/next endpoints for `host`.
    pub fn placeholders(host: &str) -> Self {
        let host = host.trim();
        Self {
            previous_url: placeholder_prev_url(host),
            next_url: placeholder_next_url(host),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    /// Candidate URL's hostname equals the current host
    Hostname,
    /// Substring / owner-token guess. Keeps dev and preview hosts working; can pick the wrong entry.
    Heuristic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfMatch {
    pub index: usize,
    pub method: MatchMethod,
}

/// Absolute URLs come back in canonical form, otherwise the raw text is kept as an opaque token.
/// Trailing slashes are stripped either way.
pub fn normalize_url(raw: &str) -> String {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(parsed) => parsed.as_str().trim_end_matches('/').to_string(),
        Err(_) => raw.trim_end_matches('/').to_string(),
    }
}

/// Lowercased, with one leading `www.` removed.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

/// Hostname of an already-normalized candidate. Opaque tokens have none.
fn candidate_host(normalized: &str) -> Option<String> {
    Url::parse(normalized)
        .ok()
        .and_then(|u| u.host_str().map(normalize_host))
}

/// Locate this site in the ring: exact hostname first, then the heuristic.
pub fn find_self(peers: &[PeerRecord], current_host: &str) -> Option<SelfMatch> {
    let host = normalize_host(current_host);
    let normalized: Vec<Option<String>> = peers
        .iter()
        .map(|p| p.candidate_url().map(normalize_url))
        .collect();

    let by_host = normalized.iter().position(|candidate| {
        candidate
            .as_deref()
            .and_then(candidate_host)
            .is_some_and(|h| !host.is_empty() && h == host)
    });
    if let Some(index) = by_host {
        return Some(SelfMatch {
            index,
            method: MatchMethod::Hostname,
        });
    }

    let token = WEBRING.owner_token.to_lowercase();
    peers
        .iter()
        .zip(&normalized)
        .position(|(peer, candidate)| {
            let candidate = candidate.as_deref().unwrap_or_default().to_lowercase();
            let name = peer.name.as_deref().unwrap_or_default().to_lowercase();
            (!host.is_empty() && candidate.contains(&host))
                || (!token.is_empty() && (name.contains(&token) || candidate.contains(&token)))
        })
        .map(|index| SelfMatch {
            index,
            method: MatchMethod::Heuristic,
        })
}

/// Neighbors of `current_host` in the circular `peers` list.
pub fn resolve(peers: &[PeerRecord], current_host: &str) -> NeighborResult {
    let fallback = NeighborResult::placeholders(current_host);
    let Some(found) = find_self(peers, current_host) else {
        return fallback;
    };

    let n = peers.len();
    let prev = &peers[(found.index + n - 1) % n];
    let next = &peers[(found.index + 1) % n];
    NeighborResult {
        previous_url: prev
            .candidate_url()
            .map(normalize_url)
            .unwrap_or(fallback.previous_url),
        next_url: next
            .candidate_url()
            .map(normalize_url)
            .unwrap_or(fallback.next_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ring(urls: &[&str]) -> Vec<PeerRecord> {
        urls.iter()
            .map(|u| PeerRecord::new(None, "website", u))
            .collect()
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("https://X.com/"), "https://x.com");
        assert_eq!(normalize_url("https://x.com/blog/"), "https://x.com/blog");
        assert_eq!(normalize_url("x.com/"), "x.com");
        assert_eq!(normalize_url(" not a url// "), "not a url");
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("www.Y.com"), "y.com");
        assert_eq!(normalize_host("y.com"), "y.com");
        assert_eq!(normalize_host("www.www.y.com"), "www.y.com");
    }

    #[test]
    fn test_resolve_middle() {
        let peers = ring(&["https://x.com", "https://y.com/", "https://z.com"]);
        let result = resolve(&peers, "y.com");
        assert_eq!(result.previous_url, "https://x.com");
        assert_eq!(result.next_url, "https://z.com");
    }

    #[test]
    fn test_resolve_wraps_around() {
        let peers = ring(&["https://x.com", "https://y.com", "https://z.com"]);
        let first = resolve(&peers, "x.com");
        assert_eq!(first.previous_url, "https://z.com");
        assert_eq!(first.next_url, "https://y.com");
        let last = resolve(&peers, "www.z.com");
        assert_eq!(last.previous_url, "https://y.com");
        assert_eq!(last.next_url, "https://x.com");
    }

    #[test]
    fn test_resolve_www_on_peer_side() {
        let peers = ring(&["https://a.com", "https://www.me.dev", "https://c.com"]);
        let found = find_self(&peers, "me.dev").unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.method, MatchMethod::Hostname);
    }

    #[test]
    fn test_single_member_ring_points_at_itself() {
        let peers = ring(&["https://solo.dev"]);
        let result = resolve(&peers, "solo.dev");
        assert_eq!(result.previous_url, "https://solo.dev");
        assert_eq!(result.next_url, "https://solo.dev");
    }

    #[test]
    fn test_no_match_gives_placeholders() {
        let peers = ring(&["https://x.com", "https://z.com"]);
        let result = resolve(&peers, "y.com");
        assert_eq!(result, NeighborResult::placeholders("y.com"));
        assert_eq!(result.previous_url, placeholder_prev_url("y.com"));
        assert_eq!(result.next_url, placeholder_next_url("y.com"));
    }

    #[test]
    fn test_empty_list_gives_placeholders() {
        assert_eq!(resolve(&[], "y.com"), NeighborResult::placeholders("y.com"));
    }

    #[test]
    fn test_heuristic_substring_on_opaque_token() {
        // Bare domain doesn't parse as a URL, so only the substring fallback can find it.
        let peers = vec![
            PeerRecord::new(None, "domain", "a.com"),
            PeerRecord::new(None, "domain", "y.com/"),
            PeerRecord::new(None, "domain", "c.com"),
        ];
        let found = find_self(&peers, "y.com").unwrap();
        assert_eq!(found.method, MatchMethod::Heuristic);
        let result = resolve(&peers, "y.com");
        assert_eq!(result.previous_url, "a.com");
        assert_eq!(result.next_url, "c.com");
    }

    #[test]
    fn test_heuristic_owner_token_on_localhost() {
        let peers = vec![
            PeerRecord::new(Some("Ann"), "url", "https://ann.dev"),
            PeerRecord::new(Some("Devansh Jain"), "url", "https://portfolio.example"),
            PeerRecord::new(Some("Cy"), "url", "https://cy.dev"),
        ];
        let found = find_self(&peers, "localhost").unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.method, MatchMethod::Heuristic);
        assert_eq!(resolve(&peers, "localhost").next_url, "https://cy.dev");
    }

    #[test]
    fn test_hostname_match_beats_earlier_heuristic_hit() {
        // Entry 0 contains "me.dev" as a substring; entry 1 is the exact host.
        let peers = ring(&["https://notme.dev", "https://me.dev", "https://z.dev"]);
        let found = find_self(&peers, "me.dev").unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.method, MatchMethod::Hostname);
    }

    #[test]
    fn test_neighbor_without_url_uses_placeholder() {
        let peers = vec![
            PeerRecord::from_value(&json!({ "name": "ghost" })),
            PeerRecord::new(None, "site", "https://me.dev"),
            PeerRecord::new(None, "site", "https://next.dev"),
        ];
        let result = resolve(&peers, "me.dev");
        assert_eq!(result.previous_url, placeholder_prev_url("me.dev"));
        assert_eq!(result.next_url, "https://next.dev");
    }

    #[test]
    fn test_empty_host_never_substring_matches() {
        let peers = ring(&["https://x.com", "https://z.com"]);
        assert_eq!(find_self(&peers, ""), None);
    }

    #[test]
    fn test_resolve_is_idempotent_and_leaves_input_alone() {
        let peers = ring(&["https://x.com", "https://y.com", "https://z.com"]);
        let before = peers.clone();
        let first = resolve(&peers, "y.com");
        let second = resolve(&peers, "y.com");
        assert_eq!(first, second);
        assert_eq!(peers, before);
    }
}
