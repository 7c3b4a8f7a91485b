//! Webring endpoints and matching rules

pub struct WebringConfig {
    /// JSON array of member sites, fetched once per page load
    pub members_url: &'static str,
    /// Landing page of the ring. Also the base of the placeholder prev/next links.
    pub hub_url: &'static str,
    /// Fields probed (in order) for a member's URL. First non-empty string wins.
    pub url_fields: &'static [&'static str],
    /// Lowercase token identifying this site's own entry when hostnames don't line up (dev builds, previews)
    pub owner_token: &'static str,
    /// Host used natively when `--host` isn't given
    pub default_host: &'static str,
}

pub const WEBRING: WebringConfig = WebringConfig {
    members_url: "https://webring.example.com/members.json",
    hub_url: "https://webring.example.com",
    url_fields: &["website", "url", "site", "href", "link", "domain"],
    owner_token: "devansh",
    default_host: "localhost",
};

/// Generic "previous member" link for `host`, used whenever a real neighbor can't be resolved.
pub fn placeholder_prev_url(host: &str) -> String {
    format!("{}/#{}?nav=prev", WEBRING.hub_url, host)
}

/// Generic "next member" link for `host`.
pub fn placeholder_next_url(host: &str) -> String {
    format!("{}/#{}?nav=next", WEBRING.hub_url, host)
}
