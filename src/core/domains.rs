use serde::Deserialize;
use url::Url;

/// Official domains a result URL must belong to
pub const ALLOWED_DOMAINS: &[&str] = &[
    "gov.in",
    "kerala.gov.in",
    "scholarships.gov.in",
    "mygov.in",
    "india.gov.in",
    "cdc.kerala.gov.in",
    "dcescholarship.kerala.gov.in",
];

/// How a result URL is tested against the allow-list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainMatch {
    /// The URL contains an allowed entry anywhere (case-sensitive)
    #[default]
    Substring,
    /// The URL's host is an allowed entry or a subdomain of one
    HostSuffix,
}

/// Allow-list filter applied to every search result
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainFilter {
    mode: DomainMatch,
}

impl DomainFilter {
    pub fn new(mode: DomainMatch) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DomainMatch {
        self.mode
    }

    /// Check whether a result URL points at an allowed domain
    #[inline]
    pub fn allows(&self, url: &str) -> bool {
        match self.mode {
            DomainMatch::Substring => ALLOWED_DOMAINS.iter().any(|domain| url.contains(domain)),
            DomainMatch::HostSuffix => matches_host_suffix(url),
        }
    }
}

fn matches_host_suffix(url: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    let host = match parsed.host_str() {
        Some(host) => host.to_ascii_lowercase(),
        None => return false,
    };

    ALLOWED_DOMAINS.iter().any(|domain| {
        host == *domain
            || host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}
