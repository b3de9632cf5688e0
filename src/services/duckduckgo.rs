use crate::config::SearchSettings;
use crate::models::RawSearchResult;
use crate::services::provider::{ProviderError, SearchProvider, SearchSession};
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// HTML-only DuckDuckGo endpoint, no JavaScript required
pub const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// DuckDuckGo search provider
///
/// Scrapes the HTML results page. Each session owns its own HTTP client and
/// cookie store, so nothing is shared between aggregation runs.
#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    endpoint: String,
    timeout: Duration,
    region: Option<String>,
    safe_search: bool,
    user_agent: String,
}

impl DuckDuckGoProvider {
    /// Create a provider against the given endpoint
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self {
            endpoint,
            timeout,
            region: None,
            safe_search: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            region: settings.region.clone(),
            safe_search: settings.safe_search,
            user_agent: settings
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchProvider for DuckDuckGoProvider {
    type Session = DuckDuckGoSession;

    fn open_session(&self) -> Result<DuckDuckGoSession, ProviderError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?;

        tracing::debug!("Opened DuckDuckGo session against {}", self.endpoint);

        Ok(DuckDuckGoSession {
            client,
            endpoint: self.endpoint.clone(),
            region: self.region.clone(),
            safe_search: self.safe_search,
            queries_run: 0,
        })
    }
}

/// One DuckDuckGo session; closed when dropped
pub struct DuckDuckGoSession {
    client: Client,
    endpoint: String,
    region: Option<String>,
    safe_search: bool,
    queries_run: usize,
}

impl SearchSession for DuckDuckGoSession {
    async fn text(
        &mut self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RawSearchResult>, ProviderError> {
        let mut params = vec![("q", query)];
        if let Some(region) = self.region.as_deref() {
            params.push(("kl", region));
        }
        if self.safe_search {
            params.push(("kp", "1"));
        }

        tracing::debug!("DuckDuckGo search: {}", query);

        let response = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?;

        self.queries_run += 1;

        let status = response.status();

        // DuckDuckGo answers 202 with a challenge page when it throttles a client
        if status == StatusCode::ACCEPTED || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited(status.to_string()));
        }

        if !status.is_success() {
            return Err(ProviderError::ApiError(format!(
                "DuckDuckGo search failed: {}",
                status
            )));
        }

        let html = response.text().await?;

        parse_results(&html, max_results)
    }
}

impl Drop for DuckDuckGoSession {
    fn drop(&mut self) {
        tracing::debug!("Closed DuckDuckGo session after {} queries", self.queries_run);
    }
}

/// Parse a DuckDuckGo HTML results page
///
/// Ads are skipped. Rows whose link is missing or unparseable keep an empty
/// `href` and are left for the caller to discard.
pub fn parse_results(html: &str, max_results: usize) -> Result<Vec<RawSearchResult>, ProviderError> {
    let document = Html::parse_document(html);

    let result_sel = selector(".result:not(.result--ad), .web-result:not(.result--ad)")?;
    let title_sel = selector(".result__a")?;
    let snippet_sel = selector(".result__snippet")?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        if results.len() >= max_results {
            break;
        }

        let link = match element.select(&title_sel).next() {
            Some(link) => link,
            None => continue,
        };

        let title = link.text().collect::<String>().trim().to_string();
        let href = link
            .value()
            .attr("href")
            .and_then(unwrap_redirect)
            .unwrap_or_default();
        let body = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(RawSearchResult { title, href, body });
    }

    tracing::trace!("Parsed {} DuckDuckGo results", results.len());

    Ok(results)
}

fn selector(css: &str) -> Result<Selector, ProviderError> {
    Selector::parse(css)
        .map_err(|e| ProviderError::InvalidResponse(format!("invalid selector {}: {:?}", css, e)))
}

/// Resolve DuckDuckGo's `//duckduckgo.com/l/?uddg=<target>` redirect links
fn unwrap_redirect(href: &str) -> Option<String> {
    let full = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&full).ok()?;

    let is_redirect = parsed
        .host_str()
        .is_some_and(|host| host == "duckduckgo.com" || host.ends_with(".duckduckgo.com"))
        && parsed.path().starts_with("/l/");

    if is_redirect {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
    } else {
        Some(full)
    }
}
