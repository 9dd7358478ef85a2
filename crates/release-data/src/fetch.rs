//! Paginated release fetching.
//!
//! [`fetch_all`] walks pages `1, 2, 3, …` of a [`ReleasePageSource`] until a
//! page comes back empty.  The walk is best effort: the first failing page
//! ends it, and whatever was collected up to that point is still returned.

use async_trait::async_trait;
use release_core::error::{Result, StatsError};
use release_core::models::RawRelease;
use release_core::settings::FetchConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("release-stats/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

// ── ReleasePageSource ─────────────────────────────────────────────────────────

/// Anything that can serve one page of the releases list.
#[async_trait]
pub trait ReleasePageSource: Send + Sync {
    /// Fetch 1-based page `page` holding at most `per_page` releases.
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<RawRelease>>;
}

// ── PaginationOutcome ─────────────────────────────────────────────────────────

/// Result of a full pagination walk.
#[derive(Debug, Default)]
pub struct PaginationOutcome {
    /// Releases from every successful page, in page order.
    pub releases: Vec<RawRelease>,
    /// Number of page requests issued, including the terminating one.
    pub requests: u32,
    /// Error that cut the walk short, if any.
    pub interrupted_by: Option<StatsError>,
}

impl PaginationOutcome {
    /// `true` when the walk ended on an empty page rather than an error.
    pub fn is_complete(&self) -> bool {
        self.interrupted_by.is_none()
    }
}

/// Fetch every page from `source` until an empty page or the first failure.
///
/// Never returns an error: a failing request is logged and ends pagination,
/// and the releases gathered so far are handed back in the outcome.
pub async fn fetch_all<S>(source: &S, per_page: u32) -> PaginationOutcome
where
    S: ReleasePageSource + ?Sized,
{
    let mut outcome = PaginationOutcome::default();
    let mut page: u32 = 1;

    loop {
        outcome.requests += 1;
        match source.fetch_page(page, per_page).await {
            Ok(items) if items.is_empty() => {
                debug!(page, "empty page, pagination finished");
                break;
            }
            Ok(items) => {
                debug!(page, count = items.len(), "fetched release page");
                outcome.releases.extend(items);
                page += 1;
            }
            Err(e) => {
                warn!(
                    page,
                    fetched = outcome.releases.len(),
                    error = %e,
                    "release page request failed; continuing with partial data"
                );
                outcome.interrupted_by = Some(e);
                break;
            }
        }
    }

    info!(
        releases = outcome.releases.len(),
        requests = outcome.requests,
        complete = outcome.is_complete(),
        "release fetch finished"
    );
    outcome
}

// ── GithubClient ──────────────────────────────────────────────────────────────

/// [`ReleasePageSource`] backed by the GitHub REST API.
pub struct GithubClient {
    releases_url: String,
    http_client: reqwest::Client,
}

impl GithubClient {
    /// Build a client for `config.project`, authenticating with
    /// `config.token` as a bearer credential.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| StatsError::Config("token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            releases_url: config.releases_url(),
            http_client,
        })
    }

    /// Endpoint this client pages through.
    pub fn releases_url(&self) -> &str {
        &self.releases_url
    }
}

#[async_trait]
impl ReleasePageSource for GithubClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<RawRelease>> {
        let response = self
            .http_client
            .get(&self.releases_url)
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response.json::<Vec<RawRelease>>().await?)
    }
}

/// Fetch every release of `config.project` from the GitHub API.
///
/// Only client construction can fail; request failures are absorbed by
/// [`fetch_all`].
pub async fn fetch_releases(config: &FetchConfig) -> Result<PaginationOutcome> {
    let client = GithubClient::new(config)?;
    info!(
        url = client.releases_url(),
        per_page = config.page_size,
        "fetching releases"
    );
    Ok(fetch_all(&client, config.page_size).await)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serves scripted pages and records every request.
    struct ScriptedSource {
        pages: Vec<std::result::Result<usize, u16>>,
        calls: Mutex<Vec<(u32, u32)>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<std::result::Result<usize, u16>>) -> Self {
            Self {
                pages,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(u32, u32)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReleasePageSource for ScriptedSource {
        async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<RawRelease>> {
            self.calls.lock().unwrap().push((page, per_page));
            match self.pages.get(page as usize - 1) {
                Some(Ok(count)) => Ok((0..*count)
                    .map(|i| RawRelease {
                        id: u64::from(page) * 1000 + i as u64,
                        ..Default::default()
                    })
                    .collect()),
                Some(Err(status)) => Err(StatsError::Status {
                    status: *status,
                    url: format!("scripted://page/{}", page),
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    #[tokio::test]
    async fn test_stops_on_empty_page() {
        let source = ScriptedSource::new(vec![Ok(100), Ok(100), Ok(37), Ok(0)]);
        let outcome = fetch_all(&source, 100).await;

        assert_eq!(outcome.requests, 4);
        assert_eq!(outcome.releases.len(), 237);
        assert!(outcome.is_complete());
        assert_eq!(
            source.calls(),
            vec![(1, 100), (2, 100), (3, 100), (4, 100)]
        );
    }

    #[tokio::test]
    async fn test_page_order_preserved() {
        let source = ScriptedSource::new(vec![Ok(2), Ok(1)]);
        let outcome = fetch_all(&source, 2).await;
        let ids: Vec<u64> = outcome.releases.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1000, 1001, 2000]);
        assert_eq!(outcome.requests, 3);
    }

    #[tokio::test]
    async fn test_first_page_empty() {
        let source = ScriptedSource::new(vec![Ok(0)]);
        let outcome = fetch_all(&source, 30).await;
        assert!(outcome.releases.is_empty());
        assert_eq!(outcome.requests, 1);
        assert!(outcome.is_complete());
    }

    #[tokio::test]
    async fn test_failure_keeps_partial_results() {
        let source = ScriptedSource::new(vec![Ok(100), Ok(100), Err(502), Ok(5)]);
        let outcome = fetch_all(&source, 100).await;

        assert_eq!(outcome.releases.len(), 200);
        assert_eq!(outcome.requests, 3);
        assert!(!outcome.is_complete());
        assert!(matches!(
            outcome.interrupted_by,
            Some(StatsError::Status { status: 502, .. })
        ));
        // No retry and no skipping past the failed page.
        assert_eq!(source.calls().last(), Some(&(3, 100)));
    }

    #[tokio::test]
    async fn test_failure_on_first_page_yields_empty() {
        let source = ScriptedSource::new(vec![Err(401)]);
        let outcome = fetch_all(&source, 100).await;
        assert!(outcome.releases.is_empty());
        assert_eq!(outcome.requests, 1);
        assert!(outcome.interrupted_by.is_some());
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let source: Box<dyn ReleasePageSource> =
            Box::new(ScriptedSource::new(vec![Ok(3), Ok(0)]));
        let outcome = fetch_all(source.as_ref(), 10).await;
        assert_eq!(outcome.releases.len(), 3);
    }

    #[test]
    fn test_client_rejects_token_with_newline() {
        let config = FetchConfig {
            project: "o/r".to_string(),
            token: "bad\ntoken".to_string(),
            page_size: 10,
            api_url: "http://127.0.0.1:9".to_string(),
        };
        assert!(matches!(
            GithubClient::new(&config),
            Err(StatsError::Config(_))
        ));
    }

    #[test]
    fn test_client_targets_project_releases() {
        let config = FetchConfig::new("octo/widgets", "tok", 10, "https://ghe.example/api/v3/")
            .unwrap();
        let client = GithubClient::new(&config).unwrap();
        assert_eq!(
            client.releases_url(),
            "https://ghe.example/api/v3/repos/octo/widgets/releases"
        );
    }
}
