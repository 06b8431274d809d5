// src/github/fetch.rs
// =============================================================================
// This module loads the portfolio's raw data from the GitHub REST API.
//
// Strategy:
// - Fire two requests at the same time: the user's profile and the user's
//   repositories (most recently updated first, one page)
// - Wait for BOTH to settle; one failing never cancels the other
// - A failed half is replaced by its safe default (no profile / empty list)
//   and logged. Nothing is retried and no error reaches the caller
// - The "ready" signal is held back until a minimum delay has passed, so the
//   loading screen never just flashes
//
// Rust concepts:
// - futures::join: Await two futures concurrently on one task
// - thiserror: Typed error enums with Display generated for us
// - tokio::sync::watch: A single-value channel for broadcasting state changes
// =============================================================================

use futures::future;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::models::{profile_from_json, repositories_from_json, Profile, Repository};
use crate::config::FeedConfig;

// Why a single request to one of the two endpoints did not produce JSON.
//
// These never escape this module: they are logged and turned into defaults.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, connection reset, DNS failure, ...
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// GitHub answered, but not with 2xx (404 user, 403 rate limit, 5xx, ...)
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
    /// 2xx response whose body is not valid JSON
    #[error("response from {url} is not valid JSON: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Where a load currently stands.
///
/// `Idle` until `load` is called, `Pending` while requests (or the UX floor)
/// are outstanding, `Ready` once both halves settled. Partial failure still
/// ends in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Pending,
    Ready,
}

/// Normalized result of a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioData {
    /// None when the profile request failed or returned garbage
    pub profile: Option<Profile>,
    /// Always a list; empty when the repositories request failed
    pub repositories: Vec<Repository>,
}

// Creates an HTTP client with the headers GitHub expects.
//
// No request timeout: the only time bound in a load is the ready delay,
// and it never cuts a request short.
pub fn build_client() -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("portfolio-feed/", env!("CARGO_PKG_VERSION"))),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

    Client::builder().default_headers(headers).build()
}

/// Runs one load and publishes its progress.
///
/// One loader does one load: `load` consumes it. Subscribe before calling
/// `load` to observe the Pending -> Ready transition.
pub struct PortfolioLoader {
    client: Client,
    config: FeedConfig,
    state: watch::Sender<LoadState>,
}

impl PortfolioLoader {
    pub fn new(client: Client, config: FeedConfig) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self { client, config, state }
    }

    /// A receiver that sees every state this loader moves through.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Fetches profile and repositories, then signals `Ready` no earlier
    /// than `config.ready_delay` after starting.
    pub async fn load(self) -> PortfolioData {
        // send_replace never fails, even when nobody is subscribed
        self.state.send_replace(LoadState::Pending);
        info!(username = %self.config.username, "loading portfolio");

        let (data, ()) = tokio::join!(
            fetch_portfolio(&self.client, &self.config),
            tokio::time::sleep(self.config.ready_delay),
        );

        info!(
            has_profile = data.profile.is_some(),
            repositories = data.repositories.len(),
            "portfolio ready"
        );
        self.state.send_replace(LoadState::Ready);
        data
    }
}

// Fetches both halves concurrently and absorbs each half's failure.
//
// No ready delay here; PortfolioLoader::load adds that on top.
pub async fn fetch_portfolio(client: &Client, config: &FeedConfig) -> PortfolioData {
    let (profile, repositories) =
        future::join(fetch_profile(client, config), fetch_repositories(client, config)).await;

    PortfolioData { profile, repositories }
}

// GET /users/{username}
async fn fetch_profile(client: &Client, config: &FeedConfig) -> Option<Profile> {
    match fetch_json(client, &config.profile_url(), &[]).await {
        Ok(body) => profile_from_json(body),
        Err(e) => {
            warn!(error = %e, "could not fetch profile, continuing without it");
            None
        }
    }
}

// GET /users/{username}/repos?sort=updated&per_page=N
async fn fetch_repositories(client: &Client, config: &FeedConfig) -> Vec<Repository> {
    let per_page = config.per_page.to_string();
    let query = [("sort", "updated"), ("per_page", per_page.as_str())];

    match fetch_json(client, &config.repos_url(), &query).await {
        Ok(body) => repositories_from_json(body),
        Err(e) => {
            warn!(error = %e, "could not fetch repositories, continuing with none");
            Vec::new()
        }
    }
}

// Sends one GET and parses the body as untyped JSON.
//
// Shape checks happen later (models.rs); here we only care that we got a
// successful response containing JSON of any kind.
async fn fetch_json(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
    debug!(url, "GET");

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: url.to_string(), status });
    }

    response
        .json::<Value>()
        .await
        .map_err(|source| FetchError::Body { url: url.to_string(), source })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why future::join instead of awaiting one request after the other?
//    - join polls both futures at once, so both requests are in flight together
//    - It only finishes when BOTH are done, and since our helpers never
//      return Err, one failure can't short-circuit the other
//    - (try_join would stop at the first error - exactly what we don't want)
//
// 2. Why watch instead of a plain bool?
//    - The caller may want to react the moment loading finishes
//    - watch keeps only the latest value, which is all a state flag needs
//
// 3. Why tokio::join! with a sleep?
//    - The sleep and the fetch run side by side
//    - If the network is fast we still wait for the sleep; if it is slow the
//      sleep has long finished. Either way ready = max(fetch, delay)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::{Duration, Instant};
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, ready_delay: Duration) -> FeedConfig {
        FeedConfig {
            username: "octocat".to_string(),
            api_base: Url::parse(&server.uri()).unwrap(),
            per_page: 30,
            ready_delay,
        }
    }

    async fn mount_profile(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    async fn mount_repos(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("sort", "updated"))
            .and(query_param("per_page", "30"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_both_requests_succeed() {
        let server = MockServer::start().await;
        mount_profile(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({
                "login": "octocat",
                "name": "The Octocat",
                "avatar_url": "https://example.com/a.png",
                "public_repos": 8
            })),
        )
        .await;
        mount_repos(
            &server,
            ResponseTemplate::new(200).set_body_json(json!([
                { "name": "newest", "language": "Rust", "stargazers_count": 5 },
                { "name": "older", "language": null }
            ])),
        )
        .await;

        let client = build_client().unwrap();
        let data = fetch_portfolio(&client, &config_for(&server, Duration::ZERO)).await;

        let profile = data.profile.unwrap();
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.public_repos, Some(8));
        assert_eq!(data.repositories.len(), 2);
        assert_eq!(data.repositories[0].name, "newest");
        assert_eq!(data.repositories[0].stargazers_count, 5);
        assert_eq!(data.repositories[1].language, None);
    }

    #[tokio::test]
    async fn test_profile_failure_keeps_repositories() {
        let server = MockServer::start().await;
        mount_profile(&server, ResponseTemplate::new(500)).await;
        mount_repos(
            &server,
            ResponseTemplate::new(200).set_body_json(json!([{ "name": "X", "language": "Go" }])),
        )
        .await;

        let client = build_client().unwrap();
        let data = fetch_portfolio(&client, &config_for(&server, Duration::ZERO)).await;

        assert_eq!(data.profile, None);
        assert_eq!(
            data.repositories,
            vec![Repository {
                name: "X".to_string(),
                language: Some("Go".to_string()),
                ..Repository::default()
            }]
        );
    }

    #[tokio::test]
    async fn test_both_failures_yield_empty_data() {
        let server = MockServer::start().await;
        mount_profile(&server, ResponseTemplate::new(404)).await;
        mount_repos(&server, ResponseTemplate::new(503)).await;

        let client = build_client().unwrap();
        let data = fetch_portfolio(&client, &config_for(&server, Duration::ZERO)).await;

        assert_eq!(data, PortfolioData::default());
    }

    #[tokio::test]
    async fn test_unreachable_server_yields_empty_data() {
        // Nothing listens on port 9 (discard) in the test environment
        let config = FeedConfig {
            api_base: Url::parse("http://127.0.0.1:9").unwrap(),
            ready_delay: Duration::ZERO,
            ..FeedConfig::default()
        };

        let client = build_client().unwrap();
        let data = fetch_portfolio(&client, &config).await;

        assert_eq!(data, PortfolioData::default());
    }

    #[tokio::test]
    async fn test_repositories_object_coerces_to_empty() {
        let server = MockServer::start().await;
        mount_profile(&server, ResponseTemplate::new(200).set_body_json(json!({ "login": "octocat" })))
            .await;
        mount_repos(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Not what you expected" })),
        )
        .await;

        let client = build_client().unwrap();
        let data = fetch_portfolio(&client, &config_for(&server, Duration::ZERO)).await;

        assert!(data.profile.is_some());
        assert!(data.repositories.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_absorbed() {
        let server = MockServer::start().await;
        mount_profile(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
        mount_repos(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

        let client = build_client().unwrap();
        let data = fetch_portfolio(&client, &config_for(&server, Duration::ZERO)).await;

        assert_eq!(data, PortfolioData::default());
    }

    #[tokio::test]
    async fn test_load_waits_for_ready_delay_and_signals_ready() {
        let server = MockServer::start().await;
        mount_profile(&server, ResponseTemplate::new(200).set_body_json(json!({ "login": "octocat" })))
            .await;
        mount_repos(&server, ResponseTemplate::new(200).set_body_json(json!([]))).await;

        let delay = Duration::from_millis(300);
        let loader = PortfolioLoader::new(build_client().unwrap(), config_for(&server, delay));
        let state = loader.subscribe();
        assert_eq!(*state.borrow(), LoadState::Idle);

        let started = Instant::now();
        let data = loader.load().await;

        assert!(started.elapsed() >= delay);
        assert_eq!(*state.borrow(), LoadState::Ready);
        assert!(data.profile.is_some());
        assert!(data.repositories.is_empty());
    }

    #[tokio::test]
    async fn test_load_reports_pending_while_in_flight() {
        let server = MockServer::start().await;
        mount_profile(&server, ResponseTemplate::new(500)).await;
        mount_repos(&server, ResponseTemplate::new(500)).await;

        let loader = PortfolioLoader::new(
            build_client().unwrap(),
            config_for(&server, Duration::from_millis(200)),
        );
        let mut state = loader.subscribe();
        let handle = tokio::spawn(loader.load());

        state.changed().await.unwrap();
        assert_eq!(*state.borrow_and_update(), LoadState::Pending);

        let data = handle.await.unwrap();
        assert_eq!(*state.borrow(), LoadState::Ready);
        assert_eq!(data, PortfolioData::default());
    }
}
