// src/config.rs
// =============================================================================
// Runtime settings for loading the portfolio feed.
//
// Everything here comes from command-line flags (see cli.rs). There is no
// config file: a portfolio belongs to exactly one GitHub user and the
// defaults below describe that user.
//
// Rust concepts:
// - Default trait: A canonical "empty" value for a type
// - Duration: Type-safe time spans instead of raw milliseconds
// =============================================================================

use std::time::Duration;
use url::Url;

/// GitHub account whose profile and repositories make up the portfolio.
pub const DEFAULT_USERNAME: &str = "noor4964";

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// How many repositories to request (GitHub's `per_page`).
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Minimum time between starting a load and signalling that it is ready.
pub const DEFAULT_READY_DELAY: Duration = Duration::from_millis(2000);

/// Settings for one portfolio load.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// GitHub username to fetch
    pub username: String,
    /// API root, e.g. https://api.github.com (tests point this at a mock server)
    pub api_base: Url,
    /// Page size for the repositories request
    pub per_page: u32,
    /// UX floor: "ready" is never signalled sooner than this
    pub ready_delay: Duration,
}

impl FeedConfig {
    // URL of the profile endpoint: {base}/users/{username}
    pub fn profile_url(&self) -> String {
        format!("{}/users/{}", self.base(), self.username)
    }

    // URL of the repositories endpoint: {base}/users/{username}/repos
    // (query parameters are added by the fetcher)
    pub fn repos_url(&self) -> String {
        format!("{}/users/{}/repos", self.base(), self.username)
    }

    fn base(&self) -> &str {
        self.api_base.as_str().trim_end_matches('/')
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            // The constant is a valid URL, so parsing cannot fail
            api_base: Url::parse(DEFAULT_API_BASE).unwrap(),
            per_page: DEFAULT_PER_PAGE,
            ready_delay: DEFAULT_READY_DELAY,
        }
    }
}
