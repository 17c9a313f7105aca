//! GitHub star badge.
//!
//! The header shows the repository's star count. The fetch is strictly
//! best-effort: issued once at startup, no retry, no timeout beyond the
//! client default, and a failure leaves the configured placeholder in
//! place. Nothing else depends on it.

use futures::future::BoxFuture;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

// =============================================================================
// Errors
// =============================================================================

/// Star fetch errors. Logged, never surfaced.
#[derive(Debug, Error)]
pub enum StarsError {
    /// Transport or decode failure.
    #[error("request failed: {0}")]
    Http(String),

    /// Non-success HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),
}

// =============================================================================
// Star Source
// =============================================================================

/// Repository metadata we care about from the GitHub API.
#[derive(Debug, Deserialize)]
struct RepoInfo {
    stargazers_count: u64,
}

/// Source of repository star counts.
///
/// Returns futures so the caller decides how to spawn them; this keeps the
/// badge testable with canned sources.
pub trait StarSource: Send + Sync {
    /// Fetch the star count for "owner/name".
    fn fetch(&self, repo: &str) -> BoxFuture<'static, Result<u64, StarsError>>;
}

/// Real source reading `https://api.github.com/repos/{repo}`.
pub struct GithubStars {
    client: reqwest::Client,
}

impl GithubStars {
    /// Build a client. The GitHub API rejects requests without a
    /// User-Agent, so one is always set.
    pub fn new() -> Result<Self, StarsError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("glint/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StarsError::Http(e.to_string()))?;
        Ok(Self { client })
    }
}

impl StarSource for GithubStars {
    fn fetch(&self, repo: &str) -> BoxFuture<'static, Result<u64, StarsError>> {
        let client = self.client.clone();
        let url = format!("https://api.github.com/repos/{}", repo);

        Box::pin(async move {
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| StarsError::Http(e.to_string()))?;

            if !response.status().is_success() {
                return Err(StarsError::Status(response.status().as_u16()));
            }

            let info: RepoInfo = response
                .json()
                .await
                .map_err(|e| StarsError::Http(e.to_string()))?;
            Ok(info.stargazers_count)
        })
    }
}

// =============================================================================
// Star Badge
// =============================================================================

/// Best-effort star-count display value.
///
/// Starts at the placeholder; a successful fetch overwrites it, a failed
/// fetch leaves it alone. Subscribe for reactive display updates.
pub struct StarBadge {
    value_tx: watch::Sender<String>,
    /// Kept alive so the channel survives with no outside subscribers.
    _value_rx: watch::Receiver<String>,
}

impl StarBadge {
    /// Create a badge showing `placeholder` until a fetch succeeds.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let (value_tx, value_rx) = watch::channel(placeholder.into());
        Self {
            value_tx,
            _value_rx: value_rx,
        }
    }

    /// Subscribe to display-value changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.value_tx.subscribe()
    }

    /// Current display value.
    pub fn value(&self) -> String {
        self.value_tx.borrow().clone()
    }

    /// Issue the fetch once, fire-and-forget.
    pub fn spawn_fetch(&self, source: Arc<dyn StarSource>, repo: impl Into<String>) {
        let tx = self.value_tx.clone();
        let repo = repo.into();
        tokio::spawn(async move {
            fetch_into(source, &repo, &tx).await;
        });
    }
}

/// Run one fetch and store the result. Failures keep the current value.
async fn fetch_into(source: Arc<dyn StarSource>, repo: &str, tx: &watch::Sender<String>) {
    match source.fetch(repo).await {
        Ok(count) => {
            tracing::debug!("Star count for {}: {}", repo, count);
            tx.send_replace(count.to_string());
        }
        Err(e) => {
            tracing::debug!("Star fetch for {} failed: {} - keeping placeholder", repo, e);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
