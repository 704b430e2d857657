//! Minimal GraphQL client over a blocking HTTP transport.

use serde::Deserialize;
use serde_json::{json, Value};

use stats_core::error::{Result, StatsError};

// ── QueryRunner ───────────────────────────────────────────────────────────────

/// Seam between the fetcher and the transport.
///
/// The fetcher only ever needs "send this query document with these
/// variables, give me the `data` object back"; tests substitute a scripted
/// runner for the real HTTP client.
pub trait QueryRunner {
    /// Execute one GraphQL query and return its `data` payload.
    ///
    /// Any non-success HTTP status or GraphQL-level error is fatal for the
    /// whole run: no retry is attempted and no partial result is returned.
    fn run_query(&self, query: &str, variables: Option<Value>) -> Result<Value>;
}

// ── Response envelope ─────────────────────────────────────────────────────────

/// Top-level GraphQL response shape: `data` and/or `errors`.
#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    data: Option<Value>,
    errors: Option<Vec<QueryErrorItem>>,
}

#[derive(Debug, Deserialize)]
struct QueryErrorItem {
    message: String,
}

// ── GithubClient ──────────────────────────────────────────────────────────────

/// Blocking HTTP client for the GitHub GraphQL endpoint.
pub struct GithubClient {
    http: reqwest::blocking::Client,
    url: String,
    token: String,
}

impl GithubClient {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("profile-stats/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(anyhow::Error::from)?;

        Ok(Self {
            http,
            url: url.into(),
            token: token.into(),
        })
    }
}

impl QueryRunner for GithubClient {
    fn run_query(&self, query: &str, variables: Option<Value>) -> Result<Value> {
        let body = json!({ "query": query, "variables": variables });

        tracing::debug!(url = %self.url, "sending GraphQL query");
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .map_err(anyhow::Error::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::QueryStatus(status.as_u16()));
        }

        let envelope: QueryEnvelope = response.json().map_err(anyhow::Error::from)?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let joined = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(StatsError::QueryErrors(joined));
            }
        }

        envelope.data.ok_or(StatsError::EmptyPayload)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
