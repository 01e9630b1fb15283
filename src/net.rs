// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network module: fetch and decode an article.
//!
//! ```text
//! ArticleFetcher::new()
//!   .url() .user_agent() .header()
//!        |
//!        v
//!   fetch()
//!     GET url  (User-Agent, redirects <= 10)
//!        |
//!        +-- non-2xx ----------> NetworkError::HttpError
//!        +-- transport error --> NetworkError::Reqwest
//!        v
//!     body bytes --> Article::from_json
//!        |
//!        +-- bad payload ------> DecodeError::Json
//!        v
//!     Article
//! ```

use reqwest::Client;
use reqwest::redirect::Policy;
use tracing::debug;

use crate::article::Article;
use crate::error::{DecodeError, NetworkError, WikiResult};

/// Random page summary on English Wikipedia.
pub const DEFAULT_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/random/summary";

/// Identifying client header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("randwiki/", env!("CARGO_PKG_VERSION"));

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: usize = 10;

/// Article fetcher with builder pattern.
///
/// # Example
/// ```no_run
/// use randwiki::net::ArticleFetcher;
///
/// # async fn run() -> randwiki::error::WikiResult<()> {
/// let article = ArticleFetcher::new()
///     .url("https://en.wikipedia.org/api/rest_v1/page/random/summary")
///     .fetch()
///     .await?;
/// println!("{}", article.title());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
    url: Option<String>,
    user_agent: String,
    headers: Vec<(String, String)>,
}

impl Default for ArticleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleFetcher {
    /// Create a fetcher with the default user agent and no URL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
        }
    }

    /// Set the endpoint URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a custom header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn client(&self) -> WikiResult<Client> {
        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(NetworkError::Reqwest)?;
        Ok(client)
    }

    /// Fetch the configured URL and decode it into an [`Article`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No URL is configured, or it is empty.
    /// - The request fails, exceeds the redirect limit, or the server answers
    ///   with a non-success status code.
    /// - The body is not JSON, or lacks `title` or `extract`.
    pub async fn fetch(&self) -> WikiResult<Article> {
        let url = self
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| NetworkError::InvalidUrl("no URL provided".to_string()))?;

        let mut request = self.client()?.get(url);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!(url, user_agent = %self.user_agent, "requesting article");

        let response = request.send().await.map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let final_url = response.url().to_string();
        if final_url != url {
            debug!(from = url, to = %final_url, "followed redirect");
        }

        let body = response.bytes().await.map_err(NetworkError::Reqwest)?;
        let article = Article::from_json(&body).map_err(|source| DecodeError::Json {
            url: final_url,
            source,
        })?;

        debug!(title = article.title(), "fetched article");
        Ok(article)
    }
}

/// Fetch `url` with the default user agent.
///
/// # Errors
///
/// See [`ArticleFetcher::fetch`].
pub async fn fetch_article(url: &str) -> WikiResult<Article> {
    ArticleFetcher::new().url(url).fetch().await
}
