//! HTTP gateway backed by `reqwest`.

use std::time::Duration;

use postdeck_model::{Comment, Post, PostId, User};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{PostdeckError, Result};

use super::Gateway;

/// Gateway for a JSONPlaceholder-compatible REST API
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Create a gateway from configuration
    ///
    /// A request timeout is applied only when `request_timeout_secs` is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, config.request_timeout())
    }

    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path against the base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|_| PostdeckError::InvalidUrl(format!("{}{}", self.base_url, path)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                PostdeckError::Timeout {
                    url: url.to_string(),
                }
            } else {
                PostdeckError::Http(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%url, "not found");
        }
        if !status.is_success() {
            return Err(PostdeckError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| PostdeckError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Parse the base URL, making sure it ends with a slash so that joining
/// `posts` keeps any path prefix (e.g. `https://host/api/` + `posts`).
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized).map_err(|_| PostdeckError::InvalidUrl(raw.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(PostdeckError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

#[async_trait::async_trait]
impl Gateway for HttpGateway {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.get_json(self.endpoint("posts")?).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.get_json(self.endpoint("users")?).await
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        self.get_json(self.endpoint("comments")?).await
    }

    async fn get_post(&self, id: PostId) -> Result<Post> {
        let url = self.endpoint(&format!("posts/{id}"))?;
        match self.get_json(url).await {
            Err(PostdeckError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                Err(PostdeckError::PostNotFound(id))
            }
            other => other,
        }
    }

    async fn list_comments_for_post(&self, id: PostId) -> Result<Vec<Comment>> {
        let mut url = self.endpoint("comments")?;
        url.query_pairs_mut().append_pair("postId", &id.to_string());
        self.get_json(url).await
    }
}
