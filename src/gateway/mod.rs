//! Remote data gateway.
//!
//! The browser consumes five read-only retrievals. [`HttpGateway`] implements
//! them against a JSON REST endpoint; tests substitute in-memory gateways.

pub mod http;

use std::sync::Arc;

use postdeck_model::{Comment, Post, PostId, User};

use crate::error::Result;

pub use http::HttpGateway;

/// Read-only access to the posts API
///
/// Every operation is idempotent and either returns the whole parsed
/// collection or fails; there are no partial results.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<User>>;

    /// `GET /comments`
    async fn list_comments(&self) -> Result<Vec<Comment>>;

    /// `GET /posts/{id}`
    async fn get_post(&self, id: PostId) -> Result<Post>;

    /// `GET /comments?postId={id}`
    async fn list_comments_for_post(&self, id: PostId) -> Result<Vec<Comment>>;
}

/// Gateway handle shared between the UI and its async handlers
pub type SharedGateway = Arc<dyn Gateway>;
