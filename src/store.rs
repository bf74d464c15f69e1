//! In-memory data store for the three remote collections.
//!
//! The store is built in one step from the results of all three retrievals, so
//! a partially loaded store is unrepresentable. Lookup indexes (author by id,
//! comment count by post) are computed once at load time.

use std::collections::HashMap;
use std::sync::Arc;

use postdeck_model::{Comment, Post, PostId, User, UserId};

use crate::error::{LOAD_FAILURE_MESSAGE, PostdeckError, Result};
use crate::gateway::Gateway;

/// Read-only author lookup by user id
#[derive(Debug, Clone, Default)]
pub struct UserIndex {
    by_id: HashMap<UserId, User>,
}

impl UserIndex {
    pub fn new(users: &[User]) -> Self {
        Self {
            by_id: users.iter().map(|u| (u.id, u.clone())).collect(),
        }
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.by_id.get(&id)
    }

    /// Display name of the author, if known
    pub fn name_of(&self, id: UserId) -> Option<&str> {
        self.by_id.get(&id).map(|u| u.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// The three collections, loaded together
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    users: UserIndex,
    comment_counts: HashMap<PostId, usize>,
}

impl DataStore {
    /// Build a store from fully retrieved collections
    pub fn new(posts: Vec<Post>, users: Vec<User>, comments: Vec<Comment>) -> Self {
        let mut comment_counts: HashMap<PostId, usize> = HashMap::new();
        for comment in &comments {
            *comment_counts.entry(comment.post_id).or_default() += 1;
        }

        Self {
            posts,
            users: UserIndex::new(&users),
            comments,
            comment_counts,
        }
    }

    /// Retrieve posts, users, and comments concurrently.
    ///
    /// Succeeds only when all three retrievals succeed; any failure is
    /// reported as [`PostdeckError::LoadFailed`] and nothing is kept.
    pub async fn load(gateway: &dyn Gateway) -> Result<Self> {
        tracing::debug!("loading posts, users, and comments");

        let result = futures::future::try_join3(
            gateway.list_posts(),
            gateway.list_users(),
            gateway.list_comments(),
        )
        .await;

        match result {
            Ok((posts, users, comments)) => {
                tracing::info!(
                    posts = posts.len(),
                    users = users.len(),
                    comments = comments.len(),
                    "initial load complete"
                );
                Ok(Self::new(posts, users, comments))
            }
            Err(e) => {
                tracing::warn!("{LOAD_FAILURE_MESSAGE}: {e}");
                Err(PostdeckError::LoadFailed(Box::new(e)))
            }
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn users(&self) -> &UserIndex {
        &self.users
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Number of comments whose `post_id` is `id`
    pub fn comment_count(&self, id: PostId) -> usize {
        self.comment_counts.get(&id).copied().unwrap_or(0)
    }
}

/// Lifecycle of the data store as seen by the browser
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Initial load (or reload) in flight
    Loading,
    /// All three collections available
    Ready(Arc<DataStore>),
    /// The last load failed; carries the user-facing message
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The store, only when fully loaded
    pub fn store(&self) -> Option<&Arc<DataStore>> {
        match self {
            LoadState::Ready(store) => Some(store),
            _ => None,
        }
    }

    /// Fold a finished load into the state
    pub fn finish(result: Result<DataStore>) -> Self {
        match result {
            Ok(store) => LoadState::Ready(Arc::new(store)),
            Err(e) => LoadState::Failed(e.user_message()),
        }
    }
}
