//! Detail loader for a single post.
//!
//! Opening a post issues two retrievals concurrently (the post by id and its
//! comments). Each open hands out a [`SelectionTicket`]; a result is applied
//! only if its ticket still names the current selection, so a slow response
//! for an earlier post can never replace a newer one.

use postdeck_model::{Comment, Post, PostId};

use crate::error::{PostdeckError, Result};
use crate::gateway::Gateway;
use crate::store::UserIndex;

/// Author label when the post's user is not in the store
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Shown while the detail retrievals are in flight
pub const LOADING_MESSAGE: &str = "Loading...";

/// Tag carried by every detail retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionTicket {
    pub seq: u64,
    pub post_id: PostId,
}

/// A post with everything the overlay shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    pub author: Option<String>,
    /// In retrieval order
    pub comments: Vec<Comment>,
}

impl PostDetail {
    pub fn author_label(&self) -> &str {
        self.author.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }
}

/// Overlay lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Closed,
    Loading {
        ticket: SelectionTicket,
    },
    Loaded {
        ticket: SelectionTicket,
        detail: PostDetail,
    },
    Failed {
        ticket: SelectionTicket,
        message: String,
    },
}

impl DetailState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DetailState::Closed)
    }

    pub fn ticket(&self) -> Option<SelectionTicket> {
        match self {
            DetailState::Closed => None,
            DetailState::Loading { ticket }
            | DetailState::Loaded { ticket, .. }
            | DetailState::Failed { ticket, .. } => Some(*ticket),
        }
    }

    pub fn post_id(&self) -> Option<PostId> {
        self.ticket().map(|t| t.post_id)
    }
}

/// Tracks the current selection and filters out stale results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailLoader {
    next_seq: u64,
    state: DetailState,
}

impl DetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Select a post. Restarts at loading from any state.
    pub fn open(&mut self, post_id: PostId) -> SelectionTicket {
        self.next_seq += 1;
        let ticket = SelectionTicket {
            seq: self.next_seq,
            post_id,
        };
        self.state = DetailState::Loading { ticket };
        ticket
    }

    /// Whether `ticket` still names the current selection
    pub fn is_current(&self, ticket: SelectionTicket) -> bool {
        matches!(self.state, DetailState::Loading { ticket: current } if current == ticket)
    }

    /// Apply a finished retrieval. Returns false when the result was stale.
    pub fn resolve(&mut self, ticket: SelectionTicket, result: Result<PostDetail>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                post_id = ticket.post_id,
                seq = ticket.seq,
                "discarding stale detail result"
            );
            return false;
        }

        self.state = match result {
            Ok(detail) => DetailState::Loaded { ticket, detail },
            Err(e) => {
                tracing::warn!(post_id = ticket.post_id, "{e}");
                DetailState::Failed {
                    ticket,
                    message: e.user_message(),
                }
            }
        };
        true
    }

    /// Close the overlay. Any in-flight result becomes stale.
    pub fn dismiss(&mut self) {
        self.state = DetailState::Closed;
    }
}

/// Retrieve a post and its comments concurrently
///
/// The author is resolved from the already-loaded users; a missing author is
/// not an error.
pub async fn fetch_detail(
    gateway: &dyn Gateway,
    post_id: PostId,
    users: &UserIndex,
) -> Result<PostDetail> {
    tracing::debug!(post_id, "loading post detail");

    let (post, comments) = futures::future::try_join(
        gateway.get_post(post_id),
        gateway.list_comments_for_post(post_id),
    )
    .await
    .map_err(|e| PostdeckError::DetailFailed {
        post_id,
        source: Box::new(e),
    })?;

    let author = users.name_of(post.user_id).map(str::to_string);
    tracing::debug!(post_id, comments = comments.len(), "post detail loaded");

    Ok(PostDetail {
        post,
        author,
        comments,
    })
}

/// Message shown in the overlay for `state`, if it is not showing a detail
pub fn status_message(state: &DetailState) -> Option<&str> {
    match state {
        DetailState::Loading { .. } => Some(LOADING_MESSAGE),
        DetailState::Failed { message, .. } => Some(message),
        _ => None,
    }
}
