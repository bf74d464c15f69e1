//! Wire types for the postdeck resources.
//!
//! These mirror the JSON returned by the posts API (`/posts`, `/users`,
//! `/comments`). They are kept in their own crate so the data model compiles
//! independently of the terminal UI.

use serde::{Deserialize, Serialize};

/// Identifier of a post
pub type PostId = u64;

/// Identifier of a user (post author)
pub type UserId = u64;

/// Identifier of a comment
pub type CommentId = u64;

/// A content item with an author reference, title, and body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    /// Foreign key into the users collection
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// A post author
///
/// The API returns a full profile (address, company, ...). Only the fields the
/// browser shows are decoded; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// A comment attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    /// Foreign key into the posts collection
    pub post_id: PostId,
    /// Comment subject line
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub body: String,
}

impl Post {
    /// Body length in characters (not bytes)
    pub fn body_len(&self) -> usize {
        self.body.chars().count()
    }
}
