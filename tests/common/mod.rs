#![allow(dead_code)]

use std::collections::HashMap;
use std::process::{Command, Output};
use std::sync::Mutex;

use postdeck::{Comment, Gateway, Post, PostId, PostdeckError, Result, User};
use tempfile::TempDir;
use tokio::sync::oneshot;

/// Path of the built `postdeck` binary
pub fn postdeck_binary() -> String {
    let binary_path = if cfg!(debug_assertions) {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/postdeck")
    } else {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/release/postdeck")
    };

    if std::path::Path::new(binary_path).exists() {
        binary_path.to_string()
    } else {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/postdeck").to_string()
    }
}

/// Runs postdeck commands against an isolated config file
pub struct PostdeckTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl PostdeckTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        PostdeckTest {
            temp_dir,
            binary_path: postdeck_binary(),
        }
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("POSTDECK_CONFIG", self.config_path())
            .env_remove("POSTDECK_BASE_URL")
            .env_remove("POSTDECK_LOG")
            .output()
            .expect("Failed to execute postdeck command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Posts 1..=count; authors alternate between users 1 and 2
pub fn make_posts(count: u64) -> Vec<Post> {
    (1..=count)
        .map(|id| Post {
            id,
            user_id: if id % 2 == 0 { 2 } else { 1 },
            title: format!("post title {id}"),
            body: format!("body of post {id}"),
        })
        .collect()
}

pub fn make_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
        },
        User {
            id: 2,
            name: "Ervin Howell".to_string(),
            username: "Antonette".to_string(),
            email: "Shanna@melissa.tv".to_string(),
        },
    ]
}

/// `per_post` comments on each of the given posts
pub fn make_comments(post_ids: &[PostId], per_post: u64) -> Vec<Comment> {
    let mut next_id = 0;
    post_ids
        .iter()
        .flat_map(|&post_id| {
            (0..per_post)
                .map(|n| {
                    next_id += 1;
                    Comment {
                        id: next_id,
                        post_id,
                        name: format!("comment {n}"),
                        email: "commenter@example.com".to_string(),
                        body: format!("comment {n} on post {post_id}"),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

// ============================================================================
// Gateway doubles
// ============================================================================

/// In-memory gateway whose `get_post` calls can be held open per post id
///
/// A gated post blocks until the sender returned by [`GatedGateway::gate`]
/// fires, so tests decide the order in which detail retrievals finish.
pub struct GatedGateway {
    posts: Vec<Post>,
    users: Vec<User>,
    comments: Vec<Comment>,
    fail_comments: bool,
    gates: Mutex<HashMap<PostId, oneshot::Receiver<()>>>,
}

impl GatedGateway {
    pub fn new(posts: Vec<Post>, users: Vec<User>, comments: Vec<Comment>) -> Self {
        Self {
            posts,
            users,
            comments,
            fail_comments: false,
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Make every comment retrieval fail
    pub fn failing_comments(mut self) -> Self {
        self.fail_comments = true;
        self
    }

    /// Hold `get_post(post_id)` until the returned sender fires
    pub fn gate(&self, post_id: PostId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .expect("gate lock poisoned")
            .insert(post_id, rx);
        tx
    }

    fn comments_error() -> PostdeckError {
        PostdeckError::Status {
            url: "http://test/comments".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[async_trait::async_trait]
impl Gateway for GatedGateway {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        if self.fail_comments {
            return Err(Self::comments_error());
        }
        Ok(self.comments.clone())
    }

    async fn get_post(&self, id: PostId) -> Result<Post> {
        let gate = self.gates.lock().expect("gate lock poisoned").remove(&id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(PostdeckError::PostNotFound(id))
    }

    async fn list_comments_for_post(&self, id: PostId) -> Result<Vec<Comment>> {
        if self.fail_comments {
            return Err(Self::comments_error());
        }
        Ok(self
            .comments
            .iter()
            .filter(|comment| comment.post_id == id)
            .cloned()
            .collect())
    }
}
