use postdeck_model::PostId;
use thiserror::Error;

/// Status message shown when the initial three-way load fails
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load data";

/// Message shown inside the detail overlay when a drill-down fails
pub const DETAIL_FAILURE_MESSAGE: &str = "Failed to load post";

#[derive(Error, Debug)]
pub enum PostdeckError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("Failed to load data: {0}")]
    LoadFailed(Box<PostdeckError>),

    #[error("Failed to load post {post_id}: {source}")]
    DetailFailed {
        post_id: PostId,
        #[source]
        source: Box<PostdeckError>,
    },

    #[error("post {0} not found")]
    PostNotFound(PostId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl PostdeckError {
    /// The message a user sees for this error in the browser.
    ///
    /// Load and detail failures collapse to their fixed status messages; the
    /// underlying cause goes to the log instead.
    pub fn user_message(&self) -> String {
        match self {
            PostdeckError::LoadFailed(_) => LOAD_FAILURE_MESSAGE.to_string(),
            PostdeckError::DetailFailed { .. } => DETAIL_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PostdeckError>;
