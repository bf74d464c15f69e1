//! Render pipeline: view state + data store -> list view.
//!
//! Each render runs the same fixed sequence over the loaded store:
//!
//! 1. take the raw page slice
//! 2. apply the search filter
//! 3. drop hidden authors (when hide-by-user is on)
//! 4. stable sort by descending comment count (when sort-by-comments is on)
//! 5. build one [`PostSummary`] per surviving post
//!
//! Pagination runs on the unfiltered collection, so a filtered page may hold
//! fewer than `page_size` posts. The view state is never mutated in place;
//! every handler returns a new value.

use postdeck_model::{Post, PostId, UserId};
use serde::Serialize;

use crate::config::Config;
use crate::paginate;
use crate::search::{self, SearchMode};
use crate::store::{DataStore, LoadState};

/// Shown in place of the list when a page has no matching posts
pub const EMPTY_MESSAGE: &str = "No posts found";

/// Shown while the initial load is in flight
pub const LOADING_MESSAGE: &str = "Loading posts...";

/// User-controlled inputs to the render pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// 1-indexed page number
    pub current_page: usize,
    /// Committed (debounced) query text
    pub search_query: String,
    pub search_mode: SearchMode,
    pub highlight_long_posts: bool,
    pub hide_by_user: bool,
    pub sort_by_comments: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            search_query: String::new(),
            search_mode: SearchMode::default(),
            highlight_long_posts: false,
            hide_by_user: false,
            sort_by_comments: false,
        }
    }
}

impl ViewState {
    pub fn with_mode(mode: SearchMode) -> Self {
        Self {
            search_mode: mode,
            ..Self::default()
        }
    }

    /// Commit a query. The current page is kept.
    pub fn set_query(self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..self
        }
    }

    pub fn set_mode(self, mode: SearchMode) -> Self {
        Self {
            search_mode: mode,
            ..self
        }
    }

    pub fn cycle_mode(self) -> Self {
        let mode = self.search_mode.next();
        self.set_mode(mode)
    }

    pub fn toggle_long_posts(self) -> Self {
        Self {
            highlight_long_posts: !self.highlight_long_posts,
            ..self
        }
    }

    pub fn toggle_hide_by_user(self) -> Self {
        Self {
            hide_by_user: !self.hide_by_user,
            ..self
        }
    }

    pub fn toggle_sort_by_comments(self) -> Self {
        Self {
            sort_by_comments: !self.sort_by_comments,
            ..self
        }
    }

    /// Advance one page. Not clamped: past the end renders the empty state.
    pub fn next_page(self) -> Self {
        Self {
            current_page: self.current_page.saturating_add(1),
            ..self
        }
    }

    /// Go back one page, stopping at page 1
    pub fn prev_page(self) -> Self {
        Self {
            current_page: self.current_page.saturating_sub(1).max(1),
            ..self
        }
    }
}

/// Interactions that change the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetQuery(String),
    SetMode(SearchMode),
    CycleMode,
    ToggleLongPosts,
    ToggleHideByUser,
    ToggleSortByComments,
    NextPage,
    PrevPage,
}

/// Apply a view action, returning the new view state
pub fn reduce_view_state(state: ViewState, action: ViewAction) -> ViewState {
    match action {
        ViewAction::SetQuery(query) => state.set_query(query),
        ViewAction::SetMode(mode) => state.set_mode(mode),
        ViewAction::CycleMode => state.cycle_mode(),
        ViewAction::ToggleLongPosts => state.toggle_long_posts(),
        ViewAction::ToggleHideByUser => state.toggle_hide_by_user(),
        ViewAction::ToggleSortByComments => state.toggle_sort_by_comments(),
        ViewAction::NextPage => state.next_page(),
        ViewAction::PrevPage => state.prev_page(),
    }
}

/// Session-fixed render parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub page_size: usize,
    pub long_post_threshold: usize,
    pub preview_chars: usize,
    pub hidden_user_ids: Vec<UserId>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            page_size: config.page_size,
            long_post_threshold: config.long_post_threshold,
            preview_chars: config.preview_chars,
            hidden_user_ids: config.hidden_user_ids.clone(),
        }
    }
}

/// One post as shown in the list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub preview: String,
    /// Set only while long-post highlighting is on
    pub is_long: bool,
    pub author: Option<String>,
    pub comment_count: usize,
    /// Title character indices matched by a fuzzy query
    #[serde(skip)]
    pub title_indices: Vec<usize>,
}

/// What the list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Failed(String),
    Empty { page: usize },
    Posts { page: usize, items: Vec<PostSummary> },
}

impl ListView {
    /// Status line text, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ListView::Loading => Some(LOADING_MESSAGE),
            ListView::Failed(message) => Some(message),
            ListView::Empty { .. } => Some(EMPTY_MESSAGE),
            ListView::Posts { .. } => None,
        }
    }

    pub fn items(&self) -> &[PostSummary] {
        match self {
            ListView::Posts { items, .. } => items,
            _ => &[],
        }
    }
}

/// Render the list for the given view and load state
pub fn render_list(view: &ViewState, load: &LoadState, options: &RenderOptions) -> ListView {
    match load {
        LoadState::Idle | LoadState::Loading => ListView::Loading,
        LoadState::Failed(message) => ListView::Failed(message.clone()),
        LoadState::Ready(store) => render_page(view, store, options),
    }
}

/// Run the pipeline against a loaded store
pub fn render_page(view: &ViewState, store: &DataStore, options: &RenderOptions) -> ListView {
    let users = store.users();

    let mut visible: Vec<&Post> =
        paginate::page(store.posts(), view.current_page, options.page_size)
            .iter()
            .filter(|post| search::matches(post, &view.search_query, view.search_mode, users))
            .filter(|post| !view.hide_by_user || !options.hidden_user_ids.contains(&post.user_id))
            .collect();

    if view.sort_by_comments {
        // sort_by_key is stable
        visible.sort_by_key(|post| std::cmp::Reverse(store.comment_count(post.id)));
    }

    if visible.is_empty() {
        return ListView::Empty {
            page: view.current_page,
        };
    }

    let items = visible
        .into_iter()
        .map(|post| summarize(post, view, store, options))
        .collect();

    ListView::Posts {
        page: view.current_page,
        items,
    }
}

fn summarize(
    post: &Post,
    view: &ViewState,
    store: &DataStore,
    options: &RenderOptions,
) -> PostSummary {
    PostSummary {
        id: post.id,
        title: post.title.clone(),
        preview: preview(&post.body, options.preview_chars),
        is_long: view.highlight_long_posts && post.body_len() > options.long_post_threshold,
        author: store.users().name_of(post.user_id).map(str::to_string),
        comment_count: store.comment_count(post.id),
        title_indices: search::title_highlights(&post.title, &view.search_query, view.search_mode),
    }
}

/// First `max_chars` characters of `body`, with an ellipsis when cut
pub fn preview(body: &str, max_chars: usize) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Label shown next to the pager
pub fn page_label(page: usize) -> String {
    format!("Page {page}")
}
