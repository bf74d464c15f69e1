//! Browser model types for testable state management
//!
//! This module separates state (BrowserState) from view (BrowserViewModel)
//! enabling unit testing without the iocraft framework. Async work is never
//! performed here: the reducer returns a [`BrowserEffect`] describing what the
//! component should start.

use std::time::{Duration, Instant};

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::debounce::Debouncer;
use crate::detail::{DetailLoader, DetailState, PostDetail, SelectionTicket, status_message};
use crate::error::PostdeckError;
use crate::render::{ListView, PostSummary, RenderOptions, ViewState, page_label, render_list};
use crate::search::SearchMode;
use crate::store::LoadState;
use crate::tui::components::footer::{
    Shortcut, browser_shortcuts, detail_shortcuts, search_shortcuts,
};

// ============================================================================
// State Types
// ============================================================================

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct BrowserState {
    // Pipeline inputs
    /// Committed view state fed to the render pipeline
    pub view: ViewState,
    /// Initial load status and, once ready, the store
    pub load: LoadState,

    // Search
    /// Text currently in the query box (may be ahead of `view.search_query`)
    pub query_input: String,
    /// Pending query waiting out the quiet window
    pub debouncer: Debouncer<String>,
    /// Whether the query box is focused
    pub search_focused: bool,

    // Navigation
    /// Index of the selected post within the rendered page
    pub selected_index: usize,
    /// Scroll offset for the list
    pub scroll_offset: usize,
    /// Rows available to the list
    pub list_height: usize,

    // Overlay
    pub detail: DetailLoader,

    /// Whether the application should exit
    pub should_exit: bool,
}

impl BrowserState {
    pub fn new(mode: SearchMode, debounce: Duration) -> Self {
        Self {
            view: ViewState::with_mode(mode),
            load: LoadState::Idle,
            query_input: String::new(),
            debouncer: Debouncer::new(debounce),
            search_focused: false,
            selected_index: 0,
            scroll_offset: 0,
            list_height: 10,
            detail: DetailLoader::new(),
            should_exit: false,
        }
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(SearchMode::default(), Duration::from_millis(400))
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the browser
#[derive(Debug, Clone)]
pub enum BrowserAction {
    // Navigation
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,

    // Pipeline controls (re-render immediately)
    CycleMode,
    ToggleLongPosts,
    ToggleHideByUser,
    ToggleSortByComments,

    // Search
    FocusSearch,
    /// Leave the query box; a pending query still fires
    BlurSearch,
    /// Query box text changed at the given instant
    QueryInput { text: String, at: Instant },
    /// Commit the query box now and leave it
    SubmitQuery,
    /// Timer wake-up: commit the pending query if its window has passed
    Tick(Instant),

    // Detail overlay
    OpenSelected,
    CloseDetail,
    DetailFinished {
        ticket: SelectionTicket,
        outcome: Result<PostDetail, String>,
    },

    // Data
    Reload,
    LoadFinished(LoadState),

    /// Terminal resized; rows available to the list
    Resize(usize),

    Quit,
}

/// Async work the component must start after a reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEffect {
    /// Run the three-way initial load
    Load,
    /// Retrieve the post and comments for this selection
    FetchDetail(SelectionTicket),
    /// Wake the reducer with [`BrowserAction::Tick`] at this instant
    WakeAt(Instant),
}

// ============================================================================
// View Model Types
// ============================================================================

/// Everything the component needs to draw one frame
#[derive(Debug, Clone)]
pub struct BrowserViewModel {
    pub header: HeaderViewModel,
    pub search: SearchViewModel,
    pub list: ListViewModel,
    pub detail: Option<DetailViewModel>,
    pub shortcuts: Vec<Shortcut>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub page_label: String,
    pub mode_label: &'static str,
    pub highlight_long_posts: bool,
    pub hide_by_user: bool,
    pub sort_by_comments: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchViewModel {
    pub query: String,
    pub focused: bool,
    /// A typed query has not been applied yet
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// Rows currently scrolled into view
    pub items: Vec<PostSummary>,
    /// Total rows on this page after filtering
    pub total: usize,
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Replaces the list when set
    pub status: Option<ListStatus>,
}

/// What the list area shows instead of posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading(String),
    Failed(String),
    Empty(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailViewModel {
    Message { text: String, is_error: bool },
    Loaded(PostDetail),
}

/// Compute the view model from state (pure function)
pub fn compute_browser_view_model(
    state: &BrowserState,
    options: &RenderOptions,
) -> BrowserViewModel {
    let rendered = render_list(&state.view, &state.load, options);

    let status = match &rendered {
        ListView::Loading => Some(ListStatus::Loading(
            rendered.message().unwrap_or_default().to_string(),
        )),
        ListView::Failed(message) => Some(ListStatus::Failed(message.clone())),
        ListView::Empty { .. } => Some(ListStatus::Empty(
            rendered.message().unwrap_or_default().to_string(),
        )),
        ListView::Posts { .. } => None,
    };

    let all_items = rendered.items();
    let items = all_items
        .iter()
        .skip(state.scroll_offset)
        .take(state.list_height.max(1))
        .cloned()
        .collect();

    let detail = match state.detail.state() {
        DetailState::Closed => None,
        DetailState::Loaded { detail, .. } => Some(DetailViewModel::Loaded(detail.clone())),
        other => status_message(other).map(|text| DetailViewModel::Message {
            text: text.to_string(),
            is_error: matches!(other, DetailState::Failed { .. }),
        }),
    };

    let shortcuts = if detail.is_some() {
        detail_shortcuts()
    } else if state.search_focused {
        search_shortcuts()
    } else {
        browser_shortcuts()
    };

    BrowserViewModel {
        header: HeaderViewModel {
            page_label: page_label(state.view.current_page),
            mode_label: state.view.search_mode.label(),
            highlight_long_posts: state.view.highlight_long_posts,
            hide_by_user: state.view.hide_by_user,
            sort_by_comments: state.view.sort_by_comments,
        },
        search: SearchViewModel {
            query: state.query_input.clone(),
            focused: state.search_focused,
            pending: state.debouncer.is_pending(),
        },
        list: ListViewModel {
            items,
            total: all_items.len(),
            selected_index: state.selected_index,
            scroll_offset: state.scroll_offset,
            status,
        },
        detail,
        shortcuts,
    }
}

/// Split a title into (segment, is_match) runs for highlighting
pub fn highlight_segments(title: &str, indices: &[usize]) -> Vec<(String, bool)> {
    let mut segments: Vec<(String, bool)> = Vec::new();
    for (i, c) in title.chars().enumerate() {
        let matched = indices.contains(&i);
        match segments.last_mut() {
            Some((text, m)) if *m == matched => text.push(c),
            _ => segments.push((c.to_string(), matched)),
        }
    }
    segments
}

// ============================================================================
// Reducer
// ============================================================================

/// Pure state reducer
///
/// Takes the current state and an action, returning the new state and any
/// async work to start. View-state changes reset the list cursor to the top.
pub fn reduce_browser_state(
    mut state: BrowserState,
    action: BrowserAction,
    options: &RenderOptions,
) -> (BrowserState, Option<BrowserEffect>) {
    let mut effect = None;

    match action {
        BrowserAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, state.list_height);
        }
        BrowserAction::MoveDown => {
            let count = visible_count(&state, options);
            if count > 0 {
                state.selected_index = (state.selected_index + 1).min(count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, state.list_height);
            }
        }

        BrowserAction::NextPage => state = with_view(state, ViewState::next_page),
        BrowserAction::PrevPage => state = with_view(state, ViewState::prev_page),
        BrowserAction::CycleMode => state = with_view(state, ViewState::cycle_mode),
        BrowserAction::ToggleLongPosts => {
            // Markers only; the cursor stays put
            state.view = state.view.toggle_long_posts();
        }
        BrowserAction::ToggleHideByUser => state = with_view(state, ViewState::toggle_hide_by_user),
        BrowserAction::ToggleSortByComments => {
            state = with_view(state, ViewState::toggle_sort_by_comments)
        }

        BrowserAction::FocusSearch => state.search_focused = true,
        BrowserAction::BlurSearch => state.search_focused = false,
        BrowserAction::QueryInput { text, at } => {
            if text != state.query_input {
                state.query_input = text.clone();
                state.debouncer.schedule(text, at);
                effect = state.debouncer.deadline().map(BrowserEffect::WakeAt);
            }
        }
        BrowserAction::SubmitQuery => {
            state.search_focused = false;
            if let Some(query) = state.debouncer.flush() {
                state = commit_query(state, query);
            }
        }
        BrowserAction::Tick(now) => {
            if let Some(query) = state.debouncer.poll(now) {
                tracing::debug!(query = %query, "debounced query fired");
                state = commit_query(state, query);
            }
        }

        BrowserAction::OpenSelected => {
            let selected = render_list(&state.view, &state.load, options)
                .items()
                .get(state.selected_index)
                .map(|summary| summary.id);
            if let Some(post_id) = selected {
                let ticket = state.detail.open(post_id);
                effect = Some(BrowserEffect::FetchDetail(ticket));
            }
        }
        BrowserAction::CloseDetail => state.detail.dismiss(),
        BrowserAction::DetailFinished { ticket, outcome } => {
            state
                .detail
                .resolve(ticket, outcome.map_err(PostdeckError::Other));
        }

        BrowserAction::Reload => {
            // One load at a time
            if !state.load.is_loading() {
                state.load = LoadState::Loading;
                state.selected_index = 0;
                state.scroll_offset = 0;
                effect = Some(BrowserEffect::Load);
            }
        }
        BrowserAction::LoadFinished(load) => {
            state.load = load;
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        BrowserAction::Resize(rows) => {
            state.list_height = rows;
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, state.list_height);
        }

        BrowserAction::Quit => state.should_exit = true,
    }

    (state, effect)
}

fn with_view(mut state: BrowserState, handler: fn(ViewState) -> ViewState) -> BrowserState {
    state.view = handler(state.view);
    state.selected_index = 0;
    state.scroll_offset = 0;
    state
}

fn commit_query(mut state: BrowserState, query: String) -> BrowserState {
    state.view = state.view.set_query(query);
    state.selected_index = 0;
    state.scroll_offset = 0;
    state
}

fn visible_count(state: &BrowserState, options: &RenderOptions) -> usize {
    render_list(&state.view, &state.load, options).items().len()
}

/// Adjust scroll offset to keep selected item visible
///
/// Returns the new scroll offset that ensures the selected index is visible
/// within the list height.
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

// ============================================================================
// Key mapping
// ============================================================================

/// Convert a key event to a BrowserAction (pure function)
///
/// The overlay captures all input while open. While the query box is focused,
/// printable characters belong to the text input and map to nothing here.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &BrowserState,
) -> Option<BrowserAction> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(BrowserAction::Quit);
    }

    if state.detail.state().is_open() {
        return match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(BrowserAction::CloseDetail),
            _ => None,
        };
    }

    if state.search_focused {
        return search_key_to_action(code, modifiers);
    }

    normal_key_to_action(code, modifiers)
}

fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<BrowserAction> {
    match (code, modifiers) {
        (KeyCode::Esc, _) => Some(BrowserAction::BlurSearch),
        (KeyCode::Enter, _) => Some(BrowserAction::SubmitQuery),
        (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => Some(BrowserAction::Quit),
        _ => None,
    }
}

fn normal_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<BrowserAction> {
    if modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(BrowserAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BrowserAction::MoveUp),
        KeyCode::Char('h') | KeyCode::Left => Some(BrowserAction::PrevPage),
        KeyCode::Char('n') | KeyCode::Right => Some(BrowserAction::NextPage),

        KeyCode::Char('/') => Some(BrowserAction::FocusSearch),
        KeyCode::Char('m') => Some(BrowserAction::CycleMode),
        KeyCode::Char('l') => Some(BrowserAction::ToggleLongPosts),
        KeyCode::Char('u') => Some(BrowserAction::ToggleHideByUser),
        KeyCode::Char('c') => Some(BrowserAction::ToggleSortByComments),

        KeyCode::Enter => Some(BrowserAction::OpenSelected),
        KeyCode::Char('r') => Some(BrowserAction::Reload),
        KeyCode::Char('q') | KeyCode::Esc => Some(BrowserAction::Quit),

        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
