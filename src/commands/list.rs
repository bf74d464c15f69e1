//! One-shot list command (`postdeck list`)
//!
//! Runs the initial load and a single render, then prints the page.

use super::{Overrides, effective_config};
use crate::display::{list_json, print_list};
use crate::error::{PostdeckError, Result};
use crate::gateway::{Gateway, HttpGateway};
use crate::render::{ListView, RenderOptions, ViewState, render_list};
use crate::search::SearchMode;
use crate::store::{DataStore, LoadState};

/// Flags accepted by `list`
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub page: usize,
    pub query: String,
    pub mode: Option<SearchMode>,
    pub highlight_long: bool,
    pub hide_by_user: bool,
    pub sort_by_comments: bool,
    pub json: bool,
}

impl ListOptions {
    /// The view state these flags describe
    pub fn view_state(&self, default_mode: SearchMode) -> ViewState {
        ViewState {
            current_page: self.page.max(1),
            search_query: self.query.clone(),
            search_mode: self.mode.unwrap_or(default_mode),
            highlight_long_posts: self.highlight_long,
            hide_by_user: self.hide_by_user,
            sort_by_comments: self.sort_by_comments,
        }
    }
}

pub async fn cmd_list(overrides: &Overrides, options: ListOptions) -> Result<()> {
    crate::logging::init(crate::logging::LogTarget::Stderr)?;

    let config = effective_config(overrides)?;
    let gateway = HttpGateway::from_config(&config)?;
    let view = options.view_state(config.default_search_mode);

    let rendered = load_and_render(&gateway, &view, &RenderOptions::from(&config)).await;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&list_json(&rendered))?);
    } else if !matches!(rendered, ListView::Failed(_)) {
        print_list(&rendered);
    }

    // The status message becomes the process error
    if let ListView::Failed(message) = rendered {
        return Err(PostdeckError::Other(message));
    }
    Ok(())
}

/// Load the store and render one view of it
pub async fn load_and_render(
    gateway: &dyn Gateway,
    view: &ViewState,
    options: &RenderOptions,
) -> ListView {
    let load = LoadState::finish(DataStore::load(gateway).await);
    render_list(view, &load, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_from_flags() {
        let options = ListOptions {
            page: 2,
            query: "qui".to_string(),
            mode: None,
            sort_by_comments: true,
            ..Default::default()
        };
        let view = options.view_state(SearchMode::Full);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.search_query, "qui");
        assert_eq!(view.search_mode, SearchMode::Full);
        assert!(view.sort_by_comments);
        assert!(!view.hide_by_user);
    }

    #[test]
    fn test_explicit_mode_wins() {
        let options = ListOptions {
            page: 0,
            mode: Some(SearchMode::Fuzzy),
            ..Default::default()
        };
        let view = options.view_state(SearchMode::Title);
        assert_eq!(view.search_mode, SearchMode::Fuzzy);
        assert_eq!(view.current_page, 1);
    }
}
