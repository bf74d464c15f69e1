//! Scrollable post list component
//!
//! Displays the rendered page with selection highlighting, match highlighting
//! in titles, a marker on long posts, author, and comment count.

use iocraft::prelude::*;

use crate::display::{COMMENT_PREFIX, LONG_MARKER};
use crate::render::PostSummary;
use crate::tui::model::highlight_segments;
use crate::tui::theme::theme;

/// Props for the PostList component
#[derive(Default, Props)]
pub struct PostListProps {
    /// Rows scrolled into view
    pub posts: Vec<PostSummary>,
    /// Total rows on the page
    pub total: usize,
    /// Index of the currently selected post (page-relative)
    pub selected_index: usize,
    /// Index of the first visible post
    pub scroll_offset: usize,
    /// Whether the list has focus
    pub has_focus: bool,
}

/// Scrollable post list with selection
#[component]
pub fn PostList(props: &PostListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let below = props
        .total
        .saturating_sub(props.scroll_offset + props.posts.len());

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            #(props.posts.iter().enumerate().map(|(i, summary)| {
                let is_selected = props.scroll_offset + i == props.selected_index;
                element! {
                    PostRow(
                        post: summary.clone(),
                        is_selected: is_selected,
                        show_long_marker: summary.is_long,
                    )
                }
            }))

            #((below > 0).then(|| element! {
                View(height: 1, padding_left: 1) {
                    Text(
                        content: format!("  {} more below", below),
                        color: theme.text_dimmed,
                    )
                }
            }))
        }
    }
}

/// Props for a single post row
#[derive(Default, Props)]
pub struct PostRowProps {
    pub post: PostSummary,
    pub is_selected: bool,
    pub show_long_marker: bool,
}

/// Single post row in the list
#[component]
pub fn PostRow(props: &PostRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let post = &props.post;

    let bg_color = props.is_selected.then_some(theme.highlight);
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let accent = |color: Color| {
        if props.is_selected {
            theme.highlight_text
        } else {
            color
        }
    };

    let indicator = if props.is_selected { ">" } else { " " };
    let marker = if props.show_long_marker { LONG_MARKER } else { " " };
    let segments = highlight_segments(&post.title, &post.title_indices);

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: text_color)
            }

            View(width: 5, flex_shrink: 0.0) {
                Text(
                    content: format!("{:<4}", post.id),
                    color: accent(theme.id_color),
                )
            }

            View(width: 2, flex_shrink: 0.0) {
                Text(content: marker, color: accent(theme.long_post))
            }

            View(flex_grow: 1.0, flex_direction: FlexDirection::Row, overflow: Overflow::Hidden) {
                #(segments.into_iter().map(|(text, matched)| element! {
                    Text(
                        content: text,
                        color: if matched { accent(theme.search_match) } else { text_color },
                        weight: if matched { Weight::Bold } else { Weight::Normal },
                    )
                }))
                Text(
                    content: format!("  {}", post.preview),
                    color: accent(theme.text_dimmed),
                )
            }

            View(width: 18, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(
                    content: post.author.clone().unwrap_or_default(),
                    color: accent(theme.author),
                )
            }

            View(width: 6, flex_shrink: 0.0) {
                Text(
                    content: format!("{COMMENT_PREFIX}{}", post.comment_count),
                    color: accent(theme.comment_count),
                )
            }
        }
    }
}
