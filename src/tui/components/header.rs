//! App header bar component
//!
//! Shows the page label, the active search mode, and the three list toggles.

use iocraft::prelude::*;

use crate::tui::model::HeaderViewModel;
use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    pub model: Option<HeaderViewModel>,
    /// Rows on the current page after filtering
    pub post_count: Option<usize>,
}

/// App header bar
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(model) = props.model.clone() else {
        return element! {
            View(height: 1, padding_left: 1, background_color: theme.highlight) {
                Text(content: "postdeck", color: theme.text, weight: Weight::Bold)
            }
        };
    };

    let toggles = [
        ("L", "long", model.highlight_long_posts),
        ("U", "hide user", model.hide_by_user),
        ("C", "by comments", model.sort_by_comments),
    ];

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: "postdeck",
                    color: theme.text,
                    weight: Weight::Bold,
                )
                Text(
                    content: format!("- {}", model.page_label),
                    color: theme.text,
                )
                Text(
                    content: format!("[{}]", model.mode_label),
                    color: theme.search_match,
                )
            }
            View(flex_direction: FlexDirection::Row, gap: 1) {
                #(toggles.into_iter().map(|(key, label, on)| element! {
                    Text(
                        content: format!("{key}:{label}"),
                        color: theme.toggle_color(on),
                        weight: if on { Weight::Bold } else { Weight::Normal },
                    )
                }))

                #(props.post_count.map(|count| element! {
                    Text(
                        content: format!("{} posts", count),
                        color: theme.text_dimmed,
                    )
                }))
            }
        }
    }
}
