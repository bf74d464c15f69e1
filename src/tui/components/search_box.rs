//! Query input with the mode selector label
//!
//! Edits a `State<String>` owned by the browser. The browser notices the
//! change on its next render and hands it to the debouncer.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the SearchBox component
#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// State for the search query value
    pub value: Option<State<String>>,
    /// Whether the search box has focus
    pub has_focus: bool,
    /// Label of the active search mode
    pub mode_label: &'static str,
    /// A typed query is still waiting out the quiet window
    pub pending: bool,
}

/// Search input with mode label
#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(mut value) = props.value else {
        return element! {
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                height: 3,
            ) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
            flex_shrink: 0.0,
        ) {
            View(margin_right: 1) {
                Text(
                    content: "/",
                    color: if props.has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }
            View(flex_grow: 1.0) {
                TextInput(
                    value: value.to_string(),
                    has_focus: props.has_focus,
                    on_change: move |new_value| value.set(new_value),
                    color: theme.text,
                )
            }
            #(props.pending.then(|| element! {
                View(margin_left: 1) {
                    Text(content: "…", color: theme.loading)
                }
            }))
            View(margin_left: 1) {
                Text(
                    content: format!("mode: {}", props.mode_label),
                    color: theme.text_dimmed,
                )
            }
        }
    }
}
