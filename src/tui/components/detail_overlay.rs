//! Post detail overlay
//!
//! Title, body, author, and comments of the selected post, or the loading and
//! failure messages while there is nothing to show yet.

use iocraft::prelude::*;

use super::modal_overlay::ModalOverlay;
use crate::display::COMMENT_PREFIX;
use crate::tui::model::DetailViewModel;
use crate::tui::theme::theme;

/// Props for the DetailOverlay component
#[derive(Default, Props)]
pub struct DetailOverlayProps {
    pub model: Option<DetailViewModel>,
}

#[component]
pub fn DetailOverlay(props: &DetailOverlayProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (border_color, body): (Color, AnyElement<'static>) = match props.model.clone() {
        None => (theme.border, element! { View() }.into_any()),
        Some(DetailViewModel::Message { text, is_error }) => (
            if is_error { theme.error } else { theme.border_focused },
            element! {
                View(padding: 1) {
                    Text(
                        content: text,
                        color: if is_error { theme.error } else { theme.loading },
                    )
                }
            }
            .into_any(),
        ),
        Some(DetailViewModel::Loaded(detail)) => {
            let author = detail.author_label().to_string();
            (
                theme.border_focused,
                element! {
                    View(flex_direction: FlexDirection::Column, padding_left: 1, padding_right: 1) {
                        Text(content: detail.post.title.clone(), color: theme.text, weight: Weight::Bold)
                        View(margin_top: 1) {
                            Text(content: detail.post.body.clone(), color: theme.text)
                        }
                        View(margin_top: 1) {
                            Text(content: format!("Author: {author}"), color: theme.author)
                        }
                        View(margin_top: 1) {
                            Text(
                                content: format!("Comments ({})", detail.comments.len()),
                                color: theme.text,
                                weight: Weight::Bold,
                            )
                        }
                        #(detail.comments.iter().map(|comment| element! {
                            Text(
                                content: format!("{COMMENT_PREFIX} {}", comment.body),
                                color: theme.text_dimmed,
                            )
                        }))
                    }
                }
                .into_any(),
            )
        }
    };

    element! {
        ModalOverlay(show_backdrop: true) {
            View(
                width: 70pct,
                max_height: 90pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Double,
                border_color: border_color,
                background_color: theme.background,
                overflow: Overflow::Hidden,
            ) {
                #(Some(body))
                View(justify_content: JustifyContent::End, padding_right: 1) {
                    Text(content: "Esc to close", color: theme.text_dimmed)
                }
            }
        }
    }
}
