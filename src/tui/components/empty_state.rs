//! Empty state component
//!
//! Fills the list area while posts are loading, after a failed load, or when
//! the current page has nothing to show.

use iocraft::prelude::*;

use crate::tui::model::ListStatus;
use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    #[default]
    Loading,
    LoadFailed,
    NoPosts,
}

impl EmptyStateKind {
    fn icon(self) -> &'static str {
        match self {
            EmptyStateKind::Loading => "~",
            EmptyStateKind::LoadFailed => "!",
            EmptyStateKind::NoPosts => "?",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            EmptyStateKind::Loading => "",
            EmptyStateKind::LoadFailed => "Press 'r' to retry.",
            EmptyStateKind::NoPosts => "Try another query, or press 'h' for the previous page.",
        }
    }
}

impl From<&ListStatus> for EmptyStateKind {
    fn from(status: &ListStatus) -> Self {
        match status {
            ListStatus::Loading(_) => EmptyStateKind::Loading,
            ListStatus::Failed(_) => EmptyStateKind::LoadFailed,
            ListStatus::Empty(_) => EmptyStateKind::NoPosts,
        }
    }
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Message shown under the icon
    pub message: String,
}

/// Empty state display with a status message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let accent = match props.kind {
        EmptyStateKind::Loading => theme.loading,
        EmptyStateKind::LoadFailed => theme.error,
        EmptyStateKind::NoPosts => theme.border,
    };
    let hint = props.kind.hint();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: accent,
                margin_bottom: 1,
            ) {
                Text(
                    content: props.kind.icon(),
                    color: accent,
                    weight: Weight::Bold,
                )
            }

            Text(
                content: props.message.clone(),
                color: if props.kind == EmptyStateKind::LoadFailed { theme.error } else { theme.text },
                weight: Weight::Bold,
            )

            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 1) {
                        Text(
                            content: hint,
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_kind_from_status() {
        assert_eq!(
            EmptyStateKind::from(&ListStatus::Failed("Failed to load data".into())),
            EmptyStateKind::LoadFailed
        );
        assert_eq!(
            EmptyStateKind::from(&ListStatus::Empty("No posts found".into())),
            EmptyStateKind::NoPosts
        );
        assert_eq!(EmptyStateKind::default(), EmptyStateKind::Loading);
    }

    #[test]
    fn test_only_failures_and_empty_pages_have_hints() {
        assert!(EmptyStateKind::Loading.hint().is_empty());
        assert!(EmptyStateKind::LoadFailed.hint().contains("retry"));
    }
}
