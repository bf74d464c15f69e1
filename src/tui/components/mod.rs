//! Building blocks of the post browser

pub mod detail_overlay;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod modal_overlay;
pub mod post_list;
pub mod search_box;
pub mod shortcuts;

pub use detail_overlay::{DetailOverlay, DetailOverlayProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, browser_shortcuts, detail_shortcuts, search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use post_list::{PostList, PostListProps, PostRow, PostRowProps};
pub use search_box::{SearchBox, SearchBoxProps};
