//! Interactive post browser
//!
//! - `model` - state, reducer, and key mapping (no iocraft rendering)
//! - `view` - the `PostBrowser` component
//! - `components` - header, query box, list, overlay, and footer

pub mod components;
pub mod model;
pub mod theme;
pub mod view;

pub use model::{BrowserAction, BrowserEffect, BrowserState, reduce_browser_state};
pub use theme::Theme;
pub use view::{PostBrowser, PostBrowserProps};
