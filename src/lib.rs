pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod detail;
pub mod display;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod paginate;
pub mod render;
pub mod search;
pub mod store;
pub mod tui;

pub use config::Config;
pub use debounce::Debouncer;
pub use detail::{DetailLoader, DetailState, PostDetail, SelectionTicket, fetch_detail};
pub use error::{PostdeckError, Result};
pub use gateway::{Gateway, HttpGateway, SharedGateway};
pub use postdeck_model::{Comment, Post, PostId, User, UserId};
pub use render::{ListView, PostSummary, RenderOptions, ViewAction, ViewState, render_list};
pub use search::{SearchMode, matches};
pub use store::{DataStore, LoadState, UserIndex};
