//! Post browser (`postdeck browse`)
//!
//! Wires [`BrowserState`] into iocraft: key events and async completions go
//! through [`reduce_browser_state`], and the returned effects start the load,
//! the detail retrieval, or the debounce wake-up.

use std::time::Instant;

use iocraft::prelude::*;

use crate::config::Config;
use crate::detail::{SelectionTicket, fetch_detail};
use crate::error::LOAD_FAILURE_MESSAGE;
use crate::gateway::SharedGateway;
use crate::render::RenderOptions;
use crate::store::{DataStore, LoadState, UserIndex};
use crate::tui::components::{
    DetailOverlay, EmptyState, EmptyStateKind, Footer, Header, PostList, SearchBox,
};
use crate::tui::model::{
    BrowserAction, BrowserEffect, BrowserState, ListStatus, compute_browser_view_model,
    key_to_action, reduce_browser_state,
};

/// Rows taken by the header (1), search box (3), footer (1), list borders (2),
/// and the "more below" line (1)
const CHROME_ROWS: u16 = 8;

/// Props for the PostBrowser component
#[derive(Default, Props)]
pub struct PostBrowserProps {
    pub gateway: Option<SharedGateway>,
    pub config: Option<Config>,
}

/// Handlers that carry out reducer effects
#[derive(Clone)]
struct Effects {
    load: Handler<()>,
    detail: Handler<SelectionTicket>,
    wake: Handler<Instant>,
}

impl Effects {
    fn run(&self, effect: BrowserEffect) {
        match effect {
            BrowserEffect::Load => self.load.clone()(()),
            BrowserEffect::FetchDetail(ticket) => self.detail.clone()(ticket),
            BrowserEffect::WakeAt(at) => self.wake.clone()(at),
        }
    }
}

/// Reduce `action` into `state`, returning any follow-up effect
fn apply(
    state: &mut State<BrowserState>,
    action: BrowserAction,
    options: &RenderOptions,
) -> Option<BrowserEffect> {
    let current = state.read().clone();
    let (next, effect) = reduce_browser_state(current, action, options);
    state.set(next);
    effect
}

fn dispatch(
    state: &mut State<BrowserState>,
    action: BrowserAction,
    options: &RenderOptions,
    effects: &Effects,
) {
    if let Some(effect) = apply(state, action, options) {
        effects.run(effect);
    }
}

/// Main post browser component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header                                    |
/// +------------------------------------------+
/// | SearchBox                                 |
/// +------------------------------------------+
/// | PostList                                  |
/// |                                           |
/// +------------------------------------------+
/// | Footer                                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn PostBrowser<'a>(props: &PostBrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (_width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let config = props.config.clone().unwrap_or_default();
    let options = RenderOptions::from(&config);

    let mut state: State<BrowserState> = hooks.use_state({
        let mode = config.default_search_mode;
        let window = config.search_debounce();
        move || BrowserState::new(mode, window)
    });
    let query_text = hooks.use_state(String::new);

    let load_handler: Handler<()> = hooks.use_async_handler({
        let gateway = props.gateway.clone();
        let options = options.clone();
        move |()| {
            let gateway = gateway.clone();
            let options = options.clone();
            let mut state = state;
            async move {
                let load = match gateway {
                    Some(gateway) => LoadState::finish(DataStore::load(gateway.as_ref()).await),
                    None => LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string()),
                };
                apply(&mut state, BrowserAction::LoadFinished(load), &options);
            }
        }
    });

    let detail_handler: Handler<SelectionTicket> = hooks.use_async_handler({
        let gateway = props.gateway.clone();
        let options = options.clone();
        move |ticket: SelectionTicket| {
            let gateway = gateway.clone();
            let options = options.clone();
            let mut state = state;
            async move {
                let users: UserIndex = state
                    .read()
                    .load
                    .store()
                    .map(|store| store.users().clone())
                    .unwrap_or_default();
                let outcome = match gateway {
                    Some(gateway) => fetch_detail(gateway.as_ref(), ticket.post_id, &users)
                        .await
                        .map_err(|e| e.user_message()),
                    None => Err(crate::error::DETAIL_FAILURE_MESSAGE.to_string()),
                };
                apply(
                    &mut state,
                    BrowserAction::DetailFinished { ticket, outcome },
                    &options,
                );
            }
        }
    });

    let wake_handler: Handler<Instant> = hooks.use_async_handler({
        let options = options.clone();
        move |at: Instant| {
            let options = options.clone();
            let mut state = state;
            async move {
                tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await;
                apply(&mut state, BrowserAction::Tick(Instant::now()), &options);
            }
        }
    });

    let effects = Effects {
        load: load_handler,
        detail: detail_handler,
        wake: wake_handler,
    };

    // Trigger initial load on mount
    let idle = matches!(state.read().load, LoadState::Idle);
    if idle {
        dispatch(&mut state, BrowserAction::Reload, &options, &effects);
    }

    let list_height = height.saturating_sub(CHROME_ROWS) as usize;
    if state.read().list_height != list_height {
        dispatch(&mut state, BrowserAction::Resize(list_height), &options, &effects);
    }

    // Typed text reaches the reducer on the render after TextInput updates it
    let typed = query_text.to_string();
    if state.read().query_input != typed {
        dispatch(
            &mut state,
            BrowserAction::QueryInput {
                text: typed,
                at: Instant::now(),
            },
            &options,
            &effects,
        );
    }

    hooks.use_terminal_events({
        let options = options.clone();
        let effects = effects.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let action = key_to_action(code, modifiers, &state.read());
                if let Some(action) = action {
                    dispatch(&mut state, action, &options, &effects);
                }
            }
            _ => {}
        }
    });

    if state.read().should_exit {
        system.exit();
    }

    let vm = compute_browser_view_model(&state.read(), &options);
    let detail_open = vm.detail.is_some();
    let post_count = vm.list.status.is_none().then_some(vm.list.total);

    element! {
        View(
            width: 100pct,
            height: height,
            flex_direction: FlexDirection::Column,
        ) {
            Header(model: Some(vm.header.clone()), post_count: post_count)

            SearchBox(
                value: Some(query_text),
                has_focus: vm.search.focused && !detail_open,
                mode_label: vm.header.mode_label,
                pending: vm.search.pending,
            )

            View(flex_grow: 1.0, width: 100pct) {
                #(Some(match vm.list.status.clone() {
                    Some(status) => {
                        let message = match &status {
                            ListStatus::Loading(m) | ListStatus::Failed(m) | ListStatus::Empty(m) => m.clone(),
                        };
                        element! {
                            EmptyState(kind: EmptyStateKind::from(&status), message: message)
                        }
                        .into_any()
                    }
                    None => element! {
                        PostList(
                            posts: vm.list.items.clone(),
                            total: vm.list.total,
                            selected_index: vm.list.selected_index,
                            scroll_offset: vm.list.scroll_offset,
                            has_focus: !vm.search.focused && !detail_open,
                        )
                    }
                    .into_any(),
                }))
            }

            Footer(shortcuts: vm.shortcuts.clone())

            #(vm.detail.clone().map(|detail| element! {
                DetailOverlay(model: Some(detail))
            }))
        }
    }
}
