use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{js_sys, Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::controllers::panel::{CopyLabel, SharePanel};
use crate::dom;
use crate::notice::Notice;

const COPY_LABEL: &str = "Copier le lien";

enum ShareAction {
    Open,
    Close,
    Backdrop(bool),
    Copied(f64),
    Elapsed(f64),
}

#[derive(Clone, PartialEq)]
struct ShareState {
    panel: SharePanel,
    label: CopyLabel,
}

impl Default for ShareState {
    fn default() -> Self {
        Self {
            panel: SharePanel::default(),
            label: CopyLabel::new(COPY_LABEL),
        }
    }
}

impl Reducible for ShareState {
    type Action = ShareAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ShareAction::Open => next.panel.open(),
            ShareAction::Close => next.panel.close(),
            ShareAction::Backdrop(on_backdrop) => next.panel.backdrop_click(on_backdrop),
            ShareAction::Copied(now) => next.label.confirm(now),
            ShareAction::Elapsed(now) => next.label.advance(now),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ShareMenuProps {
    pub on_notice: Callback<Notice>,
}

#[function_component(ShareMenu)]
pub fn share_menu(props: &ShareMenuProps) -> Html {
    let state = use_reducer(ShareState::default);
    let backdrop_ref = use_node_ref();

    {
        use_effect_with_deps(
            move |panel: &SharePanel| {
                dom::set_body_style("overflow", panel.body_overflow());
                || ()
            },
            state.panel,
        );
    }

    let open = {
        let state = state.dispatcher();
        Callback::from(move |_: MouseEvent| state.dispatch(ShareAction::Open))
    };

    let close = {
        let state = state.dispatcher();
        Callback::from(move |_: MouseEvent| state.dispatch(ShareAction::Close))
    };

    let backdrop_click = {
        let state = state.dispatcher();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = dom::is_target(backdrop_ref.cast::<Element>(), e.target());
            state.dispatch(ShareAction::Backdrop(on_backdrop));
        })
    };

    let copy_link = {
        let state = state.dispatcher();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_: MouseEvent| {
            let state = state.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                let url = dom::current_url();
                match dom::copy_text(&url).await {
                    Ok(()) => {
                        let copied_at = js_sys::Date::now();
                        state.dispatch(ShareAction::Copied(copied_at));
                        let revert_at = copied_at + f64::from(config::COPY_CONFIRMATION_MS);
                        Timeout::new(config::COPY_CONFIRMATION_MS, move || {
                            state.dispatch(ShareAction::Elapsed(revert_at));
                        })
                        .forget();
                    }
                    Err(err) => {
                        warn!("copy link failed: {}", err);
                        on_notice.emit(Notice::CopyFailed { url });
                    }
                }
            });
        })
    };

    let overlay = html! {
        <div
            id="shareMenu"
            class={classes!("share-menu", state.panel.is_open().then(|| "active"))}
            ref={backdrop_ref}
            onclick={backdrop_click}
        >
            <div class="share-content">
                <button id="shareClose" class="share-close" onclick={close} aria-label="Fermer">
                    {"×"}
                </button>
                <h3>{"Partager cette page"}</h3>
                <button id="copyLink" class="share-option" onclick={copy_link}>
                    <span class="share-icon">{"🔗"}</span>
                    <span>{ state.label.text().to_string() }</span>
                </button>
            </div>
        </div>
    };

    // The trigger sits in revealed content; the overlay hangs off <body>.
    let overlay = match dom::document().ok().and_then(|document| document.body()) {
        Some(body) => yew::create_portal(overlay, body.into()),
        None => overlay,
    };

    html! {
        <>
            <button id="shareButton" class="share-button" onclick={open}>
                {"Partager"}
            </button>
            { overlay }
        </>
    }
}
