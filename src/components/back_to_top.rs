use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::controllers::scroll::ChromeController;
use crate::dom;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            let offset = dom::scroll_metrics().offset;
            visible.set(ChromeController::default().chrome(offset).back_to_top_visible);
        });
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::smooth_scroll_to(0.0);
    });

    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", (*visible).then(|| "visible"))}
            {onclick}
            aria-label="Retour en haut"
        >
            {"↑"}
        </button>
    }
}
