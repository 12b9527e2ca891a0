use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::notice::Notice;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

/// Non-blocking replacement for `alert()`. Informational notices fade
/// out on their own; errors stay until dismissed so the URL can be copied.
#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                let timeout = notice
                    .as_ref()
                    .filter(|notice| !notice.is_error())
                    .map(|_| Timeout::new(config::NOTICE_DISMISS_MS, move || on_dismiss.emit(())));
                // dropping the handle cancels a pending dismissal
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div
            class={classes!("notice", notice.is_error().then(|| "notice-error"))}
            role={if notice.is_error() { "alert" } else { "status" }}
        >
            <p>{ notice.message() }</p>
            <button class="notice-close" onclick={dismiss} aria-label="Fermer">{"×"}</button>
        </div>
    }
}
