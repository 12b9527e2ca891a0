use web_sys::MouseEvent;
use yew::prelude::*;

use crate::controllers::panel::Accordion;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = {
        let ids: Vec<&'static str> = props.entries.iter().map(|entry| entry.id).collect();
        use_state(move || Accordion::new(ids))
    };

    html! {
        <div class="faq-list">
            { for props.entries.iter().map(|entry| {
                let is_open = accordion.is_open(entry.id);
                let toggle = {
                    let accordion = accordion.clone();
                    let id = entry.id;
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        let mut next = (*accordion).clone();
                        next.toggle(id);
                        accordion.set(next);
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then(|| "active"))}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{ entry.question }</span>
                            <span class="toggle-icon">{ if is_open { "−" } else { "+" } }</span>
                        </button>
                        <div class="faq-answer">
                            <p>{ entry.answer }</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
