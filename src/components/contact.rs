use log::error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::mailto::ContactRequest;
use crate::notice::Notice;

pub const SESSION_TYPES: &[&str] = &[
    "Hatha",
    "Yoga du rire",
    "Yin",
    "Cours particulier",
    "Atelier en entreprise",
];

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notice: Callback<Notice>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let session_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let session_ref = session_ref.clone();
        let message_ref = message_ref.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = ContactRequest {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                phone: input_value(&phone_ref),
                session_type: session_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default(),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };
            match dom::open_mailto(&request.mailto(config::CONTACT_ADDRESS)) {
                Ok(()) => on_notice.emit(Notice::MailClientOpening),
                Err(err) => error!("could not hand off to the mail client: {}", err),
            }
        })
    };

    html! {
        <div class="contact-form-container">
            <form id="contactForm" class="contact-form" {onsubmit}>
                <label for="name">{"Nom"}</label>
                <input id="name" type="text" ref={name_ref} required=true />

                <label for="email">{"Email"}</label>
                <input id="email" type="email" ref={email_ref} required=true />

                <label for="phone">{"Téléphone (optionnel)"}</label>
                <input id="phone" type="tel" ref={phone_ref} />

                <label for="session-type">{"Type de séance"}</label>
                <select id="session-type" ref={session_ref}>
                    { for SESSION_TYPES.iter().map(|session| html! {
                        <option value={*session}>{ *session }</option>
                    }) }
                </select>

                <label for="message">{"Message"}</label>
                <textarea id="message" rows="5" ref={message_ref} required=true></textarea>

                <button type="submit" class="submit-button">{"Envoyer"}</button>
            </form>
        </div>
    }
}
