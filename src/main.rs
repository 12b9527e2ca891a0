use log::info;
use yew::prelude::*;

mod animations;
mod config;
mod dom;
mod lazy_images;
mod mailto;
mod notice;
mod controllers {
    pub mod counter;
    pub mod menu;
    pub mod panel;
    pub mod reveal;
    pub mod scroll;
    pub mod sections;
}
mod components {
    pub mod back_to_top;
    pub mod contact;
    pub mod faq;
    pub mod header;
    pub mod notification;
    pub mod share;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
