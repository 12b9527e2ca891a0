use log::{info, warn};
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animations;
use crate::components::back_to_top::BackToTop;
use crate::components::contact::ContactForm;
use crate::components::faq::{Faq, FaqEntry};
use crate::components::header::{Header, NavEntry};
use crate::components::notification::NoticeBanner;
use crate::components::share::ShareMenu;
use crate::config;
use crate::dom;
use crate::lazy_images;
use crate::notice::Notice;

fn nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry { href: "#accueil", label: "Accueil" },
        NavEntry { href: "#bienfaits", label: "Bienfaits" },
        NavEntry { href: "#yoga", label: "Les cours" },
        NavEntry { href: "#references", label: "Références" },
        NavEntry { href: "#faq", label: "FAQ" },
        NavEntry { href: "#contact", label: "Contact" },
    ]
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            id: "niveau",
            question: "Faut-il être souple pour commencer ?",
            answer: "Non. Chaque séance s'adapte à votre corps et à votre rythme, débutants bienvenus.",
        },
        FaqEntry {
            id: "tenue",
            question: "Que dois-je apporter ?",
            answer: "Une tenue confortable et une bouteille d'eau. Les tapis sont fournis.",
        },
        FaqEntry {
            id: "rire",
            question: "Le yoga du rire, c'est sérieux ?",
            answer: "Très ! Le rire volontaire produit les mêmes effets que le rire spontané : détente, oxygénation, bonne humeur.",
        },
        FaqEntry {
            id: "tarifs",
            question: "Proposez-vous une séance d'essai ?",
            answer: "Oui, la première séance collective est offerte. Écrivez-moi via le formulaire ci-dessous.",
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let notice = use_state(|| None::<Notice>);

    // Page-level wiring, once per mount.
    use_effect_with_deps(
        move |_| {
            dom::set_body_style("opacity", "1");

            let mut reveal_watchers = Vec::new();
            let mut counter_watcher = None;
            match dom::document() {
                Ok(document) => {
                    lazy_images::install(&document);
                    match animations::install_reveals(&document) {
                        Ok(watchers) => reveal_watchers = watchers,
                        Err(err) => warn!("reveal animations disabled: {}", err),
                    }
                    match animations::install_counters(&document) {
                        Ok(watcher) => counter_watcher = Some(watcher),
                        Err(err) => warn!("counters disabled: {}", err),
                    }
                    if document.ready_state() == "complete" {
                        dom::add_body_class("loaded");
                    }
                }
                Err(err) => warn!("page wiring skipped: {}", err),
            }
            info!("landing page ready");

            move || {
                drop(reveal_watchers);
                drop(counter_watcher);
            }
        },
        (),
    );

    use_event_with_window("load", |_: Event| dom::add_body_class("loaded"));

    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |next: Notice| notice.set(Some(next)))
    };
    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    html! {
        <>
            <Header title="Folle de Rire Yoga" entries={nav_entries()} />

            <main class="landing-page">
                <section id="accueil" class="hero">
                    <h1>{"Respirez, bougez, riez"}</h1>
                    <p class="hero-subtitle">
                        {"Cours de yoga et de yoga du rire, en groupe ou en séance individuelle."}
                    </p>
                    <a class="hero-cta" href="#contact">{"Réserver une séance"}</a>
                </section>

                <section id="bienfaits" class="benefits">
                    <h2>{"Les bienfaits"}</h2>
                    <div class="benefit-grid">
                        <div class="benefit-card">
                            <h3>{"Moins de stress"}</h3>
                            <p>{"La respiration consciente calme le système nerveux."}</p>
                        </div>
                        <div class="benefit-card">
                            <h3>{"Plus d'énergie"}</h3>
                            <p>{"Les postures réveillent le corps en douceur."}</p>
                        </div>
                        <div class="benefit-card">
                            <h3>{"Bonne humeur"}</h3>
                            <p>{"Le rire libère les endorphines et crée du lien."}</p>
                        </div>
                    </div>
                    <div class="stats">
                        <div class="stat-card">
                            <span class="stat-number" data-target="150"></span>
                            <span class="stat-label">{"élèves accompagnés"}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-number" data-target="12"></span>
                            <span class="stat-label">{"années de pratique"}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-number" data-target="800"></span>
                            <span class="stat-label">{"séances données"}</span>
                        </div>
                    </div>
                </section>

                <section id="yoga" class="yoga">
                    <h2>{"Les cours"}</h2>
                    <ul class="yoga-list">
                        <li>{"Hatha : postures tenues, alignement et respiration."}</li>
                        <li>{"Yin : étirements longs et lâcher-prise."}</li>
                        <li>{"Yoga du rire : exercices ludiques et relaxation."}</li>
                        <li>{"Ateliers en entreprise : cohésion et gestion du stress."}</li>
                    </ul>
                    <img
                        class="yoga-photo"
                        loading="lazy"
                        data-src="/assets/cours.jpg"
                        alt="Séance de yoga en groupe"
                    />
                </section>

                <section id="references" class="references">
                    <h2>{"Références"}</h2>
                    <div class="reference-box">
                        <p>{"« Une heure hors du temps, on ressort léger. » Claire"}</p>
                    </div>
                    <div class="reference-box">
                        <p>{"« Nos équipes en redemandent chaque trimestre. » Service RH"}</p>
                    </div>
                </section>

                <section id="faq" class="faq">
                    <h2>{"Questions fréquentes"}</h2>
                    <Faq entries={faq_entries()} />
                </section>

                <section id="contact" class="contact">
                    <h2>{"Contact"}</h2>
                    <div class="contact-info">
                        <p>{"Email : "}<a href={format!("mailto:{}", config::CONTACT_ADDRESS)}>{ config::CONTACT_ADDRESS }</a></p>
                    </div>
                    <ContactForm on_notice={on_notice.clone()} />
                    <div class="contact-cta">
                        <p>{"Vous connaissez quelqu'un que ça pourrait intéresser ?"}</p>
                        <ShareMenu on_notice={on_notice} />
                    </div>
                </section>
            </main>

            <BackToTop />
            <NoticeBanner notice={(*notice).clone()} {on_dismiss} />
            <style>{ STYLES }</style>
        </>
    }
}

const STYLES: &str = r#"
body { opacity: 0; transition: opacity 0.3s ease; margin: 0; font-family: "Segoe UI", Roboto, Helvetica, Arial, sans-serif; color: #3b2f2f; }
#header { position: fixed; top: 0; left: 0; right: 0; z-index: 100; background: #fffaf3; transition: box-shadow 0.3s ease; }
.header-content { display: flex; align-items: center; justify-content: space-between; max-width: 1100px; margin: 0 auto; padding: 1rem 1.5rem; }
.logo { font-weight: bold; color: #b5523b; text-decoration: none; }
.main-nav ul { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.main-nav a { color: inherit; text-decoration: none; padding-bottom: 2px; }
.main-nav a.active { border-bottom: 2px solid #b5523b; color: #b5523b; }
.mobile-menu-toggle { display: none; background: none; border: 0; cursor: pointer; }
.mobile-menu-toggle span { display: block; width: 24px; height: 3px; margin: 5px 0; background: #3b2f2f; transition: transform 0.3s ease, opacity 0.3s ease; }
section { padding: 6rem 1.5rem 4rem; max-width: 1100px; margin: 0 auto; }
.benefit-grid, .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
.stats { margin-top: 3rem; text-align: center; }
.stat-number { display: block; font-size: 2.5rem; font-weight: bold; color: #b5523b; }
.faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; }
.faq-item.active .faq-answer { max-height: 20rem; }
.faq-question { display: flex; justify-content: space-between; width: 100%; background: none; border: 0; padding: 1rem 0; font-size: 1.05rem; cursor: pointer; }
.contact-form { display: grid; gap: 0.5rem; max-width: 520px; }
.share-menu { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); z-index: 200; align-items: center; justify-content: center; }
.share-menu.active { display: flex; }
.share-content { background: #fff; border-radius: 12px; padding: 2rem; position: relative; min-width: 280px; }
.share-close { position: absolute; top: 0.5rem; right: 0.75rem; background: none; border: 0; font-size: 1.5rem; cursor: pointer; }
.back-to-top { position: fixed; right: 1.5rem; bottom: 1.5rem; opacity: 0; pointer-events: none; transition: opacity 0.3s ease; }
.back-to-top.visible { opacity: 1; pointer-events: auto; }
.notice { position: fixed; left: 50%; bottom: 1.5rem; transform: translateX(-50%); background: #3b2f2f; color: #fff; padding: 1rem 3rem 1rem 1.5rem; border-radius: 8px; z-index: 300; max-width: 90vw; word-break: break-all; }
.notice-error { background: #8c2f1c; }
.notice-close { position: absolute; top: 0.5rem; right: 0.75rem; background: none; border: 0; color: inherit; font-size: 1.25rem; cursor: pointer; }
@media (max-width: 768px) {
    .mobile-menu-toggle { display: block; }
    .main-nav { display: none; position: absolute; top: 100%; left: 0; right: 0; background: #fffaf3; padding: 1rem 1.5rem; }
    .main-nav.active { display: block; }
    .main-nav ul { flex-direction: column; }
}
"#;
