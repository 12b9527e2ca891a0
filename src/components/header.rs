use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::controllers::menu::MenuState;
use crate::controllers::scroll::{ChromeController, HeaderShadow};
use crate::controllers::sections::{target_from_href, SectionHighlighter};
use crate::dom;

#[derive(Clone, PartialEq)]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub entries: Vec<NavEntry>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu = use_state(MenuState::default);
    let shadow = use_state_eq(|| HeaderShadow::Resting);
    let active_section = use_state_eq(|| None::<String>);
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    let highlighter = {
        let targets: Vec<&'static str> = props
            .entries
            .iter()
            .filter_map(|entry| target_from_href(entry.href))
            .collect();
        use_mut_ref(move || SectionHighlighter::new(targets))
    };

    let sync_with_scroll = {
        let highlighter = highlighter.clone();
        let shadow = shadow.clone();
        let active_section = active_section.clone();
        move || {
            let metrics = dom::scroll_metrics();
            shadow.set(ChromeController::default().chrome(metrics.offset).shadow);
            active_section.set(highlighter.borrow_mut().update(&metrics));
        }
    };

    {
        let highlighter = highlighter.clone();
        let sync_with_scroll = sync_with_scroll.clone();
        use_effect_with_deps(
            move |_| {
                highlighter.borrow_mut().set_layout(dom::section_layout());
                sync_with_scroll();
                || ()
            },
            (),
        );
    }

    {
        let sync_with_scroll = sync_with_scroll.clone();
        use_event_with_window("scroll", move |_: Event| sync_with_scroll());
    }

    // Layout shifts after resizes and late font/image loads.
    {
        let highlighter = highlighter.clone();
        use_event_with_window("resize", move |_: Event| {
            highlighter.borrow_mut().set_layout(dom::section_layout());
        });
    }
    {
        let highlighter = highlighter.clone();
        use_event_with_window("load", move |_: Event| {
            highlighter.borrow_mut().set_layout(dom::section_layout());
        });
    }

    {
        let menu = menu.clone();
        let nav_ref = nav_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let inside_nav = dom::contains_target(nav_ref.cast::<Element>(), e.target());
            let on_toggle = dom::contains_target(toggle_ref.cast::<Element>(), e.target());
            let next = menu.after_click(inside_nav, on_toggle);
            if next != *menu {
                menu.set(next);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle());
        })
    };

    let navigate = |target: &'static str| {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let resolved = dom::scroll_to_section(target);
            let next = menu.after_navigation(resolved);
            if next != *menu {
                menu.set(next);
            }
        })
    };

    let links = highlighter.borrow().links().to_vec();
    let bars = menu.icon_bars().styles();

    html! {
        <header id="header" style={format!("box-shadow: {};", shadow.box_shadow())}>
            <div class="header-content">
                <a class="logo" href="#accueil">{ props.title.clone() }</a>
                <nav class={classes!("main-nav", menu.is_open().then(|| "active"))} ref={nav_ref}>
                    <ul>
                        { for props.entries.iter().map(|entry| {
                            let target = target_from_href(entry.href).unwrap_or_default();
                            let active = links
                                .iter()
                                .any(|link| link.active && link.target == target);
                            html! {
                                <li>
                                    <a
                                        href={entry.href}
                                        class={classes!(active.then(|| "active"))}
                                        onclick={navigate(target)}
                                    >
                                        { entry.label }
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
                <button
                    class="mobile-menu-toggle"
                    ref={toggle_ref}
                    onclick={toggle_menu}
                    aria-label="Menu"
                    aria-expanded={menu.is_open().to_string()}
                >
                    <span style={bars[0].clone()}></span>
                    <span style={bars[1].clone()}></span>
                    <span style={bars[2].clone()}></span>
                </button>
            </div>
        </header>
    }
}
