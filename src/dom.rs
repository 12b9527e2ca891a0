use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    js_sys, Document, Element, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node, ScrollBehavior, ScrollToOptions,
    Window,
};

use crate::controllers::scroll::ScrollMetrics;
use crate::controllers::sections::Section;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

fn header_height(document: &Document) -> f64 {
    document
        .get_element_by_id("header")
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0)
}

pub fn scroll_metrics() -> ScrollMetrics {
    let Ok(window) = window() else {
        return ScrollMetrics::default();
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let header_height = window
        .document()
        .map(|document| header_height(&document))
        .unwrap_or(0.0);
    ScrollMetrics::new(offset, header_height)
}

/// Measures every `section[id]` in document order.
pub fn section_layout() -> Vec<Section> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| Section {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.client_height()),
        })
        .collect()
}

pub fn smooth_scroll_to(top: f64) {
    let Ok(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scrolls to the section with `id`. Returns false when the page
/// has no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(section) = document()
        .ok()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|section| section.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let metrics = scroll_metrics();
    smooth_scroll_to(metrics.anchor_position(f64::from(section.offset_top())));
    true
}

pub fn set_styles<'a, I>(element: &Element, styles: I)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = element.style();
    for (property, value) in styles {
        let _ = style.set_property(property, value);
    }
}

pub fn set_body_style(property: &str, value: &str) {
    if let Some(body) = document().ok().and_then(|document| document.body()) {
        let _ = body.style().set_property(property, value);
    }
}

pub fn add_body_class(class: &str) {
    if let Some(body) = document().ok().and_then(|document| document.body()) {
        let _ = body.class_list().add_1(class);
    }
}

/// Whether the event target sits inside `container`.
pub fn contains_target(container: Option<Element>, target: Option<EventTarget>) -> bool {
    let node = target.and_then(|target| target.dyn_into::<Node>().ok());
    match (container, node) {
        (Some(container), Some(node)) => container.contains(Some(&node)),
        _ => false,
    }
}

/// Whether the event was dispatched on `element` itself, not a descendant.
pub fn is_target(element: Option<Element>, target: Option<EventTarget>) -> bool {
    match (element, target) {
        (Some(element), Some(target)) => AsRef::<EventTarget>::as_ref(&element) == &target,
        _ => false,
    }
}

pub fn current_url() -> String {
    window()
        .and_then(|window| window.location().href().map_err(DomError::from))
        .unwrap_or_default()
}

pub fn open_mailto(uri: &str) -> Result<(), DomError> {
    window()?.location().set_href(uri)?;
    Ok(())
}

pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let navigator = web_sys::window()
        .ok_or(ClipboardError::Unavailable)?
        .navigator();
    // insecure contexts have no navigator.clipboard at all
    let available = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .map(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
        .unwrap_or(false);
    if !available {
        return Err(ClipboardError::Unavailable);
    }
    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(format!("{:?}", err)))
}

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` together with the closure it calls.
/// Dropping it disconnects the observer.
pub struct Watcher {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl Watcher {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_entry: F) -> Result<Self, DomError>
    where
        F: FnMut(Element, bool, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_entry(entry.target(), entry.is_intersecting(), &observer);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
