use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Document, HtmlImageElement, HtmlScriptElement};

use crate::config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoaderError {
    #[error("document has no body to attach {0} to")]
    NoBody(String),
    #[error("failed to load {url}: {reason}")]
    Js { url: String, reason: String },
}

/// Loads a third-party script by URL.
pub trait ModuleLoader {
    fn load(&self, url: &str) -> Result<(), LoaderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyLoading {
    /// The browser honours `loading="lazy"`; sources can be promoted.
    Native,
    /// The polyfill was requested instead.
    Polyfilled,
}

pub fn ensure_lazy_loading(
    native_supported: bool,
    loader: &dyn ModuleLoader,
) -> Result<LazyLoading, LoaderError> {
    if native_supported {
        return Ok(LazyLoading::Native);
    }
    loader.load(config::LAZYSIZES_URL)?;
    Ok(LazyLoading::Polyfilled)
}

/// Appends `<script src=…>` to the document body.
pub struct ScriptTagLoader {
    document: Document,
}

impl ScriptTagLoader {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ModuleLoader for ScriptTagLoader {
    fn load(&self, url: &str) -> Result<(), LoaderError> {
        let js_error = |err: wasm_bindgen::JsValue| LoaderError::Js {
            url: url.to_string(),
            reason: format!("{:?}", err),
        };
        let body = self
            .document
            .body()
            .ok_or_else(|| LoaderError::NoBody(url.to_string()))?;
        let script: HtmlScriptElement = self
            .document
            .create_element("script")
            .map_err(js_error)?
            .unchecked_into();
        script.set_src(url);
        body.append_child(&script).map_err(js_error)?;
        Ok(())
    }
}

fn native_lazy_loading_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &"HTMLImageElement".into())
        .and_then(|class| js_sys::Reflect::get(&class, &"prototype".into()))
        .and_then(|prototype| js_sys::Reflect::has(&prototype, &"loading".into()))
        .unwrap_or(false)
}

/// Promotes `data-src` on lazy images, or falls back to the polyfill.
pub fn install(document: &Document) {
    let loader = ScriptTagLoader::new(document.clone());
    match ensure_lazy_loading(native_lazy_loading_supported(), &loader) {
        Ok(LazyLoading::Native) => {
            let Ok(images) = document.query_selector_all("img[loading=\"lazy\"]") else {
                return;
            };
            for index in 0..images.length() {
                let Some(image) = images
                    .get(index)
                    .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
                else {
                    continue;
                };
                if let Some(source) = image.get_attribute("data-src") {
                    image.set_src(&source);
                }
            }
        }
        Ok(LazyLoading::Polyfilled) => info!("native lazy loading missing, loaded lazysizes"),
        Err(err) => warn!("lazy image fallback unavailable: {}", err),
    }
}
