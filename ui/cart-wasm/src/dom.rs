//! DOM element bindings.
//!
//! All fields are resolved once at startup. Elements the storefront markup may
//! leave out are `Option`s; the cart panel itself is required.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

// ── Helpers ──

fn doc() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = doc().query_selector_all(selector) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// First descendant of `parent` matching `selector`.
pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

/// Nearest ancestor-or-self of `el` matching `selector`.
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok()?
}

pub fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn set_hidden(el: &Element, hidden: bool) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.set_hidden(hidden);
    }
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Parse a `data-idx` attribute.
pub fn data_index(el: &Element) -> Option<usize> {
    el.get_attribute("data-idx")?.trim().parse().ok()
}

/// Non-empty attribute value.
pub fn attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name).filter(|v| !v.is_empty())
}

/// The event target as an `Element`, if it is one.
pub fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

// ── Elements struct ──

/// All DOM element references used by the cart widget.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Cart panel
    pub cart_overlay: Element,
    pub cart_panel: Element,
    pub cart_items: Element,
    pub cart_total: Element,
    pub cart_select_all: HtmlInputElement,
    pub cart_clear: Option<Element>,
    pub cart_close: Option<Element>,
    pub checkout_btn: Option<HtmlElement>,

    // Openers and badges
    pub cart_btn: Option<Element>,
    pub cart_fab: Option<Element>,
    pub cart_count: Option<Element>,
    pub cart_fab_count: Option<Element>,

    // Page chrome
    pub back_to_top: Option<Element>,
    pub add_toast: Option<Element>,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            cart_overlay: get_el!("cartOverlay"),
            cart_panel: get_el!("cartPanel"),
            cart_items: get_el!("cartItems"),
            cart_total: get_el!("cartTotal"),
            cart_select_all: get_input!("cartSelectAll"),
            cart_clear: by_id("cartClear"),
            cart_close: query(".cart-close"),
            checkout_btn: by_id_typed::<HtmlElement>("checkoutBtn"),

            cart_btn: by_id("cartBtn"),
            cart_fab: by_id("cartFab"),
            cart_count: by_id("cartCount"),
            cart_fab_count: by_id("cartFabCount"),

            back_to_top: by_id("backToTop"),
            add_toast: by_id("addToast"),
        })
    }
}
