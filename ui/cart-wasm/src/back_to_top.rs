//! Back-to-top control: smooth scroll on click, shown once the page has
//! scrolled past the configured threshold.

use crate::dom;
use crate::state::PageHandle;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

pub fn bind(page: &PageHandle) {
    let Some(btn) = page.els.back_to_top.clone() else {
        return;
    };

    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        dom::window().scroll_to_with_scroll_to_options(&opts);
    }) as Box<dyn FnMut(_)>);
    let _ = btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();

    let threshold = page.config.back_to_top_threshold;
    let btn2 = btn.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let scrolled = dom::window().scroll_y().unwrap_or(0.0);
        dom::toggle_class(&btn2, "visible", scrolled > threshold);
    }) as Box<dyn FnMut(_)>);
    let _ = dom::window().add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
    cb.forget();
}
