//! Event binding.
//!
//! Wires the cart panel's listeners. Each gesture becomes exactly one
//! `CartCommand`; product listings, checkout and back-to-top bind their own
//! listeners in their modules.

use crate::dom::{self, Elements};
use crate::panel;
use crate::state::PageHandle;
use cart_core::CartCommand;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement};

/// Helper: attach a click handler to an optional element.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        if let Some(el) = &$el {
            let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
            let _ = el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            cb.forget();
        }
    }};
}

/// Map a click inside the item list to the command its control stands for.
fn list_click_command(target: &Element) -> Option<CartCommand> {
    if dom::has_class(target, "cart-item-remove") {
        return dom::data_index(target).map(CartCommand::Remove);
    }
    let quantity_index = || dom::closest(target, ".qty-control").and_then(|c| dom::data_index(&c));
    if dom::has_class(target, "qty-minus") {
        return quantity_index().map(CartCommand::Decrement);
    }
    if dom::has_class(target, "qty-plus") {
        return quantity_index().map(CartCommand::Increment);
    }
    None
}

/// Bind all cart panel listeners. Call once after init.
pub fn bind_events(page: &PageHandle) {
    let els: &Elements = &page.els;

    // ── Open / close ──
    {
        let els2 = els.clone();
        on_click!(els.cart_btn, move |_: web_sys::MouseEvent| panel::open(&els2));
    }
    {
        let els2 = els.clone();
        on_click!(els.cart_fab, move |_: web_sys::MouseEvent| panel::open(&els2));
    }
    {
        let els2 = els.clone();
        on_click!(Some(els.cart_overlay.clone()), move |_: web_sys::MouseEvent| {
            panel::close(&els2)
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.cart_close, move |_: web_sys::MouseEvent| panel::close(&els2));
    }

    // ── Item list (delegated) ──
    {
        let page2 = page.clone();
        on_click!(Some(els.cart_items.clone()), move |e: web_sys::MouseEvent| {
            let command = dom::event_element(&e).and_then(|target| list_click_command(&target));
            if let Some(command) = command {
                page2.dispatch(command);
            }
        });
    }
    {
        let page2 = page.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            let Some(target) = dom::event_element(&e) else {
                return;
            };
            if !dom::has_class(&target, "cart-checkbox") {
                return;
            }
            let (Some(index), Ok(input)) =
                (dom::data_index(&target), target.dyn_into::<HtmlInputElement>())
            else {
                return;
            };
            page2.dispatch(CartCommand::SetSelected {
                index,
                selected: input.checked(),
            });
        }) as Box<dyn FnMut(_)>);
        let _ = els
            .cart_items
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    // ── Bulk controls ──
    {
        let page2 = page.clone();
        on_click!(els.cart_clear, move |_: web_sys::MouseEvent| {
            page2.dispatch(CartCommand::Clear);
        });
    }
    {
        let page2 = page.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let selected = page2.els.cart_select_all.checked();
            page2.dispatch(CartCommand::SetAllSelected(selected));
        }) as Box<dyn FnMut(_)>);
        let _ = els
            .cart_select_all
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}
