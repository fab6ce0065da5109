//! Checkout trigger.
//!
//! `#checkoutBtn` is the only hook. A blocked checkout alerts and stays on the
//! page; there is no navigation without a saved snapshot.

use crate::dom;
use crate::state::PageHandle;
use cart_core::hand_off;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub fn bind(page: &PageHandle) {
    let Some(btn) = page.els.checkout_btn.clone() else {
        return;
    };
    let page2 = page.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        e.prevent_default();
        on_checkout(&page2);
    }) as Box<dyn FnMut(_)>);
    let _ = btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
}

fn on_checkout(page: &PageHandle) {
    let result = {
        let mut store = page.store.borrow_mut();
        hand_off(&mut *store, &page.config.checkout_key)
    };
    let window = dom::window();
    match result {
        Ok(_) => {
            if let Err(err) = window.location().set_href(&page.config.checkout_page) {
                warn!(error = ?err, "navigation to checkout failed");
            }
        }
        Err(err) => {
            warn!(error = %err, "checkout blocked");
            let _ = window.alert_with_message(&err.to_string());
        }
    }
}
