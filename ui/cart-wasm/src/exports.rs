//! Functions other page scripts call through `window`.
//!
//! - `addItemToCartFromProduct(name, price)`: used by the product detail page.
//! - `readCheckoutItems()`: the checkout snapshot as an array of
//!   `{ name, price, qty, checked }`.

use crate::dom;
use crate::state::PageHandle;
use cart_core::{CartCommand, read_checkout_snapshot};
use tracing::warn;
use wasm_bindgen::prelude::*;

/// Coerce like JS `Number(value)`.
fn js_number(value: &JsValue) -> f64 {
    js_sys::Number::new(value).value_of()
}

pub fn install(page: &PageHandle) -> Result<(), JsValue> {
    let window: JsValue = dom::window().into();

    let page2 = page.clone();
    let add = Closure::wrap(Box::new(move |name: JsValue, price: JsValue| {
        let Some(name) = name.as_string().filter(|n| !n.is_empty()) else {
            return;
        };
        let price = js_number(&price);
        if price.is_nan() {
            warn!(%name, "ignoring add with non-numeric price");
            return;
        }
        page2.dispatch(CartCommand::Add { name, price });
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str("addItemToCartFromProduct"),
        add.as_ref(),
    )?;
    add.forget();

    let page3 = page.clone();
    let read = Closure::wrap(Box::new(move || -> JsValue {
        let store = page3.store.borrow();
        let items = read_checkout_snapshot(store.storage(), &page3.config.checkout_key);
        serde_wasm_bindgen::to_value(&items).unwrap_or_else(|_| js_sys::Array::new().into())
    }) as Box<dyn FnMut() -> JsValue>);
    js_sys::Reflect::set(&window, &JsValue::from_str("readCheckoutItems"), read.as_ref())?;
    read.forget();

    Ok(())
}
