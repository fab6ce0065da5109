//! Page-load query parameters (`addItem`, `addPrice`, `openCart`).

use crate::dom;
use crate::panel;
use crate::state::PageHandle;
use cart_core::Bootstrap;
use tracing::warn;
use wasm_bindgen::JsValue;

/// Apply the query-string bootstrap, then strip the query so a reload does not
/// repeat it.
pub fn run(page: &PageHandle) {
    let window = dom::window();
    let location = window.location();
    let search = location.search().unwrap_or_default();
    let boot = Bootstrap::from_query(&search);

    {
        let mut store = page.store.borrow_mut();
        boot.apply(&mut *store);
    }
    if boot.open_cart {
        panel::open(&page.els);
    }

    if boot.strip_query {
        let path = location.pathname().unwrap_or_else(|_| "/".into());
        let replaced = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&path)));
        if let Err(err) = replaced {
            warn!(error = ?err, "could not strip query parameters");
        }
    }
}
