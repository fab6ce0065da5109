//! Storefront cart WASM frontend.
//!
//! Binds the page's cart panel to a `cart_core::CartStore` backed by
//! `localStorage`. Each concern lives in its own module.

pub mod back_to_top;
pub mod bootstrap;
pub mod catalog;
pub mod checkout;
pub mod dom;
pub mod events;
pub mod exports;
pub mod logging;
pub mod panel;
pub mod state;
pub mod storage;
pub mod toast;

use cart_core::CartConfig;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

/// Runs once when the storefront page instantiates the module.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Read `<script type="application/json" id="cartConfig">`, if the page has
/// one. Problems fall back to defaults and are reported once logging is up.
fn load_config() -> (CartConfig, Option<String>) {
    let Some(el) = dom::by_id("cartConfig") else {
        return (CartConfig::default(), None);
    };
    match CartConfig::from_json(&dom::text_of(&el)) {
        Ok(config) => (config, None),
        Err(err) => (CartConfig::default(), Some(err.to_string())),
    }
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let (config, config_problem) = load_config();
    logging::init(&config.log_filter);
    if let Some(problem) = config_problem {
        warn!(%problem, "using default cart config");
    }

    let els = dom::Elements::bind()?;
    let page = state::Page::new(els, config);
    if !page.store.borrow().storage().is_available() {
        warn!("local storage unavailable; cart will not survive this page");
    }

    // Bootstrap add happens before the first render.
    bootstrap::run(&page);
    page.render();
    // Mirror the normalised cart right away so dropped entries do not linger.
    if let Err(err) = page.store.borrow_mut().persist() {
        warn!(error = %err, "could not save restored cart");
    }

    events::bind_events(&page);
    catalog::bind(&page);
    checkout::bind(&page);
    back_to_top::bind(&page);
    exports::install(&page)?;

    info!(lines = page.store.borrow().len(), "cart ready");
    Ok(())
}
