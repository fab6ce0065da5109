//! Product listings on the page: store cards and the "picks" list.

use crate::dom;
use crate::state::PageHandle;
use cart_core::navigation::{CardLink, product_detail_url};
use cart_core::price::parse_price;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Where a kind of listing keeps its add button, name and price.
struct Listing {
    button: &'static str,
    container: &'static str,
    name: &'static str,
    price: &'static str,
}

static STORE_CARD: Listing = Listing {
    button: ".store-add",
    container: ".store-card",
    name: ".store-name",
    price: ".store-price",
};

static PICK: Listing = Listing {
    button: ".picks-list .add-btn",
    container: ".pick",
    name: ".pick-name",
    price: ".pick-price",
};

/// Name and price shown inside a listing. An unreadable price reads as 0.
fn scrape(container: &Element, listing: &Listing) -> Option<(String, f64)> {
    let name = dom::query_within(container, listing.name)?;
    let price = dom::query_within(container, listing.price)?;
    Some((
        dom::text_of(&name).trim().to_owned(),
        parse_price(&dom::text_of(&price)),
    ))
}

fn bind_add_buttons(page: &PageHandle, listing: &'static Listing) {
    for btn in dom::query_all(listing.button) {
        let page2 = page.clone();
        let btn2 = btn.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            // Keep the card's own navigation click from firing.
            e.stop_propagation();
            let Some(container) = dom::closest(&btn2, listing.container) else {
                return;
            };
            if let Some((name, price)) = scrape(&container, listing) {
                page2.add_with_notice(name, price);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

/// Clicking a store card (outside its add button) opens the product page.
fn bind_card_navigation(page: &PageHandle) {
    for card in dom::query_all(STORE_CARD.container) {
        let page2 = page.clone();
        let card2 = card.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            open_product_page(&page2, &card2);
        }) as Box<dyn FnMut(_)>);
        let _ = card.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

fn open_product_page(page: &PageHandle, card: &Element) {
    let link = dom::attr(card, "data-link");
    let image = dom::attr(card, "data-image");
    let price_text = dom::attr(card, "data-price")
        .or_else(|| dom::query_within(card, STORE_CARD.price).map(|el| dom::text_of(&el)))
        .unwrap_or_default();

    let location = dom::window().location();
    let href = location.href().unwrap_or_default();
    let target = CardLink {
        link: link.as_deref(),
        image: image.as_deref(),
        price_text: &price_text,
    };
    match product_detail_url(&href, &target, &page.config.product_page) {
        Ok(url) => {
            let _ = location.set_href(&url);
        }
        Err(err) => warn!(error = %err, "could not build product page link"),
    }
}

pub fn bind(page: &PageHandle) {
    bind_add_buttons(page, &STORE_CARD);
    bind_card_navigation(page);
    bind_add_buttons(page, &PICK);
}
