//! Cart panel: drawing the view and opening/closing the drawer.

use crate::dom::{self, Elements};
use cart_core::CartView;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Redraw rows, subtotal, badges and the select-all box from `view`.
pub fn draw(els: &Elements, view: &CartView) {
    dom::set_inner_html(&els.cart_items, &view.to_html());
    dom::set_text(&els.cart_total, &view.subtotal_display);

    let count = view.total_quantity.to_string();
    for badge in [&els.cart_count, &els.cart_fab_count].into_iter().flatten() {
        dom::set_text(badge, &count);
    }
    els.cart_select_all.set_checked(view.all_selected);
}

/// Show overlay and panel; the `open` class lands on the next frame so the
/// slide-in transition runs.
pub fn open(els: &Elements) {
    dom::set_hidden(&els.cart_overlay, false);
    dom::set_hidden(&els.cart_panel, false);

    let panel = els.cart_panel.clone();
    let cb = Closure::once(move || dom::add_class(&panel, "open"));
    if dom::window()
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_err()
    {
        dom::add_class(&els.cart_panel, "open");
    }
    cb.forget();
}

pub fn close(els: &Elements) {
    dom::remove_class(&els.cart_panel, "open");
    dom::set_hidden(&els.cart_overlay, true);
    dom::set_hidden(&els.cart_panel, true);
}
