//! Transient "added to cart" notice.
//!
//! Showing a new notice replaces the pending hide timer; dropping a
//! `gloo_timers` `Timeout` cancels it, so notices never stack.

use crate::dom;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use web_sys::Element;

const FALLBACK_MESSAGE: &str = "Food added to cart";

pub struct Toast {
    el: Option<Element>,
    duration_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Toast {
    pub fn new(el: Option<Element>, duration_ms: u32) -> Self {
        Self {
            el,
            duration_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn show(&self, message: &str) {
        let Some(el) = &self.el else {
            return;
        };
        let message = if message.trim().is_empty() {
            FALLBACK_MESSAGE
        } else {
            message
        };
        dom::set_text(el, message);
        dom::add_class(el, "visible");

        let hide = el.clone();
        let timeout = Timeout::new(self.duration_ms, move || {
            dom::remove_class(&hide, "visible");
        });
        // Replacing the old timeout drops, and thereby clears, it.
        *self.pending.borrow_mut() = Some(timeout);
    }
}
