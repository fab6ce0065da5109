//! Page-lifetime state.
//!
//! One [`Page`] is built at startup and shared by every event closure through
//! an `Rc` (WASM is single-threaded). Store borrows never outlive a single
//! callback.

use crate::dom::Elements;
use crate::panel;
use crate::storage::BrowserStorage;
use crate::toast::Toast;
use cart_core::{CartCommand, CartConfig, CartStore};
use std::cell::RefCell;
use std::rc::Rc;

pub type PageHandle = Rc<Page>;

pub struct Page {
    pub els: Elements,
    pub config: CartConfig,
    pub store: RefCell<CartStore<BrowserStorage>>,
    pub toast: Toast,
}

impl Page {
    pub fn new(els: Elements, config: CartConfig) -> PageHandle {
        let store = CartStore::load(BrowserStorage::local(), config.cart_key.clone());
        let toast = Toast::new(els.add_toast.clone(), config.toast_ms);
        Rc::new(Page {
            els,
            config,
            store: RefCell::new(store),
            toast,
        })
    }

    /// Apply one gesture and redraw the panel if anything changed, or if the
    /// gesture toggled a checkbox the view has to reconcile.
    pub fn dispatch(&self, command: CartCommand) -> bool {
        let redraw = command.redraw_always();
        let changed = self.store.borrow_mut().apply(command);
        if changed || redraw {
            self.render();
        }
        changed
    }

    /// Add a product from a page gesture and confirm it with the toast.
    pub fn add_with_notice(&self, name: String, price: f64) {
        let notice = if name.trim().is_empty() {
            String::new()
        } else {
            format!("{name} added to cart")
        };
        self.dispatch(CartCommand::Add { name, price });
        self.toast.show(&notice);
    }

    pub fn render(&self) {
        let view = self.store.borrow().render(&self.config.currency_symbol);
        panel::draw(&self.els, &view);
    }
}
