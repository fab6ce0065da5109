//! The cart store: an ordered list of lines mirrored write-through into
//! storage.

use crate::command::CartCommand;
use crate::error::StorageError;
use crate::item::LineItem;
use crate::persist::{decode_items, encode_items};
use crate::storage::CartStorage;
use crate::view::CartView;
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Appended { index: usize },
    Incremented { index: usize, quantity: u32 },
}

pub struct CartStore<S> {
    storage: S,
    key: String,
    items: Vec<LineItem>,
}

impl<S: CartStorage> CartStore<S> {
    /// An empty cart mirrored under `key`. Nothing is read or written.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            items: Vec::new(),
        }
    }

    /// Restore the cart persisted under `key`. Unreadable or malformed state
    /// yields an empty cart; it never fails.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        let raw = match store.storage.read(&store.key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %store.key, error = %err, "could not read saved cart");
                None
            }
        };
        match decode_items(raw.as_deref()) {
            Ok(decoded) => {
                if decoded.dropped > 0 {
                    warn!(key = %store.key, dropped = decoded.dropped, "dropped invalid saved cart entries");
                }
                store.items = decoded.items;
            }
            Err(reason) => {
                if raw.is_some() {
                    warn!(key = %store.key, %reason, "discarding saved cart");
                }
            }
        }
        store
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn selected_items(&self) -> Vec<LineItem> {
        self.items.iter().filter(|item| item.selected).cloned().collect()
    }

    /// Increment the line matching `name` and `price`, or append a new
    /// selected line. Non-finite or negative prices are stored as `0`.
    pub fn add(&mut self, name: &str, price: f64) -> AddOutcome {
        let price = if price.is_finite() && price >= 0.0 { price } else { 0.0 };
        let outcome = match self.items.iter().position(|item| item.matches(name, price)) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                AddOutcome::Incremented {
                    index,
                    quantity: item.quantity,
                }
            }
            None => {
                self.items.push(LineItem::new(name, price));
                AddOutcome::Appended {
                    index: self.items.len() - 1,
                }
            }
        };
        self.sync();
        outcome
    }

    /// Shift a line's quantity by `delta`, never below 1. Returns whether the
    /// quantity changed; an out-of-range index does nothing.
    pub fn set_quantity(&mut self, index: usize, delta: i64) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        let next = (i64::from(item.quantity) + delta).clamp(1, i64::from(u32::MAX));
        let next = u32::try_from(next).unwrap_or(u32::MAX);
        if next == item.quantity {
            return false;
        }
        item.quantity = next;
        self.sync();
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.sync();
        Some(removed)
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        if item.selected == selected {
            return false;
        }
        item.selected = selected;
        self.sync();
        true
    }

    pub fn set_all_selected(&mut self, selected: bool) -> bool {
        let mut changed = false;
        for item in &mut self.items {
            changed |= item.selected != selected;
            item.selected = selected;
        }
        if changed {
            self.sync();
        }
        changed
    }

    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        self.sync();
        true
    }

    /// Apply one gesture. Returns whether the cart changed (and was persisted).
    pub fn apply(&mut self, command: CartCommand) -> bool {
        debug!(?command, "cart command");
        match command {
            CartCommand::Add { name, price } => {
                self.add(&name, price);
                true
            }
            CartCommand::Increment(index) => self.set_quantity(index, 1),
            CartCommand::Decrement(index) => self.set_quantity(index, -1),
            CartCommand::Remove(index) => self.remove(index).is_some(),
            CartCommand::SetSelected { index, selected } => self.set_selected(index, selected),
            CartCommand::SetAllSelected(selected) => self.set_all_selected(selected),
            CartCommand::Clear => self.clear(),
        }
    }

    /// Write the whole list to storage.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let encoded = encode_items(&self.items)?;
        self.storage.write(&self.key, &encoded)
    }

    pub fn render(&self, currency_symbol: &str) -> CartView {
        CartView::project(&self.items, currency_symbol)
    }

    // Memory stays authoritative when the mirror cannot be written.
    fn sync(&mut self) {
        if let Err(err) = self.persist() {
            error!(key = %self.key, error = %err, "failed to save cart");
        }
    }
}
