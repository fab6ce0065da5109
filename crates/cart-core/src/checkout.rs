//! Handing selected lines to the checkout page.

use crate::error::CheckoutError;
use crate::item::LineItem;
use crate::persist::{decode_items, encode_items};
use crate::storage::CartStorage;
use crate::store::CartStore;
use tracing::{error, info, warn};

/// Write the selected lines to `checkout_key` and return them.
///
/// Nothing is written when no line is selected. A failed write leaves no
/// partial snapshot behind for the caller to navigate on.
pub fn hand_off<S: CartStorage>(
    store: &mut CartStore<S>,
    checkout_key: &str,
) -> Result<Vec<LineItem>, CheckoutError> {
    let selected = store.selected_items();
    if selected.is_empty() {
        return Err(CheckoutError::NothingSelected);
    }

    let encoded = encode_items(&selected).map_err(|err| CheckoutError::Storage(err.into()))?;
    if let Err(err) = store.storage_mut().write(checkout_key, &encoded) {
        error!(key = checkout_key, error = %err, "failed to save checkout snapshot");
        return Err(CheckoutError::Storage(err));
    }

    info!(key = checkout_key, lines = selected.len(), "checkout snapshot saved");
    Ok(selected)
}

/// Read the snapshot written by [`hand_off`]. Anything unreadable is an empty
/// snapshot.
pub fn read_checkout_snapshot<S: CartStorage>(storage: &S, checkout_key: &str) -> Vec<LineItem> {
    let raw = match storage.read(checkout_key) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(key = checkout_key, error = %err, "could not read checkout snapshot");
            return Vec::new();
        }
    };
    match decode_items(raw.as_deref()) {
        Ok(decoded) => decoded.items,
        Err(reason) => {
            warn!(key = checkout_key, %reason, "checkout snapshot unusable");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStorage;

    const CART: &str = "cartItems";
    const CHECKOUT: &str = "checkoutItems";

    #[test]
    fn empty_selection_blocks_without_writing() {
        let mut store = CartStore::new(InMemoryStorage::new(), CART);
        store.add("Burger", 120.0);
        store.set_all_selected(false);

        let err = hand_off(&mut store, CHECKOUT).unwrap_err();
        assert!(matches!(err, CheckoutError::NothingSelected));
        assert_eq!(err.to_string(), "Please select at least one item to checkout");
        assert!(store.storage().get(CHECKOUT).is_none());
    }

    #[test]
    fn empty_cart_blocks() {
        let mut store = CartStore::new(InMemoryStorage::new(), CART);
        assert!(matches!(
            hand_off(&mut store, CHECKOUT),
            Err(CheckoutError::NothingSelected)
        ));
    }

    #[test]
    fn snapshot_holds_selected_lines_only() -> anyhow::Result<()> {
        let mut store = CartStore::new(InMemoryStorage::new(), CART);
        store.add("Burger", 120.0);
        store.add("Burger", 120.0);
        store.add("Fries", 60.0);
        store.set_selected(1, false);

        let handed = hand_off(&mut store, CHECKOUT)?;
        assert_eq!(handed.len(), 1);
        assert_eq!(handed[0].name, "Burger");
        assert_eq!(handed[0].quantity, 2);

        assert_eq!(read_checkout_snapshot(store.storage(), CHECKOUT), handed);
        // The live mirror still has both lines.
        assert_eq!(CartStore::load(store.storage().clone(), CART).len(), 2);
        Ok(())
    }

    #[test]
    fn storage_failure_is_reported() {
        let mut store = CartStore::new(InMemoryStorage::with_quota(90), CART);
        store.add("Burger", 120.0);

        let err = hand_off(&mut store, CHECKOUT).unwrap_err();
        assert!(matches!(err, CheckoutError::Storage(_)));
        assert_eq!(err.to_string(), "Error saving cart data. Please try again.");
        assert!(store.storage().get(CHECKOUT).is_none());
    }

    #[test]
    fn unreadable_snapshot_is_empty() {
        let storage = InMemoryStorage::new().seeded(CHECKOUT, "{oops");
        assert!(read_checkout_snapshot(&storage, CHECKOUT).is_empty());
        assert!(read_checkout_snapshot(&InMemoryStorage::new(), CHECKOUT).is_empty());
    }
}
