//! One-shot cart setup from page-load query parameters.
//!
//! The caller rewrites the page URL afterwards when `strip_query` is set, so a
//! reload sees no parameters and the add does not repeat.

use crate::price::leading_number;
use crate::storage::CartStorage;
use crate::store::{AddOutcome, CartStore};
use tracing::info;

pub const ADD_ITEM_PARAM: &str = "addItem";
pub const ADD_PRICE_PARAM: &str = "addPrice";
pub const OPEN_CART_PARAM: &str = "openCart";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bootstrap {
    pub add: Option<(String, f64)>,
    pub open_cart: bool,
    /// The query string carried at least one parameter.
    pub strip_query: bool,
}

impl Bootstrap {
    /// Parse a query string, with or without its leading `?`. The first
    /// occurrence of each parameter wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut name = None;
        let mut price = None;
        let mut open = None;
        let mut any = false;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            any = true;
            match &*key {
                ADD_ITEM_PARAM if name.is_none() => name = Some(value.into_owned()),
                ADD_PRICE_PARAM if price.is_none() => price = Some(value.into_owned()),
                OPEN_CART_PARAM if open.is_none() => open = Some(value.into_owned()),
                _ => {}
            }
        }

        // A zero price reads the same as a missing one.
        let price = price
            .as_deref()
            .and_then(leading_number)
            .filter(|p| *p > 0.0);
        let add = match (name, price) {
            (Some(name), Some(price)) if !name.is_empty() => Some((name, price)),
            _ => None,
        };

        Self {
            add,
            open_cart: open.as_deref() == Some("1"),
            strip_query: any,
        }
    }

    /// Perform the bootstrap add, if any.
    pub fn apply<S: CartStorage>(&self, store: &mut CartStore<S>) -> Option<AddOutcome> {
        let (name, price) = self.add.as_ref()?;
        info!(%name, price, "adding item from page link");
        Some(store.add(name, *price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStorage;

    #[test]
    fn parses_add_and_open() {
        let boot = Bootstrap::from_query("?addItem=Fish%20%26%20Chips&addPrice=99.5&openCart=1");
        assert_eq!(boot.add, Some(("Fish & Chips".to_owned(), 99.5)));
        assert!(boot.open_cart);
        assert!(boot.strip_query);
    }

    #[test]
    fn plus_decodes_to_space() {
        let boot = Bootstrap::from_query("addItem=Iced+Tea&addPrice=45");
        assert_eq!(boot.add, Some(("Iced Tea".to_owned(), 45.0)));
        assert!(!boot.open_cart);
    }

    #[test]
    fn unusable_price_or_name_skips_add() {
        for query in [
            "?addItem=Burger",
            "?addItem=Burger&addPrice=abc",
            "?addItem=Burger&addPrice=0",
            "?addItem=Burger&addPrice=-5",
            "?addItem=&addPrice=10",
            "?addPrice=10",
        ] {
            let boot = Bootstrap::from_query(query);
            assert_eq!(boot.add, None, "{query}");
            assert!(boot.strip_query, "{query}");
        }
    }

    #[test]
    fn price_reads_leading_number() {
        let boot = Bootstrap::from_query("?addItem=Burger&addPrice=120php");
        assert_eq!(boot.add, Some(("Burger".to_owned(), 120.0)));
    }

    #[test]
    fn open_cart_requires_one() {
        assert!(!Bootstrap::from_query("?openCart=true").open_cart);
        assert!(!Bootstrap::from_query("?openCart=").open_cart);
        assert!(Bootstrap::from_query("?openCart=1&openCart=0").open_cart);
    }

    #[test]
    fn empty_query_does_nothing() {
        assert_eq!(Bootstrap::from_query(""), Bootstrap::default());
        assert_eq!(Bootstrap::from_query("?"), Bootstrap::default());
    }

    #[test]
    fn unrelated_params_still_strip() {
        let boot = Bootstrap::from_query("?utm_source=mail");
        assert!(boot.strip_query);
        assert_eq!(boot.add, None);
    }

    #[test]
    fn add_happens_once_across_reload() {
        let mut store = CartStore::new(InMemoryStorage::new(), "cartItems");
        let boot = Bootstrap::from_query("?addItem=Burger&addPrice=120&openCart=1");
        assert!(boot.apply(&mut store).is_some());
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].quantity, 1);

        // The page rewrote its URL to the bare path; reloading sees no query.
        let mut reloaded = CartStore::load(store.storage().clone(), "cartItems");
        let again = Bootstrap::from_query("");
        assert!(again.apply(&mut reloaded).is_none());
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.items()[0].quantity, 1);
    }
}
