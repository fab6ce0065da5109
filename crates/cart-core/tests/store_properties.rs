use cart_core::persist::decode_items;
use cart_core::{CartCommand, CartStore, InMemoryStorage, LineItem};
use proptest::collection::vec;
use proptest::prelude::*;

const KEY: &str = "cartItems";
const PROPTEST_CASES: u32 = 128;

fn product() -> impl Strategy<Value = (String, f64)> {
    (
        prop::sample::select(vec!["Burger", "Fries", "Iced Tea", "Halo-Halo"]),
        prop::sample::select(vec![0.0, 45.0, 50.0, 75.5, 120.0]),
    )
        .prop_map(|(name, price)| (name.to_owned(), price))
}

fn command() -> impl Strategy<Value = CartCommand> {
    prop_oneof![
        3 => product().prop_map(|(name, price)| CartCommand::Add { name, price }),
        2 => (0usize..6).prop_map(CartCommand::Increment),
        2 => (0usize..6).prop_map(CartCommand::Decrement),
        1 => (0usize..6).prop_map(CartCommand::Remove),
        2 => (0usize..6, any::<bool>())
            .prop_map(|(index, selected)| CartCommand::SetSelected { index, selected }),
        1 => any::<bool>().prop_map(CartCommand::SetAllSelected),
        1 => Just(CartCommand::Clear),
    ]
}

fn mirrored(store: &CartStore<InMemoryStorage>) -> Vec<LineItem> {
    decode_items(store.storage().get(KEY))
        .map(|decoded| decoded.items)
        .unwrap_or_default()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn invariants_hold_after_any_command_sequence(commands in vec(command(), 0..40)) {
        let mut store = CartStore::new(InMemoryStorage::new(), KEY);
        for command in commands {
            store.apply(command);

            prop_assert!(store.items().iter().all(|item| item.quantity >= 1));
            prop_assert_eq!(mirrored(&store), store.items().to_vec());

            for (i, a) in store.items().iter().enumerate() {
                for b in &store.items()[i + 1..] {
                    prop_assert!(!a.matches(&b.name, b.price));
                }
            }

            let view = store.render("₱");
            let expected: f64 = store
                .items()
                .iter()
                .filter(|item| item.selected)
                .map(|item| item.price * f64::from(item.quantity))
                .sum();
            prop_assert_eq!(view.subtotal, expected);
            prop_assert_eq!(
                view.all_selected,
                !store.is_empty() && store.items().iter().all(|item| item.selected)
            );
        }
    }

    #[test]
    fn reload_preserves_normalized_state(commands in vec(command(), 1..30)) {
        let mut store = CartStore::new(InMemoryStorage::new(), KEY);
        for command in commands {
            store.apply(command);
        }
        let before = store.storage().get(KEY).map(str::to_owned);

        let mut reloaded = CartStore::load(store.storage().clone(), KEY);
        prop_assert_eq!(reloaded.items(), store.items());
        if before.is_some() {
            reloaded.persist().expect("in-memory write cannot fail");
            prop_assert_eq!(reloaded.storage().get(KEY).map(str::to_owned), before);
        }
    }

    #[test]
    fn repeated_adds_collapse_into_one_line((name, price) in product(), times in 1u32..20) {
        let mut store = CartStore::new(InMemoryStorage::new(), KEY);
        for _ in 0..times {
            store.add(&name, price);
        }
        prop_assert_eq!(store.len(), 1);
        prop_assert_eq!(store.items()[0].quantity, times);
    }
}
