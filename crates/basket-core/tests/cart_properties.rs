//! Property tests for the cart store: quantity bounds and totals.

use basket_core::{CartError, CartStore, LineItem, Money, Outcome, Quantity, TaxRate};
use proptest::prelude::*;

fn store_from(specs: &[(i64, u8)]) -> CartStore {
    let items = specs.iter().enumerate().map(|(i, &(pence, qty))| {
        LineItem::new(
            format!("Item {i}"),
            Money::from_pence(pence),
            Quantity::new(qty).unwrap(),
        )
        .unwrap()
    });
    CartStore::with_items(items, TaxRate::standard_vat()).unwrap()
}

fn cart_specs() -> impl Strategy<Value = Vec<(i64, u8)>> {
    prop::collection::vec((0i64..10_000, 1u8..=10), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    /// Property: increment adds one unless already at 10.
    #[test]
    fn increment_respects_upper_bound(specs in cart_specs(), pick in any::<prop::sample::Index>()) {
        let mut store = store_from(&specs);
        let index = pick.index(specs.len());
        let name = format!("Item {index}");
        let before = specs[index].1;

        let outcome = store.increment(&name).unwrap();
        let after = store.get(&name).unwrap().quantity.get();

        if before == 10 {
            prop_assert_eq!(after, 10);
            prop_assert_eq!(outcome, Outcome::Unchanged);
        } else {
            prop_assert_eq!(after, before + 1);
            prop_assert_eq!(outcome, Outcome::Changed);
        }
    }

    /// Property: decrement subtracts one unless already at 1.
    #[test]
    fn decrement_respects_lower_bound(specs in cart_specs(), pick in any::<prop::sample::Index>()) {
        let mut store = store_from(&specs);
        let index = pick.index(specs.len());
        let name = format!("Item {index}");
        let before = specs[index].1;

        store.decrement(&name).unwrap();
        let after = store.get(&name).unwrap().quantity.get();

        if before == 1 {
            prop_assert_eq!(after, 1);
        } else {
            prop_assert_eq!(after, before - 1);
        }
    }

    /// Property: any text that is not "" or 1..=10 leaves the store untouched.
    #[test]
    fn invalid_quantity_text_is_rejected(specs in cart_specs(), raw in "\\PC{0,4}") {
        let valid = raw.is_empty() || (1..=10).any(|n: u8| n.to_string() == raw);
        prop_assume!(!valid);

        let mut store = store_from(&specs);
        let before = store.clone();
        let result = store.set_quantity("Item 0", &raw);

        let is_invalid_input = matches!(result, Err(CartError::InvalidQuantityInput { .. }));
        prop_assert!(is_invalid_input);
        prop_assert_eq!(store, before);
    }

    /// Property: subtotal is the exact sum of line totals and total = subtotal + vat.
    #[test]
    fn totals_are_consistent(specs in cart_specs()) {
        let store = store_from(&specs);

        let expected_units: i64 = specs.iter().map(|&(pence, qty)| pence * 100 * i64::from(qty)).sum();
        prop_assert_eq!(store.subtotal().units(), expected_units);

        let expected_vat = store.subtotal().to_f64() * 0.20;
        prop_assert!((store.vat().to_f64() - expected_vat).abs() < 1e-9);
        prop_assert_eq!(store.total(), store.subtotal() + store.vat());
    }

    /// Property: removing an item shrinks the cart by one and the name is gone.
    #[test]
    fn remove_drops_exactly_one(specs in cart_specs(), pick in any::<prop::sample::Index>()) {
        let mut store = store_from(&specs);
        let index = pick.index(specs.len());
        let name = format!("Item {index}");

        store.remove_item(&name).unwrap();

        prop_assert_eq!(store.len(), specs.len() - 1);
        prop_assert!(store.get(&name).is_none());
    }

    /// Property: checkout snapshots are stable without mutation.
    #[test]
    fn checkout_payload_is_idempotent(specs in cart_specs()) {
        let store = store_from(&specs);
        prop_assert_eq!(store.checkout_payload(), store.checkout_payload());
    }
}

#[test]
fn seed_scenarios() {
    let mut store = store_from(&[(199, 1), (299, 2), (399, 1)]);
    assert_eq!(store.subtotal(), Money::from_pence(1196));
    assert_eq!(store.vat(), "2.392".parse::<Money>().unwrap());
    assert_eq!(store.total(), "14.352".parse::<Money>().unwrap());

    let mut removed = store.clone();
    removed.remove_item("Item 1").unwrap();
    assert_eq!(removed.subtotal(), Money::from_pence(598));

    store.increment("Item 0").unwrap();
    assert_eq!(store.subtotal(), Money::from_pence(1395));
}
