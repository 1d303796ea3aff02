//! Property tests for cart merging and totals.

use proptest::prelude::*;
use shopcart_commerce::prelude::*;
use shopcart_store::MemoryStore;

fn catalog() -> Catalog {
    let products = (1..=5)
        .map(|id| {
            let price = Money::from_cents(id * 125 + 9);
            Product::new(ProductId::new(id), format!("Item {id}"), price).unwrap()
        })
        .collect();
    Catalog::from_products(products).unwrap()
}

proptest! {
    #[test]
    fn test_lines_unique_and_quantities_summed(
        adds in prop::collection::vec((1i64..=5, 1i64..=50), 0..40)
    ) {
        let service =
            CartService::new(MemoryStore::with_value(catalog()), MemoryStore::<Cart>::new());

        for (id, qty) in &adds {
            service.add_to_cart(ProductId::new(*id), *qty).unwrap();
        }

        let cart = service.view_cart().unwrap();
        let mut seen = std::collections::HashSet::new();
        for line in cart.lines() {
            prop_assert!(seen.insert(line.id));
            let expected: i64 = adds
                .iter()
                .filter(|(id, _)| *id == line.id.get())
                .map(|(_, q)| q)
                .sum();
            prop_assert_eq!(line.qty.get(), expected);
        }

        let distinct: std::collections::HashSet<i64> = adds.iter().map(|(id, _)| *id).collect();
        prop_assert_eq!(cart.len(), distinct.len());
    }

    #[test]
    fn test_non_positive_quantity_never_writes(qty in i64::MIN..=0) {
        let cart = MemoryStore::<Cart>::new();
        let service = CartService::new(MemoryStore::with_value(catalog()), &cart);

        let result = service.add_to_cart(ProductId::new(1), qty);

        prop_assert!(matches!(result, Err(CommerceError::InvalidQuantity(q)) if q == qty));
        prop_assert_eq!(cart.write_count(), 0);
    }
}
