//! Property-based tests for the resource browsing core.
//!
//! Covers text search, the inventory adjustment rule and the batch selection
//! laws across generated inputs.

use chrono::NaiveDateTime;
use proptest::prelude::*;
use rust_decimal::Decimal;
use transport_hub::models::{InventoryItem, Order, OrderStatus, StockStatus};
use transport_hub::resource::filter::matches_text;
use transport_hub::resource::{ListFilter, MultiSelection, ResourceBrowser, Selection};
use transport_hub::services::inventory::parse_quantity;

fn field_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,-]{0,24}"
}

fn order_strategy() -> impl Strategy<Value = Order> {
    (field_strategy(), field_strategy(), field_strategy()).prop_map(|(code, from, to)| Order {
        id: 1,
        code,
        from,
        to,
        status: OrderStatus::Created,
        shipper: "Unassigned".to_string(),
        fee: Decimal::ZERO,
        placed_at: NaiveDateTime::default(),
    })
}

fn item(on_hand: u32, reserved: u32, reorder_point: u32) -> InventoryItem {
    InventoryItem::new(
        "SKU-TEST",
        "Test item",
        "Dry Storage",
        "Zone A - Rack 1",
        "WH-001",
        on_hand,
        reserved,
        reorder_point,
    )
}

// Property: search is a case-insensitive substring test over the searchable fields
proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn search_matches_iff_some_field_contains_query(order in order_strategy(), query in "[A-Za-z0-9 -]{0,4}") {
        let lowered = query.to_lowercase();
        let expected = [&order.code, &order.from, &order.to]
            .iter()
            .any(|field| field.to_lowercase().contains(&lowered));
        prop_assert_eq!(matches_text(&order, &query), expected);
    }

    #[test]
    fn empty_query_matches_everything(order in order_strategy()) {
        prop_assert!(matches_text(&order, ""));
        prop_assert!(ListFilter::<OrderStatus>::new().matches(&order));
    }

    #[test]
    fn field_slices_always_match_in_any_case(order in order_strategy(), start in 0usize..24, len in 1usize..6) {
        let code = &order.code;
        prop_assume!(start + len <= code.len());
        let upper = code[start..start + len].to_uppercase();
        prop_assert!(matches_text(&order, &upper), "{} should match {}", upper, code);
    }
}

// Property: adjusting an item sets on-hand and recomputes the derived fields
proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn adjustment_recomputes_derived_fields(
        on_hand in 0u32..10_000,
        reserved in 0u32..10_000,
        reorder_point in 0u32..500,
        new_quantity in 0u32..10_000,
    ) {
        let original = item(on_hand, reserved, reorder_point);
        let adjusted = original.adjusted(new_quantity);

        prop_assert_eq!(adjusted.on_hand, new_quantity);
        prop_assert_eq!(adjusted.available, new_quantity.saturating_sub(reserved));
        prop_assert_eq!(adjusted.status, StockStatus::classify(new_quantity, reorder_point));
        prop_assert_eq!(&adjusted.sku, &original.sku);
        prop_assert_eq!(adjusted.reserved, original.reserved);
        prop_assert!(adjusted.is_consistent());
    }

    #[test]
    fn only_zero_is_out_of_stock(on_hand in 0u32..10_000, reorder_point in 0u32..500) {
        let status = StockStatus::classify(on_hand, reorder_point);
        prop_assert_eq!(status == StockStatus::OutOfStock, on_hand == 0);
    }

    #[test]
    fn typed_quantities_parse_back(quantity in any::<u32>()) {
        prop_assert_eq!(parse_quantity(&quantity.to_string()), quantity);
    }

    #[test]
    fn negative_quantities_coerce_to_zero(quantity in 1u32..1_000_000) {
        prop_assert_eq!(parse_quantity(&format!("-{}", quantity)), 0);
    }
}

// Property: batch selection laws
proptest! {
    #[test]
    fn toggling_twice_restores_selection(
        initial in prop::collection::btree_set(0u32..100, 0..20),
        id in 0u32..100,
    ) {
        let mut selection = MultiSelection::new();
        selection.select_all(initial.iter().copied());
        let before = selection.clone();

        selection.toggle(id);
        selection.toggle(id);
        prop_assert_eq!(selection, before);
    }

    #[test]
    fn select_all_then_clear_is_empty(ids in prop::collection::vec(any::<u32>(), 0..200)) {
        let mut selection = MultiSelection::new();
        selection.select_all(ids);
        selection.clear();
        prop_assert!(selection.is_empty());
        prop_assert_eq!(selection.len(), 0);
    }

    #[test]
    fn browser_selection_never_outlives_records(
        keep in prop::collection::vec(any::<bool>(), 8),
    ) {
        let orders = transport_hub::fixtures::orders();
        let mut browser = ResourceBrowser::new(orders.clone());
        browser.select_all_visible();

        let remaining: Vec<Order> = orders
            .into_iter()
            .zip(keep.iter())
            .filter(|(_, keep)| **keep)
            .map(|(order, _)| order)
            .collect();
        let expected_dropped = keep.iter().filter(|keep| !**keep).count();

        prop_assert_eq!(browser.replace_all(remaining), expected_dropped);
        for id in browser.batch().iter() {
            prop_assert!(browser.store().contains(id));
        }
    }
}
