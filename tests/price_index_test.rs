//! Price Index Tests
//!
//! Scenario-driven tests against the public surface of [`PriceIndex`].

use pricedex::{Error, Price, PriceIndex, Product, ProductCode};

/// Helper to build a product with a generated name.
fn product(code: &str, minor: i64) -> Product {
    Product::new(code, format!("product {code}"), Price::from_minor(minor))
}

/// Insert the given (code, minor-price) pairs, panicking on rejects.
fn build(entries: &[(&str, i64)]) -> PriceIndex {
    let mut index = PriceIndex::new();
    for &(code, minor) in entries {
        index.insert(product(code, minor)).unwrap();
    }
    index
}

fn prices(index: &PriceIndex) -> Vec<i64> {
    index.iter().map(|p| p.price.as_minor()).collect()
}

// ============================================================================
// Catalog scenario: the balanced seven
// ============================================================================

const SEVEN: &[(&str, i64)] = &[
    ("A", 50),
    ("B", 30),
    ("C", 70),
    ("D", 20),
    ("E", 40),
    ("F", 60),
    ("G", 80),
];

#[test]
fn test_seven_products_stay_shallow() {
    let index = build(SEVEN);

    assert_eq!(index.len(), 7);
    assert!(index.height() <= 3);
}

#[test]
fn test_seven_products_min_max() {
    let index = build(SEVEN);

    let min = index.min_price_product().unwrap();
    assert_eq!(min.price, Price::from_minor(20));
    assert_eq!(min.code, ProductCode::new("D"));

    let max = index.max_price_product().unwrap();
    assert_eq!(max.price, Price::from_minor(80));
    assert_eq!(max.code, ProductCode::new("G"));
}

#[test]
fn test_seven_products_range_query() {
    let index = build(SEVEN);

    let mids: Vec<i64> = index
        .products_in_range(Price::from_minor(35), Price::from_minor(65))
        .map(|p| p.price.as_minor())
        .collect();
    assert_eq!(mids, vec![40, 50, 60]);
}

// ============================================================================
// Duplicate handling
// ============================================================================

#[test]
fn test_duplicate_price_rejected() {
    let mut index = PriceIndex::new();
    index.insert(product("FIRST", 100)).unwrap();

    let err = index.insert(product("SECOND", 100)).unwrap_err();
    assert_eq!(err, Error::DuplicatePrice(Price::from_minor(100)));

    // Exactly one node at price 100 remains, under the original code.
    assert_eq!(index.len(), 1);
    let stored = index.min_price_product().unwrap();
    assert_eq!(stored.code, ProductCode::new("FIRST"));
}

#[test]
fn test_duplicate_code_rejected() {
    let mut index = PriceIndex::new();
    index.insert(product("ONLY", 100)).unwrap();

    let err = index.insert(product("ONLY", 200)).unwrap_err();
    assert_eq!(err, Error::DuplicateCode(ProductCode::new("ONLY")));
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(&"ONLY".into()).unwrap().price.as_minor(), 100);
}

// ============================================================================
// Miss behavior: remove tolerates, update_price does not
// ============================================================================

#[test]
fn test_remove_unknown_code_is_silent() {
    let mut index = build(SEVEN);
    let before = prices(&index);

    assert!(!index.remove(&"MISSING".into()));

    assert_eq!(prices(&index), before);
    assert_eq!(index.len(), 7);
}

#[test]
fn test_update_price_unknown_code_errors() {
    let mut index = build(SEVEN);
    let before = prices(&index);

    let err = index
        .update_price(&"MISSING".into(), Price::from_minor(999))
        .unwrap_err();
    assert_eq!(err, Error::ProductNotFound(ProductCode::new("MISSING")));
    assert_eq!(prices(&index), before);
}

// ============================================================================
// Structural behavior
// ============================================================================

#[test]
fn test_insert_then_remove_round_trips() {
    let mut index = build(SEVEN);
    let before = prices(&index);
    let height = index.height();

    index.insert(product("X", 55)).unwrap();
    assert!(index.remove(&"X".into()));

    assert_eq!(prices(&index), before);
    assert_eq!(index.height(), height);
}

#[test]
fn test_two_child_removal_keeps_successor_reachable() {
    let mut index = build(SEVEN);

    // The root (50) has two children; its successor (60, code F) takes
    // its place and must stay reachable through the code lookup.
    assert!(index.remove(&"A".into()));

    assert!(index.get(&"A".into()).is_none());
    let f = index.get(&"F".into()).unwrap();
    assert_eq!(f.price, Price::from_minor(60));
    assert_eq!(prices(&index), vec![20, 30, 40, 60, 70, 80]);
}

#[test]
fn test_update_price_moves_product() {
    let mut index = build(SEVEN);

    index
        .update_price(&"G".into(), Price::from_minor(10))
        .unwrap();

    let g = index.get(&"G".into()).unwrap();
    assert_eq!(g.price, Price::from_minor(10));
    assert_eq!(g.name, "product G");
    assert_eq!(index.min_price_product().unwrap().code, "G".into());
    assert_eq!(prices(&index), vec![10, 20, 30, 40, 50, 60, 70]);
}

#[test]
fn test_update_price_to_occupied_price_rejected() {
    let mut index = build(SEVEN);
    let before = prices(&index);

    let err = index
        .update_price(&"G".into(), Price::from_minor(50))
        .unwrap_err();
    assert_eq!(err, Error::DuplicatePrice(Price::from_minor(50)));

    assert_eq!(prices(&index), before);
    assert_eq!(index.get(&"G".into()).unwrap().price.as_minor(), 80);
}

#[test]
fn test_sorted_insertion_stays_balanced() {
    // Ascending inserts would produce a 128-deep list in a plain BST.
    let mut index = PriceIndex::new();
    for i in 1..=128i64 {
        index.insert(product(&format!("P{i:03}"), i)).unwrap();
    }

    assert_eq!(index.len(), 128);
    assert!(index.height() <= 10); // 1.44 * log2(130) ≈ 10.1
    assert_eq!(prices(&index), (1..=128).collect::<Vec<_>>());
}

// ============================================================================
// Range queries
// ============================================================================

#[test]
fn test_range_bounds_are_inclusive() {
    let index = build(SEVEN);

    let hits: Vec<i64> = index
        .products_in_range(Price::from_minor(20), Price::from_minor(80))
        .map(|p| p.price.as_minor())
        .collect();
    assert_eq!(hits, vec![20, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn test_range_point_query() {
    let index = build(SEVEN);

    let hits: Vec<i64> = index
        .products_in_range(Price::from_minor(50), Price::from_minor(50))
        .map(|p| p.price.as_minor())
        .collect();
    assert_eq!(hits, vec![50]);
}

#[test]
fn test_range_with_no_matches() {
    let index = build(SEVEN);

    let hits: Vec<&Product> = index
        .products_in_range(Price::from_minor(81), Price::from_minor(1000))
        .collect();
    assert!(hits.is_empty());

    let hits: Vec<&Product> = index
        .products_in_range(Price::from_minor(41), Price::from_minor(49))
        .collect();
    assert!(hits.is_empty());
}

#[test]
fn test_range_on_empty_index() {
    let index = PriceIndex::new();
    let hits: Vec<&Product> = index
        .products_in_range(Price::from_minor(0), Price::from_minor(100))
        .collect();
    assert!(hits.is_empty());
}

// ============================================================================
// Stats
// ============================================================================

#[test]
fn test_stats_track_mutations() {
    let mut index = build(SEVEN);
    index.remove(&"A".into());
    index
        .update_price(&"B".into(), Price::from_minor(31))
        .unwrap();

    let stats = index.stats();
    assert_eq!(stats.inserts, 7);
    assert_eq!(stats.removes, 1);
    assert_eq!(stats.updates, 1);

    let display = format!("{stats}");
    assert!(display.contains("inserts: 7"));
}
