//! Aggregation tests for estimator-core.

use estimator_core::{
    catalog::gst_rate, compute_totals, group_by_category, CategoryId, LineItem,
};
use rust_decimal::Decimal;

fn item(id: &str, category: CategoryId, unit_ex: Decimal, quantity: u32) -> LineItem {
    LineItem {
        id: id.to_string(),
        category,
        description: format!("Test item {id}"),
        description_zh: None,
        details: None,
        details_zh: None,
        quantity,
        unit_price_ex: unit_ex,
        total_price_inc: LineItem::inc_tax(unit_ex * Decimal::from(quantity), gst_rate()),
        attachments: Vec::new(),
    }
}

#[test]
fn totals_sum_unit_times_quantity() {
    let items = vec![
        item("a", CategoryId::MinorBath, Decimal::from(350), 2),
        item("b", CategoryId::Maintenance, Decimal::from(440), 1),
    ];
    let totals = compute_totals(&items, gst_rate());

    assert_eq!(totals.subtotal_ex, Decimal::from(1140));
    assert_eq!(totals.gst, Decimal::from(114));
    assert_eq!(totals.grand_total_inc, Decimal::from(1254));
}

#[test]
fn totals_of_empty_ledger_are_zero() {
    let totals = compute_totals(&[], gst_rate());
    assert_eq!(totals.subtotal_ex, Decimal::ZERO);
    assert_eq!(totals.gst, Decimal::ZERO);
    assert_eq!(totals.grand_total_inc, Decimal::ZERO);
}

#[test]
fn aggregation_is_idempotent() {
    let items = vec![
        item("a", CategoryId::Ramp, Decimal::new(478_920, 2), 1),
        item("b", CategoryId::Handrail, Decimal::from(185), 3),
    ];
    let first = compute_totals(&items, gst_rate());
    let second = compute_totals(&items, gst_rate());
    assert_eq!(first, second);
}

#[test]
fn grouping_preserves_first_seen_category_order() {
    // Added in order [ramp, handrail, ramp, maintenance].
    let items = vec![
        item("r1", CategoryId::Ramp, Decimal::from(1400), 1),
        item("h1", CategoryId::Handrail, Decimal::from(185), 1),
        item("r2", CategoryId::Ramp, Decimal::from(2000), 1),
        item("m1", CategoryId::Maintenance, Decimal::from(440), 1),
    ];
    let groups = group_by_category(&items);

    let categories: Vec<_> = groups.iter().map(|(cat, _)| *cat).collect();
    assert_eq!(
        categories,
        vec![
            CategoryId::Ramp,
            CategoryId::Handrail,
            CategoryId::Maintenance
        ]
    );

    let ramp_ids: Vec<_> = groups[0].1.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ramp_ids, vec!["r1", "r2"]);
}

#[test]
fn grouping_of_empty_ledger_is_empty() {
    assert!(group_by_category(&[]).is_empty());
}
