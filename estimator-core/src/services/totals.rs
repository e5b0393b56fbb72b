//! Quote aggregation: totals and category grouping.
//!
//! Both functions are pure over a ledger snapshot and recomputed on every
//! call — nothing is cached, so results always reflect the latest ledger.
//! At the expected scale of tens of items per quote that trade is free.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CategoryId, LineItem};

/// Derived quote totals. Never stored; always recomputed from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteTotals {
    pub subtotal_ex: Decimal,
    pub gst: Decimal,
    pub grand_total_inc: Decimal,
}

/// Sum the ledger: subtotal ex GST, the GST amount, and the grand total.
pub fn compute_totals(items: &[LineItem], gst_rate: Decimal) -> QuoteTotals {
    let subtotal_ex: Decimal = items.iter().map(LineItem::line_total_ex).sum();
    let gst = subtotal_ex * gst_rate;
    QuoteTotals {
        subtotal_ex,
        gst,
        grand_total_inc: subtotal_ex + gst,
    }
}

/// Partition items by category, preserving first-seen category order and
/// insertion order within each group.
pub fn group_by_category(items: &[LineItem]) -> Vec<(CategoryId, Vec<&LineItem>)> {
    let mut groups: Vec<(CategoryId, Vec<&LineItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(cat, _)| *cat == item.category) {
            Some((_, group)) => group.push(item),
            None => groups.push((item.category, vec![item])),
        }
    }
    groups
}
