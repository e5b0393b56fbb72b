//! Minor bathroom modification pricing.

use rust_decimal::Decimal;

use crate::catalog::{LabourRates, PricingCatalog};
use crate::error::QuoteError;
use crate::models::{CategoryId, LineItem, MinorBathForm, WALL_SCANNING_FEE_ID};

/// Price a minor-bath modification from the catalog.
///
/// Emits the selected option at the requested quantity, plus — when the
/// wall-scanning flag is set and no scanning fee is already on the quote —
/// a second fixed-price fee item under its well-known id. This is the one
/// rule that reads the current ledger, passed in as an explicit snapshot so
/// the "at most one scanning fee per quote" check stays testable.
pub fn price_minor_bath(
    form: &MinorBathForm,
    catalog: &PricingCatalog,
    rates: &LabourRates,
    gst_rate: Decimal,
    existing_items: &[LineItem],
) -> Result<Vec<LineItem>, QuoteError> {
    if form.quantity < 1 {
        return Err(QuoteError::validation(
            "quantity",
            "quantity must be at least 1",
        ));
    }
    let option = catalog.minor_bath_option(&form.option_id)?;

    let line_total_ex = option.price_ex * Decimal::from(form.quantity);
    let mut items = vec![LineItem {
        id: LineItem::new_id(),
        category: CategoryId::MinorBath,
        description: option.label.to_string(),
        description_zh: option.label_zh.map(str::to_string),
        details: None,
        details_zh: None,
        quantity: form.quantity,
        unit_price_ex: option.price_ex,
        total_price_inc: LineItem::inc_tax(line_total_ex, gst_rate),
        attachments: Vec::new(),
    }];

    let fee_exists = existing_items.iter().any(|i| i.id == WALL_SCANNING_FEE_ID);
    if form.wall_scanning && !fee_exists {
        items.push(LineItem {
            id: WALL_SCANNING_FEE_ID.to_string(),
            category: CategoryId::MinorBath,
            description: "Wall Scanning Fee".to_string(),
            description_zh: Some("牆壁掃描費".to_string()),
            details: None,
            details_zh: None,
            quantity: 1,
            unit_price_ex: rates.wall_scanning,
            total_price_inc: LineItem::inc_tax(rates.wall_scanning, gst_rate),
            attachments: Vec::new(),
        });
    }

    Ok(items)
}
