//! Major bathroom modification pricing.

use rust_decimal::Decimal;

use crate::catalog::{standard_package_rate, PricingCatalog};
use crate::error::{FieldError, QuoteError};
use crate::models::{CategoryId, LineItem, MajorBathForm};

const STANDARD_PACKAGE_DESC_EN: &str =
    "Includes demolition, waterproofing, tiling, standard plumbing, electrical & installation cost";
const STANDARD_PACKAGE_DESC_ZH: &str = "包括拆除、防水、瓷磚、標準管道、電氣及安裝費用";

/// Price a major bathroom modification.
///
/// Always emits exactly one flat-rate standard package item (dimensions are
/// folded into the description only), plus one item per selected inclusion,
/// each priced from its catalog entry at quantity 1 with GST applied per
/// item. All three dimensions are validated independently so the caller
/// knows every field to flag, and every inclusion id is resolved before any
/// item is produced — an unknown id aborts the whole operation.
pub fn price_major_bath(
    form: &MajorBathForm,
    catalog: &PricingCatalog,
    gst_rate: Decimal,
) -> Result<Vec<LineItem>, QuoteError> {
    let mut field_errors = Vec::new();
    for (field, value) in [
        ("length", form.length_mm),
        ("width", form.width_mm),
        ("height", form.height_mm),
    ] {
        if value <= Decimal::ZERO {
            field_errors.push(FieldError::new(field, "must be greater than zero"));
        }
    }
    if !field_errors.is_empty() {
        return Err(QuoteError::Validation(field_errors));
    }

    // Resolve every inclusion up front; no partial adds on a bad id.
    let inclusions = form
        .inclusions
        .iter()
        .map(|id| catalog.major_bath_inclusion(id))
        .collect::<Result<Vec<_>, _>>()?;

    let dims = format!(
        "{}x{}x{}",
        form.length_mm, form.width_mm, form.height_mm
    );
    let mut items = vec![LineItem {
        id: LineItem::new_id(),
        category: CategoryId::MajorBath,
        description: "Standard Package".to_string(),
        description_zh: Some("標準套餐".to_string()),
        details: Some(format!("{STANDARD_PACKAGE_DESC_EN} [{dims}mm]")),
        details_zh: Some(format!("{STANDARD_PACKAGE_DESC_ZH} [{dims}毫米]")),
        quantity: 1,
        unit_price_ex: standard_package_rate(),
        total_price_inc: LineItem::inc_tax(standard_package_rate(), gst_rate),
        attachments: Vec::new(),
    }];

    for entry in inclusions {
        items.push(LineItem {
            id: LineItem::new_id(),
            category: CategoryId::MajorBath,
            description: format!("Major Bath - {}", entry.label),
            description_zh: Some(format!(
                "主要浴室 - {}",
                entry.label_zh.unwrap_or(entry.label)
            )),
            details: None,
            details_zh: None,
            quantity: 1,
            unit_price_ex: entry.price_ex,
            total_price_inc: LineItem::inc_tax(entry.price_ex, gst_rate),
            attachments: Vec::new(),
        });
    }

    Ok(items)
}
