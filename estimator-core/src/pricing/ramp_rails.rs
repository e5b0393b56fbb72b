//! Ramp rail pricing.

use rust_decimal::Decimal;

use crate::error::QuoteError;
use crate::models::{CategoryId, LineItem, RailSides, RampRailsForm};

fn rate_per_metre() -> Decimal {
    Decimal::from(350)
}

/// Rails are only sold for ramps longer than this, in metres.
fn minimum_span_metres() -> Decimal {
    Decimal::from(5)
}

/// Price aluminium ramp rails.
///
/// A missing or non-positive length is a plain validation error; a length
/// at or below the 5m span minimum is a business-rule rejection with its
/// own user-facing message, so the caller can tell the two apart.
pub fn price_ramp_rails(form: &RampRailsForm, gst_rate: Decimal) -> Result<LineItem, QuoteError> {
    if form.length_m <= Decimal::ZERO {
        return Err(QuoteError::validation("length", "length is required"));
    }
    if form.length_m <= minimum_span_metres() {
        return Err(QuoteError::DomainConstraint(
            "Ramp rails are only applicable for lengths greater than 5000mm (5m).".to_string(),
        ));
    }

    let multiplier = match form.sides {
        RailSides::Both => Decimal::from(2),
        RailSides::One => Decimal::ONE,
    };
    let total_ex = form.length_m * rate_per_metre() * multiplier;

    Ok(LineItem {
        id: LineItem::new_id(),
        category: CategoryId::RampRails,
        description: "Aluminium handrail with kerb rail".to_string(),
        description_zh: Some("帶路緣導軌的鋁製扶手".to_string()),
        details: Some(format!(
            "Length: {}m, {}",
            form.length_m,
            form.sides.label_en()
        )),
        details_zh: Some(format!(
            "長度: {}米, {}",
            form.length_m,
            form.sides.label_zh()
        )),
        quantity: 1,
        unit_price_ex: total_ex,
        total_price_inc: LineItem::inc_tax(total_ex, gst_rate),
        attachments: Vec::new(),
    })
}
