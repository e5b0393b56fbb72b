//! Stainless steel handrail pricing.

use rust_decimal::Decimal;

use crate::error::QuoteError;
use crate::models::{CategoryId, HandrailForm, HandrailMount, LineItem};

fn rate_per_metre(mount: HandrailMount) -> Decimal {
    match mount {
        HandrailMount::Wall => Decimal::from(370),
        HandrailMount::Stair => Decimal::from(500),
    }
}

/// Minimum billable length per mount type, in metres.
fn min_billable_metres(mount: HandrailMount) -> Decimal {
    match mount {
        HandrailMount::Wall => Decimal::new(5, 1),
        HandrailMount::Stair => Decimal::new(8, 1),
    }
}

/// Price a handrail run.
///
/// The per-metre rate depends on the mount type, with the billable length
/// clamped up to that type's minimum. The unit price folds in the length;
/// the location affects the description text only. The details line keeps
/// the length the user entered, not the clamped one.
pub fn price_handrail(form: &HandrailForm, gst_rate: Decimal) -> Result<LineItem, QuoteError> {
    if form.length_m <= Decimal::ZERO {
        return Err(QuoteError::validation("length", "length is required"));
    }
    if form.quantity < 1 {
        return Err(QuoteError::validation(
            "quantity",
            "quantity must be at least 1",
        ));
    }

    let effective_len = form.length_m.max(min_billable_metres(form.mount));
    let unit_price_ex = effective_len * rate_per_metre(form.mount);
    let line_total_ex = unit_price_ex * Decimal::from(form.quantity);

    Ok(LineItem {
        id: LineItem::new_id(),
        category: CategoryId::Handrail,
        description: format!(
            "SS Handrail ({}, {})",
            form.mount.label_en(),
            form.location.label_en()
        ),
        description_zh: Some(format!(
            "不鏽鋼扶手 ({}, {})",
            form.mount.label_zh(),
            form.location.label_zh()
        )),
        details: Some(format!("Length: {}m", form.length_m)),
        details_zh: Some(format!("長度: {}米", form.length_m)),
        quantity: form.quantity,
        unit_price_ex,
        total_price_inc: LineItem::inc_tax(line_total_ex, gst_rate),
        attachments: Vec::new(),
    })
}
