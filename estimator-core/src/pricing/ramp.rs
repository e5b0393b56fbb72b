//! Access ramp pricing.

use rust_decimal::Decimal;

use crate::error::QuoteError;
use crate::models::{CategoryId, LineItem, RampDecking, RampForm};

/// Ramps are built at a fixed 1.3m width; only the length varies.
fn ramp_width_metres() -> Decimal {
    Decimal::new(13, 1)
}

fn rate_per_sqm(decking: RampDecking) -> Decimal {
    match decking {
        RampDecking::Merbau => Decimal::from(792),
        RampDecking::Composite => Decimal::from(921),
    }
}

/// Minimum charge for any ramp, ex GST.
fn minimum_charge() -> Decimal {
    Decimal::from(1400)
}

/// Price an access ramp by deck area.
///
/// Area = length x fixed width; the raw area price is floored at the
/// minimum charge. Quantity is always 1 — the area already captures scale.
/// Ground type is descriptive only. Site photo references pass through to
/// the line item unchanged.
pub fn price_ramp(form: &RampForm, gst_rate: Decimal) -> Result<LineItem, QuoteError> {
    if form.length_m <= Decimal::ZERO {
        return Err(QuoteError::validation("length", "length is required"));
    }

    let area = form.length_m * ramp_width_metres();
    let total_ex = (area * rate_per_sqm(form.decking)).max(minimum_charge());

    Ok(LineItem {
        id: LineItem::new_id(),
        category: CategoryId::Ramp,
        description: format!("Access Ramp - {}", form.decking.label_en()),
        description_zh: Some(format!("無障礙斜坡 - {}", form.decking.label_zh())),
        details: Some(format!(
            "Length: {}m ({:.2}m²), Ground: {}",
            form.length_m,
            area,
            form.ground.label_en()
        )),
        details_zh: Some(format!(
            "長度: {}米 ({:.2}平方米), 地面: {}",
            form.length_m,
            area,
            form.ground.label_zh()
        )),
        quantity: 1,
        unit_price_ex: total_ex,
        total_price_inc: LineItem::inc_tax(total_ex, gst_rate),
        attachments: form.attachments.clone(),
    })
}
