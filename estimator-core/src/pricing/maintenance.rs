//! Maintenance job pricing.

use rust_decimal::Decimal;

use crate::catalog::LabourRates;
use crate::error::QuoteError;
use crate::models::{CategoryId, LineItem, MaintenanceForm};

/// Jobs at or under this many hours bill hourly; anything longer bills the
/// flat one-day rate.
fn hourly_cutoff() -> Decimal {
    Decimal::from(2)
}

/// Price a maintenance job.
///
/// Labour: up to 2 hours bills `duration * hourly`; anything above bills
/// the flat one-day rate regardless of duration (3 hours and 16 hours cost
/// the same labour component — a deliberate flat-rate policy, kept as-is).
/// The labour component is then floored at the minimum job charge. The
/// admin fee is always added; the site-inspection fee only when flagged.
pub fn price_maintenance(
    form: &MaintenanceForm,
    rates: &LabourRates,
    gst_rate: Decimal,
) -> Result<LineItem, QuoteError> {
    if form.description.trim().is_empty() {
        return Err(QuoteError::validation(
            "description",
            "job description is required",
        ));
    }
    if form.duration_hours <= Decimal::ZERO {
        return Err(QuoteError::validation("duration", "duration is required"));
    }

    let labour = if form.duration_hours <= hourly_cutoff() {
        form.duration_hours * rates.hourly
    } else {
        rates.one_day
    };
    let labour = labour.max(rates.min_job);

    let inspection = if form.site_inspection {
        rates.site_inspection
    } else {
        Decimal::ZERO
    };
    let total_ex = labour + rates.admin_fee + inspection;

    Ok(LineItem {
        id: LineItem::new_id(),
        category: CategoryId::Maintenance,
        description: "Maintenance Labour & Fees".to_string(),
        description_zh: Some("維修人工及費用".to_string()),
        details: Some(format!(
            "{} ({} hrs est.)",
            form.description, form.duration_hours
        )),
        details_zh: Some(format!(
            "{} (預計 {} 小時)",
            form.description, form.duration_hours
        )),
        quantity: 1,
        unit_price_ex: total_ex,
        total_price_inc: LineItem::inc_tax(total_ex, gst_rate),
        attachments: Vec::new(),
    })
}
