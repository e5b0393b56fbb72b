//! Plain-text quote formatting.
//!
//! Produces the single text document every outbound channel (email draft,
//! clipboard, native share) transmits. Pure and reproducible for identical
//! inputs; delivery is the collaborator's problem.

use std::fmt::Write as _;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ClientDetails, LineItem};

use super::totals::{group_by_category, QuoteTotals};

/// Format a monetary amount as currency: 2 decimals, thousands separators,
/// `$` prefix. This is the only place amounts are rounded.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    // {:.2} always yields a fraction part
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{frac_part}")
}

/// Subject line for the outbound quote request.
pub fn quote_subject(client: &ClientDetails, reference: &str) -> String {
    format!("Quote Request: {} ({})", client.name, reference)
}

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Render the full plain-text quote summary: client block, one section per
/// non-empty category in first-seen order, totals block, and the manual
/// photo-attachment notice.
pub fn quote_summary(
    items: &[LineItem],
    client: &ClientDetails,
    totals: &QuoteTotals,
    reference: &str,
    date: NaiveDate,
) -> String {
    let mut body = String::new();

    body.push_str("New Quotation Request Received\n\n");
    body.push_str("CLIENT DETAILS:\n");
    let _ = writeln!(body, "Case Manager & Company: {}", client.name);
    let _ = writeln!(body, "Email: {}", client.email);
    let _ = writeln!(body, "Phone: {}", or_na(&client.phone));
    let _ = writeln!(body, "Job Address & Client Name: {}", or_na(&client.address));
    let _ = writeln!(body, "Date: {}", date.format("%d/%m/%Y"));
    let _ = writeln!(body, "Ref: {}", reference);
    body.push('\n');

    body.push_str("ESTIMATION SUMMARY:\n");
    for (category, group) in group_by_category(items) {
        let _ = write!(body, "\n--- {} ---\n", category.label_en().to_uppercase());
        for item in group {
            let _ = write!(body, "- {}", item.description);
            if let Some(details) = &item.details {
                let _ = write!(body, " ({details})");
            }
            body.push('\n');
            let _ = writeln!(
                body,
                "  Qty: {} | Unit Ex: {} | Total (Inc): {}",
                item.quantity,
                format_currency(item.unit_price_ex),
                format_currency(item.total_price_inc)
            );
            if !item.attachments.is_empty() {
                let _ = writeln!(body, "  [{} site photo(s) attached]", item.attachments.len());
            }
        }
    }

    body.push_str("\n-----------------------------------\n");
    let _ = writeln!(
        body,
        "Subtotal (Ex GST): {}",
        format_currency(totals.subtotal_ex)
    );
    let _ = writeln!(body, "GST (10%): {}", format_currency(totals.gst));
    let _ = writeln!(
        body,
        "TOTAL ESTIMATE (Inc GST): {}",
        format_currency(totals.grand_total_inc)
    );
    body.push_str("-----------------------------------\n\n");

    body.push_str("PHOTOS & VIDEOS:\n");
    body.push_str(
        "[ IMPORTANT: Please attach any relevant site photos or videos to this email manually before sending ]\n\n",
    );
    body.push_str("Sent via Freedom Building Estimator");

    body
}
