//! Line item model: the unit of the quote ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryId;
use super::locale::Language;

/// Fixed ledger id for the flag-driven wall scanning fee. The minor-bath
/// rule keys its at-most-one-per-quote check on this id.
pub const WALL_SCANNING_FEE_ID: &str = "wall-scanning-fee";

/// Opaque reference to a captured site photo, supplied by the attachment
/// provider. The engine never inspects or decodes it; it only counts and
/// carries references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef(String);

impl AttachmentRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One priced entry on the quote.
///
/// `total_price_inc` is computed once by the pricing rule at add time and
/// stored, so the ledger stays a flat record of what was charged even if
/// catalog rates drift afterwards. Invariant (enforced at construction):
/// `total_price_inc = unit_price_ex * quantity * (1 + GST)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub category: CategoryId,
    pub description: String,
    pub description_zh: Option<String>,
    /// Secondary text, e.g. computed dimensions.
    pub details: Option<String>,
    pub details_zh: Option<String>,
    pub quantity: u32,
    /// Pre-tax unit price as computed by the rule. For area/length-priced
    /// categories this already folds in the dimensions and quantity is 1.
    pub unit_price_ex: Decimal,
    pub total_price_inc: Decimal,
    pub attachments: Vec<AttachmentRef>,
}

impl LineItem {
    /// Fresh ledger id for a generated item.
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// The ex-tax total for this line (`unit * quantity`).
    pub fn line_total_ex(&self) -> Decimal {
        self.unit_price_ex * Decimal::from(self.quantity)
    }

    /// Fold GST into an ex-tax amount.
    pub fn inc_tax(total_ex: Decimal, gst_rate: Decimal) -> Decimal {
        total_ex * (Decimal::ONE + gst_rate)
    }

    /// Description in the given language, falling back to English.
    pub fn description_for(&self, language: Language) -> &str {
        language.resolve(&self.description, self.description_zh.as_deref())
    }

    /// Details in the given language, falling back to English.
    pub fn details_for(&self, language: Language) -> Option<&str> {
        self.details
            .as_deref()
            .map(|d| language.resolve(d, self.details_zh.as_deref()))
    }
}
