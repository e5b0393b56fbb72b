//! Quote-composition services: the ledger, aggregation, text formatting,
//! reference numbers and the session context that ties them together.

mod formatter;
mod ledger;
mod reference;
mod session;
mod totals;

pub use formatter::{format_currency, quote_subject, quote_summary};
pub use ledger::QuoteLedger;
pub use reference::{generate_reference, reference_for};
pub use session::{QuoteSession, RenderGroup, RenderPayload, Submission};
pub use totals::{compute_totals, group_by_category, QuoteTotals};
