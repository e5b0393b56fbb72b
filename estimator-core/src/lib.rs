//! estimator-core: the pricing and quote-composition engine behind the
//! Freedom Building home-modification estimator.
//!
//! A user picks a service category, fills a small form, and the engine
//! turns those inputs into priced line items using fixed business rules,
//! accumulating them into a quote. Data flows one way:
//!
//! catalog -> pricing rules -> ledger -> aggregation -> text formatter
//!
//! Everything here is synchronous and deterministic. Rendering, PDF export,
//! photo capture and delivery channels are external collaborators — the
//! engine only consumes their attachment references and produces the
//! grouped/priced data and summary text they need.

pub mod catalog;
pub mod error;
pub mod models;
pub mod pricing;
pub mod services;

pub use catalog::{
    gst_rate, standard_package_rate, CatalogEntry, LabourRates, PricingCatalog, CATALOG,
    LABOUR_RATES,
};
pub use error::{FieldError, QuoteError};
pub use models::{
    AttachmentRef, CategoryId, ClientDetails, GroundType, HandrailForm, HandrailLocation,
    HandrailMount, Language, LineItem, MaintenanceForm, MajorBathForm, MinorBathForm, RailSides,
    RampDecking, RampForm, RampRailsForm, WALL_SCANNING_FEE_ID,
};
pub use services::{
    compute_totals, format_currency, generate_reference, group_by_category, quote_subject,
    quote_summary, QuoteLedger, QuoteSession, QuoteTotals, RenderGroup, RenderPayload, Submission,
};
