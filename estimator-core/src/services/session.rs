//! The quote session context.
//!
//! One `QuoteSession` holds everything mutable for a single interactive
//! quoting session — language, active category tab, client details, the
//! ledger, the reference number and quote date — as an explicit value
//! rather than ambient globals, so every operation is deterministic and
//! testable without a UI harness. Mutations are serialized by `&mut self`;
//! a concurrent host must put its own mutual-exclusion boundary around the
//! session so adds from two input sources cannot interleave.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::instrument;

use crate::catalog::{gst_rate, CATALOG, LABOUR_RATES};
use crate::error::QuoteError;
use crate::models::{
    CategoryId, ClientDetails, HandrailForm, Language, LineItem, MaintenanceForm, MajorBathForm,
    MinorBathForm, RampForm, RampRailsForm,
};
use crate::pricing;

use super::formatter::{quote_subject, quote_summary};
use super::ledger::QuoteLedger;
use super::reference::generate_reference;
use super::totals::{compute_totals, group_by_category, QuoteTotals};

/// The outbound payload for a submitted quote: subject line plus the plain
/// text document. Delivery (mailto, clipboard, native share) is the
/// channel's job; the engine only produces the strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub subject: String,
    pub body: String,
}

/// One displayed category section for the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RenderGroup {
    pub category: CategoryId,
    pub label_en: &'static str,
    pub label_zh: &'static str,
    pub items: Vec<LineItem>,
}

/// Everything the excluded visual renderer needs to draw the quote
/// document and hand it to an export facility.
#[derive(Debug, Clone, Serialize)]
pub struct RenderPayload {
    pub reference: String,
    pub date: NaiveDate,
    pub client: ClientDetails,
    pub groups: Vec<RenderGroup>,
    pub totals: QuoteTotals,
}

/// All state for one interactive quoting session. Created empty; nothing
/// survives the session.
#[derive(Debug, Clone)]
pub struct QuoteSession {
    language: Language,
    active_category: CategoryId,
    client: ClientDetails,
    ledger: QuoteLedger,
    reference: String,
    date: NaiveDate,
}

impl QuoteSession {
    /// Start a fresh session dated today with a newly generated reference.
    pub fn new() -> Self {
        Self::with_reference(generate_reference(), Local::now().date_naive())
    }

    /// Start a session with a fixed reference and date (deterministic; used
    /// by tests and by hosts that manage references themselves).
    pub fn with_reference(reference: String, date: NaiveDate) -> Self {
        Self {
            language: Language::default(),
            active_category: CategoryId::MinorBath,
            client: ClientDetails::default(),
            ledger: QuoteLedger::new(),
            reference,
            date,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn active_category(&self) -> CategoryId {
        self.active_category
    }

    pub fn set_active_category(&mut self, category: CategoryId) {
        self.active_category = category;
    }

    pub fn client(&self) -> &ClientDetails {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut ClientDetails {
        &mut self.client
    }

    pub fn set_client(&mut self, client: ClientDetails) {
        self.client = client;
    }

    pub fn ledger(&self) -> &QuoteLedger {
        &self.ledger
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Price a minor-bath form and append the resulting items, returning
    /// the items that were added.
    #[instrument(skip(self, form), fields(category = "minor-bath"))]
    pub fn add_minor_bath(&mut self, form: &MinorBathForm) -> Result<Vec<LineItem>, QuoteError> {
        let items = pricing::price_minor_bath(
            form,
            &CATALOG,
            &LABOUR_RATES,
            gst_rate(),
            self.ledger.items(),
        )?;
        self.append(items)
    }

    #[instrument(skip(self, form), fields(category = "handrail"))]
    pub fn add_handrail(&mut self, form: &HandrailForm) -> Result<Vec<LineItem>, QuoteError> {
        let item = pricing::price_handrail(form, gst_rate())?;
        self.append(vec![item])
    }

    #[instrument(skip(self, form), fields(category = "ramp"))]
    pub fn add_ramp(&mut self, form: &RampForm) -> Result<Vec<LineItem>, QuoteError> {
        let item = pricing::price_ramp(form, gst_rate())?;
        self.append(vec![item])
    }

    #[instrument(skip(self, form), fields(category = "ramp-rails"))]
    pub fn add_ramp_rails(&mut self, form: &RampRailsForm) -> Result<Vec<LineItem>, QuoteError> {
        let item = pricing::price_ramp_rails(form, gst_rate())?;
        self.append(vec![item])
    }

    #[instrument(skip(self, form), fields(category = "major-bath"))]
    pub fn add_major_bath(&mut self, form: &MajorBathForm) -> Result<Vec<LineItem>, QuoteError> {
        let items = pricing::price_major_bath(form, &CATALOG, gst_rate())?;
        self.append(items)
    }

    #[instrument(skip(self, form), fields(category = "maintenance"))]
    pub fn add_maintenance(&mut self, form: &MaintenanceForm) -> Result<Vec<LineItem>, QuoteError> {
        let item = pricing::price_maintenance(form, &LABOUR_RATES, gst_rate())?;
        self.append(vec![item])
    }

    fn append(&mut self, items: Vec<LineItem>) -> Result<Vec<LineItem>, QuoteError> {
        self.ledger.add(items.clone())?;
        Ok(items)
    }

    /// Remove a line item by id. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &str) -> Option<LineItem> {
        self.ledger.remove(id)
    }

    /// Current totals, recomputed from the ledger.
    pub fn totals(&self) -> QuoteTotals {
        compute_totals(self.ledger.items(), gst_rate())
    }

    /// Items grouped by category in first-seen order.
    pub fn grouped(&self) -> Vec<(CategoryId, Vec<&LineItem>)> {
        group_by_category(self.ledger.items())
    }

    /// Build the outbound submission payload.
    ///
    /// Fails with `EmptyQuote` when nothing has been added, and with
    /// `ClientIncomplete` when name or email are missing. Either way the
    /// ledger is untouched — submission guards never delete items.
    pub fn submission(&self) -> Result<Submission, QuoteError> {
        if self.ledger.is_empty() {
            return Err(QuoteError::EmptyQuote);
        }
        self.client.ensure_submittable()?;
        let totals = self.totals();
        Ok(Submission {
            subject: quote_subject(&self.client, &self.reference),
            body: quote_summary(
                self.ledger.items(),
                &self.client,
                &totals,
                &self.reference,
                self.date,
            ),
        })
    }

    /// Snapshot for the visual renderer.
    pub fn render_payload(&self) -> RenderPayload {
        let groups = self
            .grouped()
            .into_iter()
            .map(|(category, items)| RenderGroup {
                category,
                label_en: category.label_en(),
                label_zh: category.label_zh(),
                items: items.into_iter().cloned().collect(),
            })
            .collect();
        RenderPayload {
            reference: self.reference.clone(),
            date: self.date,
            client: self.client.clone(),
            groups,
            totals: self.totals(),
        }
    }

    /// Start a new quote: fresh ledger, client, reference and date. The
    /// chosen language survives, matching the UI toggle.
    pub fn reset(&mut self) {
        let language = self.language;
        *self = Self::new();
        self.language = language;
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new()
    }
}
