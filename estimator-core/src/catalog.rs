//! Static pricing reference data.
//!
//! Fixed business rates for every service category: the minor-bath option
//! list, the major-bath inclusion list, the labour rate table and the flat
//! standard-package rate. All prices are ex-GST. The data is built once at
//! process start and never mutated; rule functions borrow it.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::error::QuoteError;

/// Flat GST applied to every ex-tax amount.
pub fn gst_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Flat-rate major bathroom standard package, ex GST. Dimensions entered on
/// the form are descriptive only and never affect this price.
pub fn standard_package_rate() -> Decimal {
    Decimal::from(25_000)
}

/// One selectable option with a fixed ex-GST price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
    /// Chinese label where the business recorded one; display falls back to
    /// the English label otherwise.
    pub label_zh: Option<&'static str>,
    pub price_ex: Decimal,
}

impl CatalogEntry {
    fn new(id: &'static str, label: &'static str, price_ex: i64) -> Self {
        Self {
            id,
            label,
            label_zh: None,
            price_ex: Decimal::from(price_ex),
        }
    }

    fn with_zh(
        id: &'static str,
        label: &'static str,
        label_zh: &'static str,
        price_ex: i64,
    ) -> Self {
        Self {
            id,
            label,
            label_zh: Some(label_zh),
            price_ex: Decimal::from(price_ex),
        }
    }
}

/// Read-only option lists for the catalog-priced categories.
#[derive(Debug, Clone)]
pub struct PricingCatalog {
    minor_bath: Vec<CatalogEntry>,
    major_bath: Vec<CatalogEntry>,
}

impl PricingCatalog {
    /// The business's current price list.
    pub fn standard() -> Self {
        Self {
            minor_bath: vec![
                CatalogEntry::new("wall-scanning-fee", "Wall Scanning Fee", 150),
                CatalogEntry::new("grab-300", "Grab Rail (300-450mm)", 350),
                CatalogEntry::new("grab-600", "Grab Rail (600-900mm)", 380),
                CatalogEntry::new("grab-custom", "Custom Grab Rail (L-Type/T-Type)", 700),
                CatalogEntry::new(
                    "handheld-rail",
                    "Hand-held shower on 900mm SS grab rail",
                    550,
                ),
                CatalogEntry::new("mixer-convert", "Convert wall taps to Quoss Mixer", 900),
                CatalogEntry::new("shower-curtain", "Shower curtain & rail system", 880),
                CatalogEntry::new("drop-rail", "Drop down grab rail next to toilet", 750),
                CatalogEntry::new("antislip", "Bathroom floor anti slip coating", 700),
                CatalogEntry::new("bidet-std", "Supply and install Evakare bidet", 820),
                CatalogEntry::new("bidet-short", "Supply and install short size bidet", 1250),
            ],
            major_bath: vec![
                CatalogEntry::with_zh(
                    "shower-unit",
                    "Handheld shower on vertical grab rail",
                    "垂直扶手上的手持淋浴器",
                    240,
                ),
                CatalogEntry::with_zh("wall-mixer", "Wall mixer", "牆壁混水閥", 96),
                CatalogEntry::with_zh(
                    "shower-rail-curtain",
                    "Shower rail and weighted curtain",
                    "淋浴導軌和加重浴簾",
                    420,
                ),
                CatalogEntry::with_zh("toilet-std", "Standard toilet suite", "標準馬桶套件", 384),
                CatalogEntry::with_zh("bidet-elec", "Electric bidet", "電動坐浴盆", 540),
                CatalogEntry::with_zh(
                    "bidet-power",
                    "Power point for bidet",
                    "坐浴盆電源插座",
                    156,
                ),
                CatalogEntry::with_zh("vanity", "Vanity", "盥洗台", 420),
                CatalogEntry::with_zh("shaving-cab", "Mirror/ shaving cabinet", "鏡子/剃須櫃", 180),
                CatalogEntry::with_zh(
                    "basin-mixer",
                    "Basin/ vanity mixer YO162",
                    "盆地/盥洗台混水閥",
                    96,
                ),
                CatalogEntry::with_zh(
                    "towel-acc",
                    "Double towel rail/ ring/ holder",
                    "雙毛巾架/毛巾環/捲紙架",
                    180,
                ),
                CatalogEntry::with_zh(
                    "floor-prot",
                    "Floor protection film and labour",
                    "地板保護膜及人工",
                    600,
                ),
            ],
        }
    }

    /// All minor bathroom modification options, in display order.
    pub fn minor_bath_options(&self) -> &[CatalogEntry] {
        &self.minor_bath
    }

    /// All major bathroom inclusion options, in display order.
    pub fn major_bath_inclusions(&self) -> &[CatalogEntry] {
        &self.major_bath
    }

    /// Look up a minor-bath option by id.
    pub fn minor_bath_option(&self, id: &str) -> Result<&CatalogEntry, QuoteError> {
        Self::find(&self.minor_bath, id)
    }

    /// Look up a major-bath inclusion by id.
    pub fn major_bath_inclusion(&self, id: &str) -> Result<&CatalogEntry, QuoteError> {
        Self::find(&self.major_bath, id)
    }

    fn find<'a>(entries: &'a [CatalogEntry], id: &str) -> Result<&'a CatalogEntry, QuoteError> {
        entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| QuoteError::OptionNotFound(id.to_string()))
    }
}

/// Fixed labour rate table. Invariant: every rate is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabourRates {
    pub half_day: Decimal,
    pub one_day: Decimal,
    pub one_and_half_day: Decimal,
    pub two_days: Decimal,
    pub five_days: Decimal,
    pub hourly: Decimal,
    pub min_job: Decimal,
    pub admin_fee: Decimal,
    pub site_inspection: Decimal,
    pub wall_scanning: Decimal,
}

impl LabourRates {
    /// The business's current labour rates.
    pub fn standard() -> Self {
        Self {
            half_day: Decimal::from(700),
            one_day: Decimal::from(1400),
            one_and_half_day: Decimal::from(2100),
            two_days: Decimal::from(2800),
            five_days: Decimal::from(7000),
            hourly: Decimal::from(175),
            min_job: Decimal::from(350),
            admin_fee: Decimal::from(90),
            site_inspection: Decimal::from(150),
            wall_scanning: Decimal::from(150),
        }
    }
}

/// Process-wide catalog, loaded once at first use.
pub static CATALOG: Lazy<PricingCatalog> = Lazy::new(PricingCatalog::standard);

/// Process-wide labour rate table, loaded once at first use.
pub static LABOUR_RATES: Lazy<LabourRates> = Lazy::new(LabourRates::standard);
