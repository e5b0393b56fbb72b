//! Service category identifiers.

use serde::{Deserialize, Serialize};

use super::locale::Language;

/// The six fixed service categories a quote can draw from. Closed set; form
/// tabs, pricing rules and display grouping are all keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    MinorBath,
    Handrail,
    Ramp,
    RampRails,
    MajorBath,
    Maintenance,
}

impl CategoryId {
    /// All categories in display (tab) order.
    pub const ALL: [CategoryId; 6] = [
        CategoryId::MinorBath,
        CategoryId::Handrail,
        CategoryId::Ramp,
        CategoryId::RampRails,
        CategoryId::MajorBath,
        CategoryId::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::MinorBath => "minor-bath",
            CategoryId::Handrail => "handrail",
            CategoryId::Ramp => "ramp",
            CategoryId::RampRails => "ramp-rails",
            CategoryId::MajorBath => "major-bath",
            CategoryId::Maintenance => "maintenance",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            CategoryId::MinorBath => "Minor Bath",
            CategoryId::Handrail => "SS Handrail",
            CategoryId::Ramp => "Access Ramp",
            CategoryId::RampRails => "Ramp Rails",
            CategoryId::MajorBath => "Major Bathroom Modification",
            CategoryId::Maintenance => "Maintenance",
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            CategoryId::MinorBath => "次級浴室",
            CategoryId::Handrail => "不鏽鋼扶手",
            CategoryId::Ramp => "無障礙斜坡",
            CategoryId::RampRails => "斜坡欄杆",
            CategoryId::MajorBath => "主要浴室改建",
            CategoryId::Maintenance => "維修保養",
        }
    }

    /// Display label in the given language.
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.label_en(),
            Language::Zh => self.label_zh(),
        }
    }
}
