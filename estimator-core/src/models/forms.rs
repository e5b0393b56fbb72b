//! Validated form states: the raw inputs each pricing rule consumes.
//!
//! Every selector the UI renders as a radio button or dropdown is a closed
//! enum here, so a rule can never see an out-of-range choice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::AttachmentRef;

/// Mounting style for a stainless steel handrail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandrailMount {
    Wall,
    Stair,
}

impl HandrailMount {
    pub fn label_en(&self) -> &'static str {
        match self {
            HandrailMount::Wall => "Wall Mount",
            HandrailMount::Stair => "Stair",
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            HandrailMount::Wall => "壁掛式",
            HandrailMount::Stair => "樓梯",
        }
    }
}

/// Where the handrail is installed. Affects the description only, never the
/// price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandrailLocation {
    Indoor,
    Outdoor,
}

impl HandrailLocation {
    pub fn label_en(&self) -> &'static str {
        match self {
            HandrailLocation::Indoor => "Indoor",
            HandrailLocation::Outdoor => "Outdoor",
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            HandrailLocation::Indoor => "室內",
            HandrailLocation::Outdoor => "戶外",
        }
    }
}

/// Decking material for an access ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampDecking {
    Merbau,
    Composite,
}

impl RampDecking {
    pub fn label_en(&self) -> &'static str {
        match self {
            RampDecking::Merbau => "Merbau",
            RampDecking::Composite => "Composite",
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            RampDecking::Merbau => "菠蘿格木",
            RampDecking::Composite => "複合材料",
        }
    }
}

/// Ground the ramp sits on. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundType {
    Concrete,
    Soil,
}

impl GroundType {
    pub fn label_en(&self) -> &'static str {
        match self {
            GroundType::Concrete => "Concrete",
            GroundType::Soil => "Soil",
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            GroundType::Concrete => "混凝土",
            GroundType::Soil => "土壤",
        }
    }
}

/// Which sides of the ramp get rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailSides {
    One,
    Both,
}

impl RailSides {
    pub fn label_en(&self) -> &'static str {
        match self {
            RailSides::One => "One side",
            RailSides::Both => "Both sides",
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            RailSides::One => "僅一側",
            RailSides::Both => "兩側",
        }
    }
}

/// Minor bathroom modification form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinorBathForm {
    /// Catalog id of the selected modification.
    pub option_id: String,
    pub quantity: u32,
    /// Add the wall scanning fee to the quote (at most once per quote).
    pub wall_scanning: bool,
}

/// Stainless steel handrail form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandrailForm {
    pub mount: HandrailMount,
    pub location: HandrailLocation,
    pub length_m: Decimal,
    pub quantity: u32,
}

/// Access ramp form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampForm {
    pub decking: RampDecking,
    pub length_m: Decimal,
    pub ground: GroundType,
    /// Site photos captured for this ramp, carried into the line item.
    pub attachments: Vec<AttachmentRef>,
}

/// Ramp rails form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampRailsForm {
    pub length_m: Decimal,
    pub sides: RailSides,
}

/// Major bathroom modification form. Dimensions are in millimetres and are
/// descriptive only; the standard package is flat-rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorBathForm {
    pub length_mm: Decimal,
    pub width_mm: Decimal,
    pub height_mm: Decimal,
    /// Catalog ids of the selected inclusions.
    pub inclusions: Vec<String>,
}

/// Maintenance job form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceForm {
    pub description: String,
    pub duration_hours: Decimal,
    pub site_inspection: bool,
}
