//! Domain models for estimator-core.

mod category;
mod client;
mod forms;
mod line_item;
mod locale;

pub use category::CategoryId;
pub use client::ClientDetails;
pub use forms::{
    GroundType, HandrailForm, HandrailLocation, HandrailMount, MaintenanceForm, MajorBathForm,
    MinorBathForm, RailSides, RampDecking, RampForm, RampRailsForm,
};
pub use line_item::{AttachmentRef, LineItem, WALL_SCANNING_FEE_ID};
pub use locale::Language;
