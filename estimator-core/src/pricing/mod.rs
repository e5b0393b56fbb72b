//! Category pricing rules.
//!
//! One pure function per service category, mapping a validated form state
//! (plus whichever of the catalog, labour rates and GST rate the category
//! consumes) into fully priced line items. Each rule validates its own
//! inputs before pricing and produces either complete items or a structured
//! error — never a partial or zero-priced item. GST is folded into each
//! item's stored total at construction time; amounts stay full precision and
//! are rounded only at presentation.

mod handrail;
mod maintenance;
mod major_bath;
mod minor_bath;
mod ramp;
mod ramp_rails;

pub use handrail::price_handrail;
pub use maintenance::price_maintenance;
pub use major_bath::price_major_bath;
pub use minor_bath::price_minor_bath;
pub use ramp::price_ramp;
pub use ramp_rails::price_ramp_rails;
