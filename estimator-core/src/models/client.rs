//! Client details captured for a quote session.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Contact details for the requesting case manager and job site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    /// Case manager and company.
    pub name: String,
    /// Job address and client name.
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl ClientDetails {
    /// Check the fields required before the quote may be submitted. Name
    /// and email are mandatory; phone and address are optional.
    pub fn ensure_submittable(&self) -> Result<(), QuoteError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(QuoteError::ClientIncomplete(missing))
        }
    }
}
