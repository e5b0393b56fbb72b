//! The quote ledger: the ordered collection of priced line items.

use tracing::debug;

use crate::error::QuoteError;
use crate::models::LineItem;

/// Ordered sequence of line items composing the current quote.
///
/// Insertion order is preserved end to end — display grouping depends on
/// it. Created empty at quote start and discarded with the session; nothing
/// is persisted. The ledger never rewrites or merges an existing item:
/// an id collision on add is rejected outright.
#[derive(Debug, Clone, Default)]
pub struct QuoteLedger {
    items: Vec<LineItem>,
}

impl QuoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Append items in the given order.
    ///
    /// Rejects the whole batch if any incoming id already exists in the
    /// ledger (or is repeated within the batch), leaving the ledger
    /// unchanged on error.
    pub fn add(&mut self, items: Vec<LineItem>) -> Result<(), QuoteError> {
        for (idx, item) in items.iter().enumerate() {
            if self.contains(&item.id) || items[..idx].iter().any(|p| p.id == item.id) {
                return Err(QuoteError::DuplicateItem(item.id.clone()));
            }
        }
        debug!(count = items.len(), total = self.items.len() + items.len(), "line items appended");
        self.items.extend(items);
        Ok(())
    }

    /// Remove the first item with the given id, returning it. Unknown ids
    /// are a no-op, not an error.
    pub fn remove(&mut self, id: &str) -> Option<LineItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        let removed = self.items.remove(pos);
        debug!(id = %removed.id, remaining = self.items.len(), "line item removed");
        Some(removed)
    }

    /// Drop every item, returning the ledger to its quote-start state.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
