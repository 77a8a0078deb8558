//! The drink ledger: what has been consumed so far in this session.
//!
//! Entries keep insertion order and get a stable [`EntryId`] when added, so a
//! caller holding an old rendering can still remove the right drink.
//! Positional removal is kept for callers that work from a fresh listing.

use crate::catalog::get_default_catalog;
use crate::types::{DrinkEntry, DrinkType, EntryId};
use crate::{Error, Result};

/// Ordered list of drink entries owned by a session
#[derive(Clone, Debug, Default)]
pub struct DrinkLedger {
    entries: Vec<DrinkEntry>,
    /// Last id handed out; ids start at 1
    next_id: u64,
}

impl DrinkLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `quantity` servings of `drink`
    ///
    /// Rejects a zero quantity with [`Error::InvalidQuantity`], and fails with
    /// [`Error::LedgerFull`] once every id has been handed out.
    pub fn add(&mut self, drink: &DrinkType, quantity: u32) -> Result<EntryId> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity(quantity.to_string()));
        }

        self.next_id = self.next_id.checked_add(1).ok_or(Error::LedgerFull)?;
        let id = EntryId(self.next_id);
        self.entries.push(DrinkEntry {
            id,
            drink: drink.clone(),
            quantity,
        });

        tracing::debug!(
            "Added {} {}x {} ({} entries)",
            id,
            quantity,
            drink.key,
            self.entries.len()
        );
        Ok(id)
    }

    /// Append a drink from the default catalog by key
    pub fn add_by_key(&mut self, key: &str, quantity: u32) -> Result<EntryId> {
        let drink = get_default_catalog().lookup(key)?;
        self.add(drink, quantity)
    }

    /// Remove the entry with the given id
    ///
    /// Unknown ids leave the ledger untouched and return `None`.
    pub fn remove(&mut self, id: EntryId) -> Option<DrinkEntry> {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => self.remove_at(index),
            None => {
                tracing::debug!("No entry {} to remove", id);
                None
            }
        }
    }

    /// Remove the entry at a 0-based position
    ///
    /// Out-of-range positions are a no-op returning `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<DrinkEntry> {
        if index >= self.entries.len() {
            tracing::debug!(
                "Ignoring removal at {} (ledger has {} entries)",
                index,
                self.entries.len()
            );
            return None;
        }

        let removed = self.entries.remove(index);
        tracing::debug!(
            "Removed {} {}x {} ({} entries)",
            removed.id,
            removed.quantity,
            removed.drink.key,
            self.entries.len()
        );
        Some(removed)
    }

    /// Current entries in insertion order
    pub fn list(&self) -> &[DrinkEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&DrinkEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
