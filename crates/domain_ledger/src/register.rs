//! In-memory register of posted journal entries
//!
//! The register is the list a dashboard page keeps for the lifetime of a
//! session. It is not persisted.

use tracing::info;

use core_kernel::{Amount, JournalEntryId};
use crate::balance::{JournalTotals, MINIMUM_LINES};
use crate::error::LedgerError;
use crate::journal::JournalEntry;

/// Posted journal entries in posting order
#[derive(Debug, Default)]
pub struct JournalRegister {
    entries: Vec<JournalEntry>,
}

impl JournalRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry
    ///
    /// Entries normally come from a validated form, but the balance and
    /// line count are checked again since `JournalEntry` fields are public.
    pub fn record(&mut self, entry: JournalEntry) -> Result<JournalEntryId, LedgerError> {
        if entry.lines.len() < MINIMUM_LINES {
            return Err(LedgerError::MinimumLines {
                required: MINIMUM_LINES,
                actual: entry.lines.len(),
            });
        }
        let totals = JournalTotals::try_compute(&entry.lines)?;
        if !totals.is_balanced() {
            return Err(LedgerError::UnbalancedEntry {
                debits: totals.debit,
                credits: totals.credit,
            });
        }

        let id = entry.id;
        info!(
            entry_id = %id,
            reference = %entry.reference,
            total = %totals.debit,
            "Recorded journal entry"
        );
        self.entries.push(entry);
        Ok(id)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn get(&self, id: &JournalEntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of debits across all entries
    pub fn total_debits(&self) -> Amount {
        self.entries
            .iter()
            .fold(Amount::zero(), |total, entry| total.saturating_add(entry.totals.debit))
    }
}
