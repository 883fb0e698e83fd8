//! Flat-file expense ledger.
//!
//! The ledger persists one record per line in a comma-separated file with a
//! header row, and keeps the full record set in memory. Every write goes to
//! the file first; the in-memory state is only updated once the file write
//! succeeded.
//!
//! Adds append a single line. Deletes key on the record id and rewrite the
//! whole file, which is acceptable at the scale of a personal expense log.
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use uuid::Uuid;

pub use amount::Amount;
pub use error::LedgerError;
pub use record::{Record, TIMESTAMP_FORMAT};

pub mod categories;

mod amount;
mod error;
mod record;
mod store;

type ResultLedger<T> = Result<T, LedgerError>;

/// The expense ledger: a CSV file plus its in-memory record set.
#[derive(Debug)]
pub struct Ledger {
    store: store::Store,
    records: Vec<Record>,
}

impl Ledger {
    /// Opens the ledger file, initializing it when missing.
    ///
    /// A file that exists but does not parse is a [`LedgerError::Corrupt`];
    /// it is never silently treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> ResultLedger<Self> {
        let store = store::Store::new(path);
        let records = store.load_or_init()?;
        tracing::debug!(
            path = %store.path().display(),
            count = records.len(),
            "ledger loaded"
        );
        Ok(Self { store, records })
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Logs an expense stamped with the current local time.
    pub fn add(&mut self, amount: Amount, category: &str, note: &str) -> ResultLedger<Record> {
        let now = Local::now().naive_local();
        // The file stores second precision; truncate so the in-memory record
        // equals what a reload would produce.
        let now = now.with_nanosecond(0).unwrap_or(now);
        self.add_at(now, amount, category, note)
    }

    /// Logs an expense with an explicit timestamp.
    pub fn add_at(
        &mut self,
        timestamp: NaiveDateTime,
        amount: Amount,
        category: &str,
        note: &str,
    ) -> ResultLedger<Record> {
        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount(
                "amount must be non-zero".to_string(),
            ));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(LedgerError::InvalidRecord(
                "category is required".to_string(),
            ));
        }

        let record = Record::new(
            timestamp,
            amount,
            category.to_string(),
            note.trim().to_string(),
        );
        self.store.append(&record)?;
        self.records.push(record.clone());
        tracing::info!(id = %record.id, amount = %record.amount, "record added");
        Ok(record)
    }

    /// Deletes the record with the given id, returning it.
    ///
    /// Rewrites the whole file without the record; the in-memory set is only
    /// updated once the rewrite succeeded.
    pub fn remove(&mut self, id: Uuid) -> ResultLedger<Record> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| LedgerError::KeyNotFound(id.to_string()))?;

        let mut kept = self.records.clone();
        let removed = kept.remove(position);
        self.store.rewrite(&kept)?;
        self.records = kept;
        tracing::info!(id = %removed.id, "record removed");
        Ok(removed)
    }

    /// Records whose category matches, case-insensitively.
    pub fn search(&self, category: &str) -> Vec<&Record> {
        let needle = categories::normalize(category);
        self.records
            .iter()
            .filter(|record| categories::normalize(&record.category) == needle)
            .collect()
    }

    /// Sum of every amount in the ledger.
    pub fn total(&self) -> Amount {
        self.records
            .iter()
            .fold(Amount::ZERO, |acc, record| acc + record.amount)
    }

    /// Sum of the amounts logged in the given calendar month.
    pub fn month_total(&self, year: i32, month: u32) -> Amount {
        self.records
            .iter()
            .filter(|record| record.in_month(year, month))
            .fold(Amount::ZERO, |acc, record| acc + record.amount)
    }

    /// Sum of the amounts logged in the current month.
    pub fn current_month_total(&self) -> Amount {
        let now = Local::now();
        self.month_total(now.year(), now.month())
    }
}
