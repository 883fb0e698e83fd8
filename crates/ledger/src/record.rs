//! The module contains the `Record` type representing one logged expense.
use core::fmt;

use chrono::{Datelike, NaiveDateTime};
use uuid::Uuid;

use crate::Amount;

/// Timestamp layout used in the file and in every view of a record.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged expense: when, how much, what for.
///
/// The id is assigned at creation time and is independent of the
/// timestamp, so two records logged within the same second stay
/// individually addressable.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub id: Uuid,
    pub timestamp: NaiveDateTime,
    pub amount: Amount,
    pub category: String,
    pub note: String,
}

impl Record {
    pub fn new(timestamp: NaiveDateTime, amount: Amount, category: String, note: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            amount,
            category,
            note,
        }
    }

    /// Returns `true` if the record falls in the given calendar month.
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.timestamp.year() == year && self.timestamp.month() == month
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.amount,
            self.category,
            self.note
        )
    }
}
