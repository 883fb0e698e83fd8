//! CSV persistence for the ledger file.
//!
//! The file is plain comma-separated text with a header row. Reads load the
//! whole file; deletes rewrite it in full through a temporary file swapped in
//! with a rename. A missing file is initialized with the header row; a file
//! that exists but does not parse is reported as [`LedgerError::Corrupt`].
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    Amount,
    error::LedgerError,
    record::{Record, TIMESTAMP_FORMAT},
};

pub(crate) const HEADER: [&str; 5] = ["id", "date", "amount", "category", "note"];

/// One line of the file. Timestamps and ids stay strings here; parsing into
/// typed fields happens in [`Store::record_from_row`] so a bad line can be
/// reported with its line number.
#[derive(Debug, Serialize, Deserialize)]
struct Row {
    id: String,
    date: String,
    amount: Amount,
    category: String,
    note: String,
}

impl From<&Record> for Row {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.to_string(),
            date: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            amount: record.amount,
            category: record.category.clone(),
            note: record.note.clone(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the file, oldest first.
    ///
    /// A missing file is created with the header row and yields an empty
    /// ledger. Any parse failure is a [`LedgerError::Corrupt`].
    pub fn load_or_init(&self) -> Result<Vec<Record>, LedgerError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.init()?;
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let header_ok = {
            let headers = reader.headers().map_err(LedgerError::Csv)?;
            headers.iter().eq(HEADER)
        };
        if !header_ok {
            return Err(self.corrupt(1, "missing or unexpected header row"));
        }

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<Row>().enumerate() {
            // Header is line 1, first record line 2.
            let line = index as u64 + 2;
            let row = row.map_err(|err| {
                let line = err.position().map_or(line, csv::Position::line);
                self.corrupt(line, err.to_string())
            })?;
            records.push(self.record_from_row(row, line)?);
        }

        Ok(records)
    }

    /// Appends one record line, leaving existing content untouched.
    pub fn append(&self, record: &Record) -> Result<(), LedgerError> {
        let file = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(Row::from(record))?;
        writer.flush()?;
        Ok(())
    }

    /// Replaces the whole file with the given records.
    ///
    /// Writes a sibling temporary file first and renames it over the ledger,
    /// so a crash mid-write never leaves a half-written file behind.
    pub fn rewrite(&self, records: &[Record]) -> Result<(), LedgerError> {
        let tmp = self.path.with_extension("tmp");
        {
            let file = fs::File::create(&tmp)?;
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);
            writer.write_record(HEADER)?;
            for record in records {
                writer.serialize(Row::from(record))?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn init(&self) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;
        tracing::debug!(path = %self.path.display(), "initialized new ledger file");
        Ok(())
    }

    fn record_from_row(&self, row: Row, line: u64) -> Result<Record, LedgerError> {
        let id = Uuid::parse_str(&row.id).map_err(|_| self.corrupt(line, "invalid record id"))?;
        let timestamp = NaiveDateTime::parse_from_str(&row.date, TIMESTAMP_FORMAT)
            .map_err(|_| self.corrupt(line, "invalid timestamp"))?;
        Ok(Record {
            id,
            timestamp,
            amount: row.amount,
            category: row.category,
            note: row.note,
        })
    }

    fn corrupt(&self, line: u64, reason: impl Into<String>) -> LedgerError {
        LedgerError::Corrupt {
            path: self.path.display().to_string(),
            line,
            reason: reason.into(),
        }
    }
}
